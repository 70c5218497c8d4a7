//! # okgrade-lut
//!
//! The per-hue correction table consumed by the OKLCH grade.
//!
//! The table is a single row of RGBA entries indexed by normalized hue
//! (0 = 0°, last entry = 360°). Each entry encodes three corrections:
//!
//! | Channel | Meaning | Decode |
//! |---------|---------|--------|
//! | R | hue shift | `(v - 0.5) * 360` degrees |
//! | G | chroma multiplier | `v * 2` |
//! | B | lightness multiplier | `v * 2` |
//!
//! A table flat at 0.5 is the identity.
//!
//! # Types
//!
//! - [`HueCurveLut`] - owned table, built from host data or a closure
//! - [`HueLutView`] - validated borrowed view; only obtainable when the
//!   table is actually usable, so sampling can never go out of bounds
//! - [`CurveSample`] - decoded correction triple
//! - [`CurveStatus`] - why a table was or wasn't usable
//!
//! # Usage
//!
//! ```rust
//! use okgrade_lut::{CurveStatus, HueCurveLut, HueLutView};
//!
//! let lut = HueCurveLut::identity(360).unwrap();
//! let (status, view) = HueLutView::resolve(true, true, 360, Some(lut.entries()));
//! assert_eq!(status, CurveStatus::Ready);
//!
//! let sample = view.unwrap().sample(42.0);
//! assert!(sample.is_identity());
//! ```
//!
//! # Dependencies
//!
//! - [`okgrade-math`] - `wrap_degrees`, `lerp`
//! - [`thiserror`] - Error handling
//! - [`tracing`] - Gate outcome logging
//!
//! # Used By
//!
//! - `okgrade-ops` - curve stage of the grade

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod hue_curve;
mod sampler;

pub use error::{LutError, LutResult};
pub use hue_curve::HueCurveLut;
pub use sampler::{CurveSample, CurveStatus, HueLutView};
