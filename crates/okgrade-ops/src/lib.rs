//! # okgrade-ops
//!
//! Per-pixel colour grading in OKLCH.
//!
//! A pixel is converted from linear sRGB to OKLCH, graded, and converted
//! back. The grade is layered:
//!
//! - [`tone`] - lightness gain/offset/contrast around a pivot, chroma gain/offset
//! - [`hue`] - global rotation, six fixed hue bands, one targeted window,
//!   all faded out toward neutrals
//! - hue curve - per-hue hue/chroma/lightness corrections from an
//!   [`okgrade_lut::HueCurveLut`] row, sampled at the original hue
//! - [`grade`] - orchestration, debug views, output clamp, mix, alpha passthrough
//!
//! # Example
//!
//! ```rust
//! use okgrade_core::Rgba;
//! use okgrade_ops::{GradeParams, OklchGrade};
//!
//! let mut params = GradeParams::default();
//! params.hue.bands.blue = -20.0;
//! params.mix = 0.5;
//!
//! let grade = OklchGrade::new(&params, None);
//! let out = grade.process(Rgba::new(0.05, 0.1, 0.8, 1.0));
//! assert_eq!(out.a, 1.0);
//! ```
//!
//! ## Buffers
//!
//! ```rust,ignore
//! use okgrade_ops::{apply_rgba, parallel};
//!
//! apply_rgba(&grade, &mut rgba)?;              // one thread
//! parallel::par_apply_rgba(&grade, &mut rgba)?; // Rayon pool
//! ```
//!
//! ## Hue curve
//!
//! ```rust
//! use okgrade_lut::HueCurveLut;
//! use okgrade_ops::{GradeParams, OklchGrade};
//!
//! let lut = HueCurveLut::identity(360).unwrap();
//! let mut params = GradeParams::default();
//! params.curve.enabled = true;
//! params.curve.connected = true;
//!
//! let grade = OklchGrade::new(&params, Some(lut.entries()));
//! assert!(grade.curve_status().is_ready());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod grade;
pub mod hue;
pub mod params;
pub mod tone;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use error::{OpsError, OpsResult};
pub use grade::{OklchGrade, PixelTrace, apply_pixels, apply_rgba};
pub use hue::{HueBand, HueShifter};
pub use params::{
    BandShifts, ChromaGrade, CurveParams, DebugMode, GradeParams, HueGrade, LightnessGrade,
    PARAM_RANGES, ParamRange, TargetHue,
};
pub use tone::ToneGrade;
