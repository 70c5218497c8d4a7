//! # okgrade-color
//!
//! Bidirectional conversion between scene-linear sRGB and the polar OKLCH
//! space the grade operates in.
//!
//! # Architecture
//!
//! ```text
//!  linear sRGB --LIN_SRGB_TO_XYZ--> XYZ (D65) --XYZ_TO_LMS--> LMS
//!                                                              |
//!                                                         signed cbrt
//!                                                              |
//!  OKLCH <--polar-- OKLab <--------LMS_TO_OKLAB------------ LMS'
//! ```
//!
//! The inverse walks the same chain backwards, cubing instead of taking the
//! cube root.
//!
//! # Quick Start
//!
//! ```rust
//! use okgrade_color::{linear_srgb_to_oklch, oklch_to_linear_srgb};
//! use okgrade_math::Vec3;
//!
//! let red = Vec3::new(1.0, 0.0, 0.0);
//! let lch = linear_srgb_to_oklch(red);
//! assert!((lch.h - 29.23).abs() < 0.01);
//!
//! let back = oklch_to_linear_srgb(lch);
//! assert!((back - red).max_abs() < 1e-9);
//! ```
//!
//! # Dependencies
//!
//! - [`okgrade-math`] - `Mat3`, `Vec3`, `signed_cbrt`, `wrap_degrees`
//!
//! # Used By
//!
//! - `okgrade-ops` - per-pixel grade

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod matrices;
pub mod oklab;

pub use oklab::{
    linear_srgb_to_oklab, linear_srgb_to_oklch, oklab_to_linear_srgb, oklch_to_linear_srgb,
    Oklab, Oklch, OklchConvert, ACHROMATIC_EPSILON,
};

pub use okgrade_math as math;
