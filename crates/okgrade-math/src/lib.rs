//! # okgrade-math
//!
//! Numeric leaves shared by the okgrade crates:
//!
//! - [`Mat3`] - 3x3 matrices for the linear stages of the colour conversion
//! - [`Vec3`] - 3-component vectors for RGB, XYZ, LMS and Lab triplets
//! - Interpolation utilities ([`lerp`], [`saturate`], [`smoothstep`])
//! - Hue-angle helpers ([`wrap_degrees`], [`hue_delta`], [`signed_cbrt`])
//!
//! # Design
//!
//! All matrix operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Everything is `f64`. The colour matrices are published to 16 significant
//! digits and the OKLab round trip is only exact to ~1e-5 when the
//! intermediate math keeps them.
//!
//! # Usage
//!
//! ```rust
//! use okgrade_math::{Mat3, Vec3};
//!
//! let lin_srgb_to_xyz = Mat3::from_rows([
//!     [0.4123907992659595, 0.3575843393838780, 0.1804807884018343],
//!     [0.2126390058715104, 0.7151686787677559, 0.0721923153607337],
//!     [0.0193308187155918, 0.1191947797946260, 0.9505321522496606],
//! ]);
//!
//! let xyz = lin_srgb_to_xyz * Vec3::new(1.0, 1.0, 1.0);
//! assert!((xyz.y - 1.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod angle;
mod interp;
mod mat3;
mod vec3;

pub use angle::*;
pub use interp::*;
pub use mat3::*;
pub use vec3::*;
