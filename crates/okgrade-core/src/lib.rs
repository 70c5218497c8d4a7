//! # okgrade-core
//!
//! Foundational types shared by the okgrade crates.
//!
//! - [`Rgba`] - a linear-light RGBA pixel, `f32` per channel
//!
//! ## Crate Structure
//!
//! ```text
//! okgrade-core (this crate)
//!    ^
//!    +-- okgrade-ops (per-pixel grade, buffer helpers)
//!    +-- okgrade-cli (reference host)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod pixel;

pub use pixel::Rgba;
