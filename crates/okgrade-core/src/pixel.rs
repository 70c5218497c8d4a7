//! Linear-light RGBA pixel.
//!
//! Channels are scene-linear `f32`. R, G and B may be negative or above 1
//! (wide gamut, HDR). Alpha is carried through every operation untouched.
//!
//! # Memory Layout
//!
//! [`Rgba`] is `#[repr(C)]` and [`bytemuck::Pod`], so an interleaved
//! `&mut [f32]` buffer can be viewed as `&mut [Rgba]` without copying.

use bytemuck::{Pod, Zeroable};
use std::fmt;

/// A linear-light RGBA pixel.
///
/// # Example
///
/// ```
/// use okgrade_core::Rgba;
///
/// let px = Rgba::new(1.0, 0.0, 0.0, 0.5);
/// let graded = px.with_rgb([0.2, 0.4, 0.6]);
/// assert_eq!(graded.a, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Rgba {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha, never part of colour math.
    pub a: f32,
}

impl Rgba {
    /// Creates a pixel from four channels.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque pixel.
    #[inline]
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Grey pixel with the given alpha.
    #[inline]
    pub const fn gray(v: f32, a: f32) -> Self {
        Self::new(v, v, v, a)
    }

    /// Returns the colour channels.
    #[inline]
    pub const fn rgb(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Replaces the colour channels, keeping alpha.
    #[inline]
    pub const fn with_rgb(self, rgb: [f32; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2], self.a)
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(arr: [f32; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Returns true if no channel is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }
}

impl From<[f32; 4]> for Rgba {
    #[inline]
    fn from(arr: [f32; 4]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Rgba> for [f32; 4] {
    #[inline]
    fn from(px: Rgba) -> [f32; 4] {
        px.to_array()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6}, {:.6}, {:.6})", self.r, self.g, self.b, self.a)
    }
}
