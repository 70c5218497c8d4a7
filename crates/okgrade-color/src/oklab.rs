//! OKLab / OKLCH types and the forward and inverse conversions.
//!
//! Hue is in degrees, always wrapped to [0, 360). Chroma at or below
//! [`ACHROMATIC_EPSILON`] reports hue 0 so neutrals read back a stable angle
//! instead of `atan2` noise.

use crate::matrices::{
    LIN_SRGB_TO_XYZ, LMS_TO_OKLAB, LMS_TO_XYZ, OKLAB_TO_LMS, XYZ_TO_LIN_SRGB, XYZ_TO_LMS,
};
use okgrade_math::{signed_cbrt, wrap_degrees, Vec3};

/// Chroma at or below which hue is forced to 0.
pub const ACHROMATIC_EPSILON: f64 = 4e-6;

/// Cartesian OKLab colour.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Oklab {
    /// Perceptual lightness.
    pub l: f64,
    /// Green-red axis.
    pub a: f64,
    /// Blue-yellow axis.
    pub b: f64,
}

/// Polar OKLCH colour.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Oklch {
    /// Perceptual lightness.
    pub l: f64,
    /// Chroma, distance from the neutral axis.
    pub c: f64,
    /// Hue angle in degrees, [0, 360).
    pub h: f64,
}

impl Oklab {
    /// Creates a new OKLab value.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Polar form.
    ///
    /// ```rust
    /// use okgrade_color::Oklab;
    ///
    /// let lch = Oklab::new(0.5, 0.0, -0.1).to_lch();
    /// assert_eq!(lch.h, 270.0);
    /// ```
    pub fn to_lch(self) -> Oklch {
        let c = self.a.hypot(self.b);
        let h = if c <= ACHROMATIC_EPSILON {
            0.0
        } else {
            wrap_degrees(self.b.atan2(self.a).to_degrees())
        };
        Oklch { l: self.l, c, h }
    }
}

impl Oklch {
    /// Creates a new OKLCH value. Hue is taken as given.
    #[inline]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Cartesian form.
    pub fn to_lab(self) -> Oklab {
        let (sin, cos) = self.h.to_radians().sin_cos();
        Oklab::new(self.l, self.c * cos, self.c * sin)
    }

    /// True when hue carries no information.
    #[inline]
    pub fn is_achromatic(self) -> bool {
        self.c <= ACHROMATIC_EPSILON
    }
}

/// Linear sRGB to OKLab.
pub fn linear_srgb_to_oklab(rgb: Vec3) -> Oklab {
    let lms = XYZ_TO_LMS * (LIN_SRGB_TO_XYZ * rgb);
    let lab = LMS_TO_OKLAB * lms.map(signed_cbrt);
    Oklab::new(lab.x, lab.y, lab.z)
}

/// OKLab to linear sRGB.
pub fn oklab_to_linear_srgb(lab: Oklab) -> Vec3 {
    let lms_ = OKLAB_TO_LMS * Vec3::new(lab.l, lab.a, lab.b);
    let lms = lms_.map(|v| v * v * v);
    XYZ_TO_LIN_SRGB * (LMS_TO_XYZ * lms)
}

/// Linear sRGB to OKLCH.
#[inline]
pub fn linear_srgb_to_oklch(rgb: Vec3) -> Oklch {
    linear_srgb_to_oklab(rgb).to_lch()
}

/// OKLCH to linear sRGB.
#[inline]
pub fn oklch_to_linear_srgb(lch: Oklch) -> Vec3 {
    oklab_to_linear_srgb(lch.to_lab())
}

/// Conversion shorthand for `f32` RGB triplets.
///
/// # Example
///
/// ```rust
/// use okgrade_color::OklchConvert;
///
/// let lch = [0.18_f32, 0.18, 0.18].to_oklch();
/// assert!(lch.is_achromatic());
/// assert_eq!(lch.h, 0.0);
/// ```
pub trait OklchConvert {
    /// Converts linear sRGB to OKLCH.
    fn to_oklch(self) -> Oklch;
}

impl OklchConvert for [f32; 3] {
    #[inline]
    fn to_oklch(self) -> Oklch {
        linear_srgb_to_oklch(Vec3::from_f32(self))
    }
}

impl OklchConvert for Vec3 {
    #[inline]
    fn to_oklch(self) -> Oklch {
        linear_srgb_to_oklch(self)
    }
}
