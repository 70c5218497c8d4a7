//! Global lightness and chroma grade.
//!
//! Operates on the (L, C) pair only; hue is left alone.
//!
//! ```text
//! L' = max(0, (L * gain + offset - pivot) * contrast + pivot)
//! C' = max(0, C * gain + offset)
//! ```
//!
//! `pivot` and `contrast` are floored at 0 before use.

use okgrade_lut::CurveSample;

use crate::params::{ChromaGrade, LightnessGrade};

/// Tone grade resolved to `f64` for one pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneGrade {
    l_gain: f64,
    l_offset: f64,
    contrast: f64,
    pivot: f64,
    c_gain: f64,
    c_offset: f64,
}

impl ToneGrade {
    /// Grade that leaves L and C unchanged.
    pub fn identity() -> Self {
        Self::new(&LightnessGrade::default(), &ChromaGrade::default())
    }

    /// Resolves user controls, flooring pivot and contrast at 0.
    pub fn new(lightness: &LightnessGrade, chroma: &ChromaGrade) -> Self {
        Self {
            l_gain: lightness.gain as f64,
            l_offset: lightness.offset as f64,
            contrast: (lightness.contrast as f64).max(0.0),
            pivot: (lightness.pivot as f64).max(0.0),
            c_gain: chroma.gain as f64,
            c_offset: chroma.offset as f64,
        }
    }

    /// True if [`apply`](Self::apply) is a no-op for non-negative input.
    pub fn is_identity(&self) -> bool {
        self.l_gain == 1.0
            && self.l_offset == 0.0
            && self.contrast == 1.0
            && self.c_gain == 1.0
            && self.c_offset == 0.0
    }

    /// Graded lightness.
    #[inline]
    pub fn lightness(&self, l: f64) -> f64 {
        let l = l * self.l_gain + self.l_offset;
        ((l - self.pivot) * self.contrast + self.pivot).max(0.0)
    }

    /// Graded chroma.
    #[inline]
    pub fn chroma(&self, c: f64) -> f64 {
        (c * self.c_gain + self.c_offset).max(0.0)
    }

    /// Grades an (L, C) pair.
    #[inline]
    pub fn apply(&self, l: f64, c: f64) -> (f64, f64) {
        (self.lightness(l), self.chroma(c))
    }
}

impl Default for ToneGrade {
    fn default() -> Self {
        Self::identity()
    }
}

/// Scales a graded (L, C) pair by a curve sample's multipliers.
#[inline]
pub fn apply_curve_multipliers(l: f64, c: f64, sample: &CurveSample) -> (f64, f64) {
    (
        (l * sample.lightness_mult).max(0.0),
        (c * sample.chroma_mult).max(0.0),
    )
}
