//! Hue bands and the hue-shift accumulator.
//!
//! Every hue operation is measured against the pixel's original hue and
//! scaled by a chroma fade, so neutrals never pick up a cast:
//!
//! ```text
//! w     = smoothstep(0, max(threshold, 1e-4), C)
//! shift = w * (global
//!            + sum(band_shift * window(H, band))
//!            + target_shift * window(H, target, falloff)
//!            + curve_shift(H))
//! ```
//!
//! `window` is a raised cosine over the shortest signed hue distance. The
//! total is returned unwrapped; the caller wraps `H + shift` once.

use okgrade_lut::CurveSample;
use okgrade_math::{cosine_window, smoothstep, wrap_degrees};

use crate::params::HueGrade;

/// Half-width shared by the six fixed bands, in degrees.
pub const BAND_HALF_WIDTH: f64 = 60.0;

/// Lowest chroma threshold used by the fade.
pub const MIN_CHROMA_THRESHOLD: f64 = 1e-4;

/// Lowest target falloff, in degrees.
pub const MIN_TARGET_FALLOFF: f64 = 0.1;

/// A named hue window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueBand {
    /// Display name.
    pub name: &'static str,
    /// Window centre in degrees.
    pub center_deg: f64,
    /// Window half-width in degrees.
    pub half_width_deg: f64,
}

impl HueBand {
    /// Red, centred on 0°.
    pub const RED: Self = Self::fixed("red", 0.0);
    /// Yellow.
    pub const YELLOW: Self = Self::fixed("yellow", 85.0);
    /// Green.
    pub const GREEN: Self = Self::fixed("green", 145.0);
    /// Cyan.
    pub const CYAN: Self = Self::fixed("cyan", 195.0);
    /// Blue.
    pub const BLUE: Self = Self::fixed("blue", 265.0);
    /// Magenta.
    pub const MAGENTA: Self = Self::fixed("magenta", 325.0);

    /// Second red lobe on the 360° side of the seam.
    ///
    /// Driven by the red shift magnitude alongside [`HueBand::RED`].
    pub const RED_SEAM: Self = Self::fixed("red", 360.0);

    const fn fixed(name: &'static str, center_deg: f64) -> Self {
        Self {
            name,
            center_deg,
            half_width_deg: BAND_HALF_WIDTH,
        }
    }

    /// A user-positioned window. The centre is wrapped and the half-width
    /// floored at [`MIN_TARGET_FALLOFF`].
    pub fn target(center_deg: f64, falloff_deg: f64) -> Self {
        Self {
            name: "target",
            center_deg: wrap_degrees(center_deg),
            half_width_deg: falloff_deg.max(MIN_TARGET_FALLOFF),
        }
    }

    /// Window weight in [0, 1] for a hue in degrees.
    #[inline]
    pub fn weight(&self, hue_deg: f64) -> f64 {
        cosine_window(hue_deg, self.center_deg, self.half_width_deg)
    }
}

/// The six fixed bands in parameter order.
pub const BANDS: [HueBand; 6] = [
    HueBand::RED,
    HueBand::YELLOW,
    HueBand::GREEN,
    HueBand::CYAN,
    HueBand::BLUE,
    HueBand::MAGENTA,
];

/// Fade that takes hue operations to zero as chroma approaches zero.
#[inline]
pub fn chroma_weight(chroma: f64, threshold: f64) -> f64 {
    smoothstep(0.0, threshold.max(MIN_CHROMA_THRESHOLD), chroma)
}

/// Result of accumulating hue shifts for one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HueShift {
    /// Chroma fade applied to every term.
    pub chroma_weight: f64,
    /// Summed shift in degrees, not wrapped.
    pub total_deg: f64,
}

/// Hue operations resolved to `f64` for one pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueShifter {
    global_deg: f64,
    threshold: f64,
    band_shifts: [f64; 6],
    target: HueBand,
    target_shift_deg: f64,
}

impl HueShifter {
    /// Resolves user hue controls.
    pub fn new(params: &HueGrade) -> Self {
        Self {
            global_deg: params.shift_deg as f64,
            threshold: params.chroma_threshold as f64,
            band_shifts: params.bands.as_array().map(|s| s as f64),
            target: HueBand::target(
                params.target.center_deg as f64,
                params.target.falloff_deg as f64,
            ),
            target_shift_deg: params.target.shift_deg as f64,
        }
    }

    /// Chroma fade for a pixel's original chroma.
    #[inline]
    pub fn chroma_weight(&self, chroma: f64) -> f64 {
        chroma_weight(chroma, self.threshold)
    }

    /// Sums every hue contribution for a pixel's original hue and chroma.
    ///
    /// `curve` is the table sample at the original hue, if the curve is active.
    pub fn accumulate(&self, hue_deg: f64, chroma: f64, curve: Option<&CurveSample>) -> HueShift {
        let w = self.chroma_weight(chroma);

        let mut total = self.global_deg * w;
        for (band, shift) in BANDS.iter().zip(self.band_shifts) {
            total += shift * band.weight(hue_deg) * w;
        }
        total += self.band_shifts[0] * HueBand::RED_SEAM.weight(hue_deg) * w;
        total += self.target_shift_deg * self.target.weight(hue_deg) * w;
        if let Some(sample) = curve {
            total += sample.hue_shift_deg * w;
        }

        HueShift {
            chroma_weight: w,
            total_deg: total,
        }
    }
}

impl Default for HueShifter {
    fn default() -> Self {
        Self::new(&HueGrade::default())
    }
}
