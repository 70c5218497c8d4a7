//! Per-pixel OKLCH grade.
//!
//! [`OklchGrade`] is built once per pass from [`GradeParams`] and an optional
//! hue-curve buffer. Building it resolves the curve gate a single time, so
//! the per-pixel path only sees `Option<HueLutView>` and can never sample an
//! unusable table.
//!
//! # Pipeline
//!
//! ```text
//! RGB -> OKLCH -> tone (L, C) -> curve multipliers -> hue shift -> wrap
//!     -> RGB -> clamp? -> mix with input -> alpha from input
//! ```
//!
//! Debug modes stop after the hue shift and emit a gray (or the raw curve
//! sample) instead of the reconstructed colour.
//!
//! # Example
//!
//! ```rust
//! use okgrade_core::Rgba;
//! use okgrade_ops::{GradeParams, OklchGrade};
//!
//! let mut params = GradeParams::default();
//! params.chroma.gain = 0.0;
//!
//! let grade = OklchGrade::new(&params, None);
//! let out = grade.process(Rgba::new(0.8, 0.2, 0.1, 0.5));
//! assert!((out.r - out.g).abs() < 1e-4 && (out.g - out.b).abs() < 1e-4);
//! assert_eq!(out.a, 0.5);
//! ```

use okgrade_color::{Oklch, linear_srgb_to_oklch, oklch_to_linear_srgb};
use okgrade_core::Rgba;
use okgrade_lut::{CurveSample, CurveStatus, HueLutView};
use okgrade_math::{Vec3, wrap_degrees};
use tracing::{debug, trace, warn};

use crate::error::check_rgba_len;
use crate::hue::HueShifter;
use crate::params::{DebugMode, GradeParams};
use crate::tone::{ToneGrade, apply_curve_multipliers};
use crate::OpsResult;

/// Grey emitted by [`DebugMode::CurveLut`] when the curve is inactive.
const CURVE_DEBUG_NEUTRAL: f32 = 0.5;

/// Intermediate values for one pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelTrace {
    /// OKLCH of the input.
    pub input: Oklch,
    /// Graded OKLCH before reconstruction.
    pub graded: Oklch,
    /// Chroma fade applied to the hue shift.
    pub chroma_weight: f64,
    /// Unwrapped hue shift in degrees.
    pub hue_shift_deg: f64,
    /// Raw curve value at the original hue, if the curve is active.
    pub curve_raw: Option<[f64; 3]>,
}

/// A grading pass: resolved parameters plus the gated curve table.
#[derive(Debug, Clone, Copy)]
pub struct OklchGrade<'a> {
    tone: ToneGrade,
    hue: HueShifter,
    curve: Option<HueLutView<'a>>,
    curve_status: CurveStatus,
    mix: f64,
    clamp_output: bool,
    bypass: bool,
    debug_mode: DebugMode,
}

impl<'a> OklchGrade<'a> {
    /// Prepares a pass. `lut` is the host's hue-curve row, if any.
    pub fn new(params: &GradeParams, lut: Option<&'a [[f32; 4]]>) -> Self {
        for (range, value) in params.out_of_range() {
            warn!(
                knob = range.name,
                value,
                min = range.min,
                max = range.max,
                "parameter outside slider range"
            );
        }

        let (curve_status, curve) = params.curve.resolve(lut);
        if params.curve.enabled && !curve_status.is_ready() {
            debug!(?curve_status, "hue curve unavailable, skipping curve stage");
        }

        Self {
            tone: ToneGrade::new(&params.lightness, &params.chroma),
            hue: HueShifter::new(&params.hue),
            curve,
            curve_status,
            mix: (params.mix as f64).clamp(0.0, 1.0),
            clamp_output: params.clamp_output,
            bypass: params.bypass,
            debug_mode: params.debug_mode,
        }
    }

    /// Gate outcome for this pass.
    #[inline]
    pub fn curve_status(&self) -> CurveStatus {
        self.curve_status
    }

    /// Sampling handle, present only when the curve is active.
    #[inline]
    pub fn curve(&self) -> Option<HueLutView<'a>> {
        self.curve
    }

    /// Grades the colour part of a pixel without assembling output.
    pub fn trace(&self, rgb: [f32; 3]) -> PixelTrace {
        let input = linear_srgb_to_oklch(Vec3::from_f32(rgb));

        let (mut l, mut c) = self.tone.apply(input.l, input.c);

        // Sampled once at the original hue; feeds both L/C and the hue shift.
        let curve_raw = self.curve.map(|view| view.sample_raw(input.h));
        let curve_sample = curve_raw.map(CurveSample::decode);
        if let Some(sample) = &curve_sample {
            (l, c) = apply_curve_multipliers(l, c, sample);
        }

        let shift = self.hue.accumulate(input.h, input.c, curve_sample.as_ref());
        let h = wrap_degrees(input.h + shift.total_deg);

        PixelTrace {
            input,
            graded: Oklch::new(l, c, h),
            chroma_weight: shift.chroma_weight,
            hue_shift_deg: shift.total_deg,
            curve_raw,
        }
    }

    /// Grades one pixel. Alpha is always copied from the input.
    pub fn process(&self, px: Rgba) -> Rgba {
        if self.bypass {
            return px;
        }

        let t = self.trace(px.rgb());
        let gray = |v: f64| Rgba::gray(v as f32, px.a);

        match self.debug_mode {
            DebugMode::Lightness => return gray(t.graded.l),
            DebugMode::Chroma => return gray(t.graded.c),
            DebugMode::Hue => return gray(t.graded.h / 360.0),
            DebugMode::ChromaWeight => return gray(t.chroma_weight),
            DebugMode::CurveLut => {
                let rgb = match t.curve_raw {
                    Some(raw) => raw.map(|v| v as f32),
                    None => [CURVE_DEBUG_NEUTRAL; 3],
                };
                return px.with_rgb(rgb);
            }
            DebugMode::Off => {}
        }

        let mut graded = oklch_to_linear_srgb(t.graded);
        if self.clamp_output {
            graded = graded.clamp01();
        }

        let input = Vec3::from_f32(px.rgb());
        let out = input + (graded - input) * self.mix;
        px.with_rgb(out.to_f32())
    }
}

/// Grades an interleaved RGBA buffer in place on the calling thread.
pub fn apply_rgba(grade: &OklchGrade<'_>, data: &mut [f32]) -> OpsResult<()> {
    check_rgba_len(data.len())?;
    debug!(pixels = data.len() / 4, "grading RGBA buffer");

    for chunk in data.chunks_exact_mut(4) {
        let px = Rgba::new(chunk[0], chunk[1], chunk[2], chunk[3]);
        chunk.copy_from_slice(&grade.process(px).to_array());
    }

    trace!("RGBA buffer done");
    Ok(())
}

/// Grades a slice of pixels in place on the calling thread.
pub fn apply_pixels(grade: &OklchGrade<'_>, pixels: &mut [Rgba]) {
    for px in pixels.iter_mut() {
        *px = grade.process(*px);
    }
}
