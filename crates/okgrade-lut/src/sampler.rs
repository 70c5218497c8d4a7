//! Gated, bilinear sampling of the hue-curve table.
//!
//! A [`HueLutView`] only exists for a usable table: the curve feature is on,
//! the host reports the table as connected, and the effective width is above
//! one. Every caller that holds a view may sample without further checks.

use okgrade_math::{lerp, wrap_degrees};
use tracing::{debug, warn};

/// Decoded per-hue correction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSample {
    /// Hue offset in degrees.
    pub hue_shift_deg: f64,
    /// Chroma multiplier.
    pub chroma_mult: f64,
    /// Lightness multiplier.
    pub lightness_mult: f64,
}

impl CurveSample {
    /// Decodes a raw (R, G, B) table value.
    #[inline]
    pub fn decode(raw: [f64; 3]) -> Self {
        Self {
            hue_shift_deg: (raw[0] - 0.5) * 360.0,
            chroma_mult: raw[1] * 2.0,
            lightness_mult: raw[2] * 2.0,
        }
    }

    /// True when the sample changes nothing.
    pub fn is_identity(&self) -> bool {
        self.hue_shift_deg.abs() < 1e-9
            && (self.chroma_mult - 1.0).abs() < 1e-9
            && (self.lightness_mult - 1.0).abs() < 1e-9
    }
}

/// Outcome of resolving the curve gate for a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveStatus {
    /// Curve correction switched off.
    Disabled,
    /// Host reports no table connected.
    Disconnected,
    /// Declared width is 1 or less.
    InvalidWidth,
    /// Connected, but no buffer (or one with fewer than 2 entries) was supplied.
    MissingBuffer,
    /// Table will be sampled.
    Ready,
}

impl CurveStatus {
    /// True when the table will be sampled.
    #[inline]
    pub fn is_ready(self) -> bool {
        self == Self::Ready
    }
}

/// A validated, read-only view of a hue-curve table (at least 2 entries).
#[derive(Debug, Clone, Copy)]
pub struct HueLutView<'a> {
    entries: &'a [[f32; 4]],
}

impl<'a> HueLutView<'a> {
    /// Wraps entries already known to hold at least two values.
    pub(crate) fn from_validated(entries: &'a [[f32; 4]]) -> Self {
        debug_assert!(entries.len() >= 2);
        Self { entries }
    }

    /// Wraps a table if it has at least two entries.
    pub fn new(entries: &'a [[f32; 4]]) -> Option<Self> {
        (entries.len() >= 2).then_some(Self { entries })
    }

    /// Resolves the three gating flags and the host buffer into a view.
    ///
    /// The effective width is `min(width, buffer entries)`, so a width that
    /// overstates the buffer never reads past it.
    pub fn resolve(
        enabled: bool,
        connected: bool,
        width: i32,
        buffer: Option<&'a [[f32; 4]]>,
    ) -> (CurveStatus, Option<Self>) {
        if !enabled {
            return (CurveStatus::Disabled, None);
        }
        if !connected {
            return (CurveStatus::Disconnected, None);
        }
        if width <= 1 {
            return (CurveStatus::InvalidWidth, None);
        }
        let Some(entries) = buffer else {
            return (CurveStatus::MissingBuffer, None);
        };

        let declared = width as usize;
        if declared != entries.len() {
            warn!(
                declared,
                buffer = entries.len(),
                "hue LUT width disagrees with buffer, sampling the overlap"
            );
        }
        let effective = declared.min(entries.len());
        match Self::new(&entries[..effective]) {
            Some(view) => {
                debug!(width = effective, "hue LUT ready");
                (CurveStatus::Ready, Some(view))
            }
            None => (CurveStatus::MissingBuffer, None),
        }
    }

    /// Number of entries sampled.
    #[inline]
    pub fn width(&self) -> usize {
        self.entries.len()
    }

    /// Continuous table position for a hue in degrees.
    #[inline]
    pub fn position(&self, hue_deg: f64) -> f64 {
        wrap_degrees(hue_deg) / 360.0 * (self.width() - 1) as f64
    }

    /// Raw (R, G, B) value at a hue, linearly interpolated between the two
    /// nearest entries.
    ///
    /// The first and last entries are not blended with each other.
    pub fn sample_raw(&self, hue_deg: f64) -> [f64; 3] {
        self.sample_at(self.position(hue_deg))
    }

    /// Raw (R, G, B) value at a continuous table position.
    ///
    /// Positions outside the table clamp to the edge entries.
    pub fn sample_at(&self, pos: f64) -> [f64; 3] {
        let last = self.width() - 1;
        let pos = pos.clamp(0.0, last as f64);
        let i0 = (pos.floor() as usize).min(last);
        let i1 = (i0 + 1).min(last);
        let t = pos - i0 as f64;

        let (e0, e1) = (&self.entries[i0], &self.entries[i1]);
        [
            lerp(e0[0] as f64, e1[0] as f64, t),
            lerp(e0[1] as f64, e1[1] as f64, t),
            lerp(e0[2] as f64, e1[2] as f64, t),
        ]
    }

    /// Decoded correction at a hue.
    #[inline]
    pub fn sample(&self, hue_deg: f64) -> CurveSample {
        CurveSample::decode(self.sample_raw(hue_deg))
    }
}
