//! Owned hue-curve table.

use crate::sampler::HueLutView;
use crate::{LutError, LutResult};

/// Channels per table entry (RGBA).
const CHANNELS: usize = 4;

/// Value every channel holds in the identity table.
const NEUTRAL: f32 = 0.5;

/// An owned, single-row hue-curve table.
///
/// Entry `i` of a `W`-wide table corresponds to normalized hue `i / (W - 1)`.
///
/// # Example
///
/// ```rust
/// use okgrade_lut::HueCurveLut;
///
/// // Halve chroma everywhere, leave hue and lightness alone
/// let lut = HueCurveLut::from_fn(360, |_| [0.5, 0.25, 0.5]).unwrap();
/// let sample = lut.view().sample(200.0);
/// assert!((sample.chroma_mult - 0.5).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HueCurveLut {
    entries: Vec<[f32; 4]>,
}

impl HueCurveLut {
    /// Flat table at 0.5: no hue shift, unit multipliers.
    pub fn identity(width: usize) -> LutResult<Self> {
        Self::from_entries(vec![[NEUTRAL, NEUTRAL, NEUTRAL, 1.0]; width])
    }

    /// Builds a table from RGBA entries.
    pub fn from_entries(entries: Vec<[f32; 4]>) -> LutResult<Self> {
        if entries.len() < 2 {
            return Err(LutError::InvalidSize(format!(
                "hue curve needs at least 2 entries, got {}",
                entries.len()
            )));
        }
        Ok(Self { entries })
    }

    /// Builds a table from a flat interleaved RGBA buffer.
    pub fn from_rgba(data: Vec<f32>) -> LutResult<Self> {
        if data.len() % CHANNELS != 0 {
            return Err(LutError::ChannelMismatch {
                len: data.len(),
                channels: CHANNELS,
            });
        }
        let entries = data
            .chunks_exact(CHANNELS)
            .map(|c| [c[0], c[1], c[2], c[3]])
            .collect();
        Self::from_entries(entries)
    }

    /// Builds a table by evaluating `f` at each entry's normalized hue.
    ///
    /// `f` returns the encoded (R, G, B) triple; alpha is set to 1.
    pub fn from_fn(width: usize, f: impl Fn(f32) -> [f32; 3]) -> LutResult<Self> {
        if width < 2 {
            return Err(LutError::InvalidSize(format!(
                "hue curve needs at least 2 entries, got {}",
                width
            )));
        }
        let last = (width - 1) as f32;
        let entries = (0..width)
            .map(|i| {
                let [r, g, b] = f(i as f32 / last);
                [r, g, b, 1.0]
            })
            .collect();
        Ok(Self { entries })
    }

    /// Number of entries.
    #[inline]
    pub fn width(&self) -> usize {
        self.entries.len()
    }

    /// Raw RGBA entries.
    #[inline]
    pub fn entries(&self) -> &[[f32; 4]] {
        &self.entries
    }

    /// True when every entry decodes to the identity correction.
    pub fn is_identity(&self) -> bool {
        self.entries
            .iter()
            .all(|e| e[..3].iter().all(|&v| (v - NEUTRAL).abs() < 1e-6))
    }

    /// Borrows the whole table for sampling.
    #[inline]
    pub fn view(&self) -> HueLutView<'_> {
        HueLutView::from_validated(&self.entries)
    }
}
