//! Grade parameters, presets and slider ranges.
//!
//! [`GradeParams`] is built once per pass by the host and only read while
//! pixels are processed. Presets are YAML; every field is optional and
//! missing knobs take their default.
//!
//! ```rust
//! use okgrade_ops::{DebugMode, GradeParams};
//!
//! let params = GradeParams::from_yaml_str("
//! hue:
//!   bands:
//!     red: 90.0
//! debug_mode: 2
//! ").unwrap();
//!
//! assert_eq!(params.hue.bands.red, 90.0);
//! assert_eq!(params.lightness.pivot, 0.18);
//! assert_eq!(params.debug_mode, DebugMode::Chroma);
//! ```

use std::fmt;
use std::path::Path;

use okgrade_lut::{CurveStatus, HueLutView};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::OpsResult;

/// Lightness controls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightnessGrade {
    /// Multiplier on L.
    pub gain: f32,
    /// Added to L after the gain.
    pub offset: f32,
    /// Contrast around `pivot` (1 = none).
    pub contrast: f32,
    /// Contrast anchor.
    pub pivot: f32,
}

impl Default for LightnessGrade {
    fn default() -> Self {
        Self {
            gain: 1.0,
            offset: 0.0,
            contrast: 1.0,
            pivot: 0.18,
        }
    }
}

/// Chroma controls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromaGrade {
    /// Multiplier on C.
    pub gain: f32,
    /// Added to C after the gain.
    pub offset: f32,
}

impl Default for ChromaGrade {
    fn default() -> Self {
        Self {
            gain: 1.0,
            offset: 0.0,
        }
    }
}

/// Shift magnitudes, in degrees, for the six fixed hue bands.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BandShifts {
    #[allow(missing_docs)]
    pub red: f32,
    #[allow(missing_docs)]
    pub yellow: f32,
    #[allow(missing_docs)]
    pub green: f32,
    #[allow(missing_docs)]
    pub cyan: f32,
    #[allow(missing_docs)]
    pub blue: f32,
    #[allow(missing_docs)]
    pub magenta: f32,
}

impl BandShifts {
    /// Shifts in band order: red, yellow, green, cyan, blue, magenta.
    pub fn as_array(&self) -> [f32; 6] {
        [
            self.red,
            self.yellow,
            self.green,
            self.cyan,
            self.blue,
            self.magenta,
        ]
    }
}

/// A single user-positioned hue correction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetHue {
    /// Window centre in degrees (wrapped before use).
    pub center_deg: f32,
    /// Shift applied at the centre, in degrees.
    pub shift_deg: f32,
    /// Window half-width in degrees.
    pub falloff_deg: f32,
}

impl Default for TargetHue {
    fn default() -> Self {
        Self {
            center_deg: 0.0,
            shift_deg: 0.0,
            falloff_deg: 25.0,
        }
    }
}

/// Hue controls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HueGrade {
    /// Global hue rotation in degrees.
    pub shift_deg: f32,
    /// Chroma at which hue operations reach full strength.
    pub chroma_threshold: f32,
    /// Per-band shifts.
    pub bands: BandShifts,
    /// Targeted correction.
    pub target: TargetHue,
}

impl Default for HueGrade {
    fn default() -> Self {
        Self {
            shift_deg: 0.0,
            chroma_threshold: 0.05,
            bands: BandShifts::default(),
            target: TargetHue::default(),
        }
    }
}

/// Hue-curve gating flags as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveParams {
    /// Curve correction switched on by the user.
    pub enabled: bool,
    /// Host has a table wired in.
    pub connected: bool,
    /// Declared table width in entries.
    pub width: i32,
}

impl Default for CurveParams {
    fn default() -> Self {
        Self {
            enabled: false,
            connected: false,
            width: 360,
        }
    }
}

impl CurveParams {
    /// Why the table would or would not be sampled with this buffer.
    pub fn status(&self, buffer: Option<&[[f32; 4]]>) -> CurveStatus {
        self.resolve(buffer).0
    }

    /// Resolves the gate into a sampling handle.
    pub fn resolve<'a>(
        &self,
        buffer: Option<&'a [[f32; 4]]>,
    ) -> (CurveStatus, Option<HueLutView<'a>>) {
        HueLutView::resolve(self.enabled, self.connected, self.width, buffer)
    }
}

/// Debug visualisation selector.
///
/// Stored by hosts as an integer 0..=5; anything else reads as [`DebugMode::Off`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum DebugMode {
    /// Normal graded output.
    #[default]
    Off,
    /// Graded lightness as gray.
    Lightness,
    /// Graded chroma as gray.
    Chroma,
    /// Graded hue / 360 as gray.
    Hue,
    /// Achromatic fade mask.
    ChromaWeight,
    /// Raw hue-curve sample at the original hue.
    CurveLut,
}

impl DebugMode {
    /// All modes in selector order.
    pub const ALL: [Self; 6] = [
        Self::Off,
        Self::Lightness,
        Self::Chroma,
        Self::Hue,
        Self::ChromaWeight,
        Self::CurveLut,
    ];
}

impl From<i32> for DebugMode {
    fn from(v: i32) -> Self {
        match v {
            1 => Self::Lightness,
            2 => Self::Chroma,
            3 => Self::Hue,
            4 => Self::ChromaWeight,
            5 => Self::CurveLut,
            _ => Self::Off,
        }
    }
}

impl From<DebugMode> for i32 {
    fn from(m: DebugMode) -> Self {
        match m {
            DebugMode::Off => 0,
            DebugMode::Lightness => 1,
            DebugMode::Chroma => 2,
            DebugMode::Hue => 3,
            DebugMode::ChromaWeight => 4,
            DebugMode::CurveLut => 5,
        }
    }
}

impl fmt::Display for DebugMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Off => "off",
            Self::Lightness => "lightness",
            Self::Chroma => "chroma",
            Self::Hue => "hue",
            Self::ChromaWeight => "chroma-weight",
            Self::CurveLut => "curve-lut",
        };
        f.write_str(name)
    }
}

/// Complete parameter set for one grading pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradeParams {
    /// Lightness grade.
    pub lightness: LightnessGrade,
    /// Chroma grade.
    pub chroma: ChromaGrade,
    /// Hue operations.
    pub hue: HueGrade,
    /// Hue-curve gate.
    pub curve: CurveParams,
    /// Blend between input (0) and graded (1).
    pub mix: f32,
    /// Clamp graded RGB to [0, 1] before mixing.
    pub clamp_output: bool,
    /// Pass pixels through untouched.
    pub bypass: bool,
    /// Debug visualisation.
    pub debug_mode: DebugMode,
}

impl Default for GradeParams {
    fn default() -> Self {
        Self {
            lightness: LightnessGrade::default(),
            chroma: ChromaGrade::default(),
            hue: HueGrade::default(),
            curve: CurveParams::default(),
            mix: 1.0,
            clamp_output: false,
            bypass: false,
            debug_mode: DebugMode::Off,
        }
    }
}

impl GradeParams {
    /// Parses a YAML preset. Missing fields take their defaults.
    pub fn from_yaml_str(yaml: &str) -> OpsResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads a YAML preset from disk.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> OpsResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let params = Self::from_yaml_str(&text)?;
        debug!(path = %path.display(), "loaded grade preset");
        Ok(params)
    }

    /// Serializes to a YAML preset.
    pub fn to_yaml_string(&self) -> OpsResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Current value of every ranged knob, keyed like [`PARAM_RANGES`].
    pub fn knobs(&self) -> [(&'static str, f32); 18] {
        let b = &self.hue.bands;
        let t = &self.hue.target;
        [
            ("l_gain", self.lightness.gain),
            ("l_offset", self.lightness.offset),
            ("l_contrast", self.lightness.contrast),
            ("l_pivot", self.lightness.pivot),
            ("c_gain", self.chroma.gain),
            ("c_offset", self.chroma.offset),
            ("hue_shift_deg", self.hue.shift_deg),
            ("hue_chroma_threshold", self.hue.chroma_threshold),
            ("hue_shift_red", b.red),
            ("hue_shift_yellow", b.yellow),
            ("hue_shift_green", b.green),
            ("hue_shift_cyan", b.cyan),
            ("hue_shift_blue", b.blue),
            ("hue_shift_magenta", b.magenta),
            ("hue_target_deg", t.center_deg),
            ("hue_target_shift", t.shift_deg),
            ("hue_target_falloff_deg", t.falloff_deg),
            ("mix", self.mix),
        ]
    }

    /// Knobs whose value lies outside their slider range.
    ///
    /// Such values are still processed; this only lets a host warn.
    pub fn out_of_range(&self) -> Vec<(&'static ParamRange, f32)> {
        self.knobs()
            .into_iter()
            .filter_map(|(name, value)| {
                let range = ParamRange::find(name)?;
                (!range.contains(value)).then_some((range, value))
            })
            .collect()
    }
}

/// Slider range of one knob.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    /// Knob identifier.
    pub name: &'static str,
    /// Human readable label.
    pub label: &'static str,
    #[allow(missing_docs)]
    pub min: f32,
    #[allow(missing_docs)]
    pub max: f32,
}

impl ParamRange {
    const fn new(name: &'static str, label: &'static str, min: f32, max: f32) -> Self {
        Self {
            name,
            label,
            min,
            max,
        }
    }

    /// Looks up a range by knob name.
    pub fn find(name: &str) -> Option<&'static ParamRange> {
        PARAM_RANGES.iter().find(|r| r.name == name)
    }

    /// True when `value` lies within `[min, max]`.
    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Slider ranges of every float knob.
pub const PARAM_RANGES: &[ParamRange] = &[
    ParamRange::new("l_gain", "Lightness Gain", 0.0, 3.0),
    ParamRange::new("l_offset", "Lightness Offset", -1.0, 1.0),
    ParamRange::new("l_contrast", "Lightness Contrast", 0.0, 3.0),
    ParamRange::new("l_pivot", "Lightness Pivot", 0.0, 1.0),
    ParamRange::new("c_gain", "Chroma Gain", 0.0, 2.0),
    ParamRange::new("c_offset", "Chroma Offset", -0.5, 0.5),
    ParamRange::new("hue_shift_deg", "Hue Shift", -360.0, 360.0),
    ParamRange::new("hue_chroma_threshold", "Hue Chroma Threshold", 0.0, 0.2),
    ParamRange::new("hue_shift_red", "Red", -180.0, 180.0),
    ParamRange::new("hue_shift_yellow", "Yellow", -180.0, 180.0),
    ParamRange::new("hue_shift_green", "Green", -180.0, 180.0),
    ParamRange::new("hue_shift_cyan", "Cyan", -180.0, 180.0),
    ParamRange::new("hue_shift_blue", "Blue", -180.0, 180.0),
    ParamRange::new("hue_shift_magenta", "Magenta", -180.0, 180.0),
    ParamRange::new("hue_target_deg", "Target Hue", 0.0, 360.0),
    ParamRange::new("hue_target_shift", "Target Shift", -180.0, 180.0),
    ParamRange::new("hue_target_falloff_deg", "Target Falloff", 1.0, 180.0),
    ParamRange::new("mix", "Mix", 0.0, 1.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = GradeParams::default();
        assert_eq!(p.lightness, LightnessGrade { gain: 1.0, offset: 0.0, contrast: 1.0, pivot: 0.18 });
        assert_eq!(p.chroma, ChromaGrade { gain: 1.0, offset: 0.0 });
        assert_eq!(p.hue.chroma_threshold, 0.05);
        assert_eq!(p.hue.bands, BandShifts::default());
        assert_eq!(p.hue.target.falloff_deg, 25.0);
        assert_eq!(p.curve, CurveParams { enabled: false, connected: false, width: 360 });
        assert_eq!(p.mix, 1.0);
        assert!(!p.clamp_output && !p.bypass);
        assert_eq!(p.debug_mode, DebugMode::Off);
    }

    #[test]
    fn test_partial_yaml() {
        let p = GradeParams::from_yaml_str("chroma:\n  offset: -0.2\nmix: 0.5\n").unwrap();
        assert_eq!(p.chroma.offset, -0.2);
        assert_eq!(p.chroma.gain, 1.0);
        assert_eq!(p.mix, 0.5);
        assert_eq!(p.lightness, LightnessGrade::default());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(GradeParams::from_yaml_str("{}").unwrap(), GradeParams::default());
    }

    #[test]
    fn test_yaml_round_trip() {
        let mut p = GradeParams::default();
        p.hue.bands.cyan = -30.0;
        p.curve.enabled = true;
        p.debug_mode = DebugMode::CurveLut;
        let text = p.to_yaml_string().unwrap();
        assert!(text.contains("debug_mode: 5"));
        assert_eq!(GradeParams::from_yaml_str(&text).unwrap(), p);
    }

    #[test]
    fn test_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preset.yaml");
        std::fs::write(&path, "bypass: true\n").unwrap();
        assert!(GradeParams::from_yaml_file(&path).unwrap().bypass);
        assert!(GradeParams::from_yaml_file(dir.path().join("missing.yaml")).is_err());
    }

    #[test]
    fn test_bad_yaml() {
        assert!(GradeParams::from_yaml_str("mix: [1, 2]").is_err());
    }

    #[test]
    fn test_debug_mode_from_int() {
        for (i, mode) in DebugMode::ALL.iter().enumerate() {
            assert_eq!(DebugMode::from(i as i32), *mode);
            assert_eq!(i32::from(*mode), i as i32);
        }
        assert_eq!(DebugMode::from(6), DebugMode::Off);
        assert_eq!(DebugMode::from(-1), DebugMode::Off);
        let p = GradeParams::from_yaml_str("debug_mode: 42").unwrap();
        assert_eq!(p.debug_mode, DebugMode::Off);
    }

    #[test]
    fn test_ranges_cover_knobs() {
        let p = GradeParams::default();
        for range in PARAM_RANGES {
            assert!(p.knobs().iter().any(|(n, _)| *n == range.name), "{}", range.name);
            assert!(range.min < range.max);
        }
    }

    #[test]
    fn test_out_of_range() {
        let mut p = GradeParams::default();
        assert!(p.out_of_range().is_empty());
        p.mix = 1.5;
        p.hue.bands.red = -200.0;
        let bad: Vec<&str> = p.out_of_range().iter().map(|(r, _)| r.name).collect();
        assert_eq!(bad, vec!["hue_shift_red", "mix"]);
    }

    #[test]
    fn test_curve_status() {
        let lut = [[0.5_f32; 4]; 8];
        let mut curve = CurveParams::default();
        assert_eq!(curve.status(Some(&lut[..])), CurveStatus::Disabled);
        curve.enabled = true;
        assert_eq!(curve.status(Some(&lut[..])), CurveStatus::Disconnected);
        curve.connected = true;
        assert_eq!(curve.status(None), CurveStatus::MissingBuffer);
        assert_eq!(curve.status(Some(&lut[..])), CurveStatus::Ready);
        curve.width = 0;
        assert_eq!(curve.status(Some(&lut[..])), CurveStatus::InvalidWidth);
    }
}
