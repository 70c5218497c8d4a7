//! CLI command implementations

pub mod apply;
pub mod pixel;
pub mod preset;
pub mod ranges;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Args;
use okgrade_lut::HueCurveLut;
use okgrade_ops::{DebugMode, GradeParams};
use tracing::{debug, info};

/// Grade knobs shared by `pixel` and `apply`. Each one overrides the preset.
#[derive(Args, Debug, Default, Clone)]
pub struct GradeOverrides {
    /// YAML preset to start from (defaults otherwise)
    #[arg(short, long)]
    pub preset: Option<PathBuf>,

    /// Hue-curve table: raw little-endian RGBA f32 row, one entry per 16 bytes
    #[arg(short, long)]
    pub lut: Option<PathBuf>,

    /// Enable the hue curve (the preset decides otherwise)
    #[arg(long)]
    pub curve: bool,

    /// Lightness gain
    #[arg(long)]
    pub l_gain: Option<f32>,

    /// Lightness offset
    #[arg(long, allow_hyphen_values = true)]
    pub l_offset: Option<f32>,

    /// Lightness contrast around the pivot
    #[arg(long)]
    pub contrast: Option<f32>,

    /// Contrast pivot
    #[arg(long)]
    pub pivot: Option<f32>,

    /// Chroma gain
    #[arg(long)]
    pub c_gain: Option<f32>,

    /// Chroma offset
    #[arg(long, allow_hyphen_values = true)]
    pub c_offset: Option<f32>,

    /// Global hue shift in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub hue_shift: Option<f32>,

    /// Band shift as NAME=DEGREES (red, yellow, green, cyan, blue, magenta)
    #[arg(long = "band", value_parser = parse_band, allow_hyphen_values = true)]
    pub bands: Vec<(String, f32)>,

    /// Target hue centre in degrees
    #[arg(long)]
    pub target_hue: Option<f32>,

    /// Shift applied at the target hue
    #[arg(long, allow_hyphen_values = true)]
    pub target_shift: Option<f32>,

    /// Target window half-width in degrees
    #[arg(long)]
    pub target_falloff: Option<f32>,

    /// Blend with the input (0..1)
    #[arg(long)]
    pub mix: Option<f32>,

    /// Clamp graded RGB to [0, 1]
    #[arg(long)]
    pub clamp: bool,

    /// Debug view: 0 off, 1 L, 2 C, 3 H, 4 chroma weight, 5 curve
    #[arg(long)]
    pub debug: Option<i32>,
}

/// Parse a `NAME=DEGREES` band override.
fn parse_band(s: &str) -> Result<(String, f32)> {
    let Some((name, value)) = s.split_once('=') else {
        bail!("Expected NAME=DEGREES, got '{}'", s);
    };
    let name = name.trim().to_ascii_lowercase();
    if !matches!(
        name.as_str(),
        "red" | "yellow" | "green" | "cyan" | "blue" | "magenta"
    ) {
        bail!("Unknown hue band '{}'", name);
    }
    let value = value
        .trim()
        .parse()
        .with_context(|| format!("Invalid degrees for band '{}'", name))?;
    Ok((name, value))
}

impl GradeOverrides {
    /// Builds parameters and loads the curve table.
    ///
    /// A table on the command line connects the curve and sets its width.
    /// Whether the curve is enabled stays with the preset and `--curve`.
    pub fn resolve(&self) -> Result<(GradeParams, Option<HueCurveLut>)> {
        let mut params = match &self.preset {
            Some(path) => GradeParams::from_yaml_file(path)
                .with_context(|| format!("Failed to load preset: {}", path.display()))?,
            None => GradeParams::default(),
        };
        self.apply_to(&mut params);

        let lut = match &self.lut {
            Some(path) => {
                let lut = load_lut(path)?;
                params.curve.connected = true;
                params.curve.width = i32::try_from(lut.width()).unwrap_or(i32::MAX);
                Some(lut)
            }
            None => None,
        };

        debug!(?params, "resolved grade parameters");
        Ok((params, lut))
    }

    fn apply_to(&self, p: &mut GradeParams) {
        let set = |dst: &mut f32, src: Option<f32>| {
            if let Some(v) = src {
                *dst = v;
            }
        };
        set(&mut p.lightness.gain, self.l_gain);
        set(&mut p.lightness.offset, self.l_offset);
        set(&mut p.lightness.contrast, self.contrast);
        set(&mut p.lightness.pivot, self.pivot);
        set(&mut p.chroma.gain, self.c_gain);
        set(&mut p.chroma.offset, self.c_offset);
        set(&mut p.hue.shift_deg, self.hue_shift);
        set(&mut p.hue.target.center_deg, self.target_hue);
        set(&mut p.hue.target.shift_deg, self.target_shift);
        set(&mut p.hue.target.falloff_deg, self.target_falloff);
        set(&mut p.mix, self.mix);

        for (name, deg) in &self.bands {
            let b = &mut p.hue.bands;
            let slot = match name.as_str() {
                "red" => &mut b.red,
                "yellow" => &mut b.yellow,
                "green" => &mut b.green,
                "cyan" => &mut b.cyan,
                "blue" => &mut b.blue,
                _ => &mut b.magenta,
            };
            *slot = *deg;
        }

        if self.curve {
            p.curve.enabled = true;
        }
        if self.clamp {
            p.clamp_output = true;
        }
        if let Some(mode) = self.debug {
            p.debug_mode = DebugMode::from(mode);
        }
    }
}

/// Read a raw little-endian f32 file.
pub fn read_f32_file(path: &Path) -> Result<Vec<f32>> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read: {}", path.display()))?;
    if bytes.len() % 4 != 0 {
        bail!(
            "{}: {} bytes is not a whole number of f32 values",
            path.display(),
            bytes.len()
        );
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

/// Write floats as a raw little-endian f32 file.
pub fn write_f32_file(path: &Path, data: &[f32]) -> Result<()> {
    let bytes: Vec<u8> = data.iter().flat_map(|v| v.to_le_bytes()).collect();
    std::fs::write(path, bytes).with_context(|| format!("Failed to write: {}", path.display()))
}

/// Load a hue-curve table from a raw RGBA f32 row.
pub fn load_lut(path: &Path) -> Result<HueCurveLut> {
    let data = read_f32_file(path)?;
    let lut = HueCurveLut::from_rgba(data)
        .with_context(|| format!("Invalid hue curve: {}", path.display()))?;
    info!(path = %path.display(), width = lut.width(), "loaded hue curve");
    Ok(lut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_band() {
        assert_eq!(parse_band("red=90").unwrap(), ("red".to_string(), 90.0));
        assert_eq!(parse_band(" Cyan = -12.5").unwrap(), ("cyan".to_string(), -12.5));
        assert!(parse_band("orange=10").is_err());
        assert!(parse_band("red").is_err());
        assert!(parse_band("red=x").is_err());
    }

    #[test]
    fn test_overrides() {
        let o = GradeOverrides {
            c_offset: Some(-0.1),
            bands: vec![("blue".into(), 30.0), ("red".into(), -5.0)],
            clamp: true,
            debug: Some(3),
            ..Default::default()
        };
        let (p, lut) = o.resolve().unwrap();
        assert!(lut.is_none());
        assert_eq!(p.chroma.offset, -0.1);
        assert_eq!(p.hue.bands.blue, 30.0);
        assert_eq!(p.hue.bands.red, -5.0);
        assert!(p.clamp_output);
        assert_eq!(p.debug_mode, DebugMode::Hue);
        assert_eq!(p.lightness, GradeParams::default().lightness);
    }

    #[test]
    fn test_lut_file_connects_curve() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curve.f32");
        let lut = HueCurveLut::identity(12).unwrap();
        let flat: Vec<f32> = lut.entries().iter().flatten().copied().collect();
        write_f32_file(&path, &flat).unwrap();

        let o = GradeOverrides { lut: Some(path), ..Default::default() };
        let (p, loaded) = o.resolve().unwrap();
        assert_eq!(loaded.unwrap(), lut);
        assert!(p.curve.connected);
        assert!(!p.curve.enabled);
        assert_eq!(p.curve.width, 12);

        let o = GradeOverrides { lut: o.lut, curve: true, ..Default::default() };
        let (p, _) = o.resolve().unwrap();
        assert!(p.curve.enabled && p.curve.connected);
    }

    #[test]
    fn test_lut_keeps_preset_curve_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let lut_path = dir.path().join("curve.f32");
        let flat: Vec<f32> = HueCurveLut::identity(8)
            .unwrap()
            .entries()
            .iter()
            .flatten()
            .copied()
            .collect();
        write_f32_file(&lut_path, &flat).unwrap();

        let preset_path = dir.path().join("grade.yaml");
        std::fs::write(&preset_path, "curve:\n  enabled: false\n").unwrap();

        let o = GradeOverrides {
            preset: Some(preset_path),
            lut: Some(lut_path),
            ..Default::default()
        };
        let (p, lut) = o.resolve().unwrap();
        assert!(lut.is_some());
        assert!(!p.curve.enabled);
        assert!(p.curve.connected);
        assert_eq!(p.curve.width, 8);
        assert!(!p.curve.status(lut.as_ref().map(|l| l.entries())).is_ready());
    }

    #[test]
    fn test_f32_files_are_little_endian() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("le.f32");
        write_f32_file(&path, &[1.0, -2.5]).unwrap();
        assert_eq!(
            std::fs::read(&path).unwrap(),
            [0x00, 0x00, 0x80, 0x3f, 0x00, 0x00, 0x20, 0xc0]
        );

        std::fs::write(&path, [0x00, 0x00, 0x00, 0x3f]).unwrap();
        assert_eq!(read_f32_file(&path).unwrap(), [0.5]);
    }

    #[test]
    fn test_read_rejects_partial_float() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.f32");
        std::fs::write(&path, [0u8; 6]).unwrap();
        assert!(read_f32_file(&path).is_err());
    }
}
