//! Single-pixel grade command.
//!
//! Prints the input and output RGBA along with the OKLCH of both.

use anyhow::Result;
use clap::Args;
use okgrade_color::OklchConvert;
use okgrade_core::Rgba;
use okgrade_ops::{DebugMode, GradeParams, OklchGrade};

use super::GradeOverrides;

/// Arguments for the `pixel` command.
#[derive(Args)]
pub struct PixelArgs {
    /// Red (linear)
    #[arg(allow_hyphen_values = true)]
    pub r: f32,

    /// Green (linear)
    #[arg(allow_hyphen_values = true)]
    pub g: f32,

    /// Blue (linear)
    #[arg(allow_hyphen_values = true)]
    pub b: f32,

    /// Alpha (passed through)
    #[arg(default_value = "1.0", allow_hyphen_values = true)]
    pub a: f32,

    #[command(flatten)]
    pub grade: GradeOverrides,
}

/// Run the pixel command.
pub fn run(args: PixelArgs) -> Result<()> {
    let (params, lut) = args.grade.resolve()?;
    let grade = OklchGrade::new(&params, lut.as_ref().map(|l| l.entries()));

    let input = Rgba::new(args.r, args.g, args.b, args.a);
    for line in report(&grade, &params, input) {
        println!("{}", line);
    }
    Ok(())
}

/// Formats the report for one pixel.
///
/// The `LCh` line compares the input with the emitted pixel, so it reflects
/// clamp and mix. Bypass reports the pass-through only.
fn report(grade: &OklchGrade<'_>, params: &GradeParams, input: Rgba) -> Vec<String> {
    let output = grade.process(input);
    let mut lines = vec![format!("in    {}", input), format!("out   {}", output)];
    if params.bypass {
        lines.push("(bypass)".to_string());
        return lines;
    }

    let t = grade.trace(input.rgb());
    let out = output.rgb().to_oklch();
    lines.push(format!(
        "LCh   {:.6} {:.6} {:.3} -> {:.6} {:.6} {:.3}",
        t.input.l, t.input.c, t.input.h, out.l, out.c, out.h
    ));
    lines.push(format!(
        "hue   shift {:+.3} deg, chroma weight {:.4}",
        t.hue_shift_deg, t.chroma_weight
    ));
    if params.curve.enabled {
        lines.push(match t.curve_raw {
            Some(raw) => format!("curve {:.4} {:.4} {:.4}", raw[0], raw[1], raw[2]),
            None => format!("curve unavailable ({:?})", grade.curve_status()),
        });
    }
    if params.debug_mode != DebugMode::Off {
        lines.push(format!(
            "graded {:.6} {:.6} {:.3}",
            t.graded.l, t.graded.c, t.graded.h
        ));
        lines.push(format!("(debug view: {})", params.debug_mode));
    }
    lines
}
