//! Buffer grade command.
//!
//! Input and output are raw interleaved RGBA f32 (native endian), the
//! layout a host hands over for a pass.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use okgrade_ops::{OklchGrade, parallel};
use tracing::info;

use super::{GradeOverrides, read_f32_file, write_f32_file};

/// Arguments for the `apply` command.
#[derive(Args)]
pub struct ApplyArgs {
    /// Input buffer (raw RGBA f32)
    pub input: PathBuf,

    /// Output buffer (raw RGBA f32)
    pub output: PathBuf,

    #[command(flatten)]
    pub grade: GradeOverrides,
}

/// Run the apply command.
pub fn run(args: ApplyArgs) -> Result<()> {
    let (params, lut) = args.grade.resolve()?;
    let grade = OklchGrade::new(&params, lut.as_ref().map(|l| l.entries()));

    let mut data = read_f32_file(&args.input)?;
    let start = Instant::now();
    parallel::par_apply_rgba(&grade, &mut data)
        .with_context(|| format!("Failed to grade: {}", args.input.display()))?;
    info!(
        pixels = data.len() / 4,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "graded buffer"
    );

    write_f32_file(&args.output, &data)?;
    println!("{} -> {} ({} pixels)", args.input.display(), args.output.display(), data.len() / 4);
    Ok(())
}
