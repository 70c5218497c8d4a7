//! Preset command: writes the default parameters as YAML.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use okgrade_ops::GradeParams;

/// Arguments for the `preset` command.
#[derive(Args)]
pub struct PresetArgs {
    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Run the preset command.
pub fn run(args: PresetArgs) -> Result<()> {
    let yaml = GradeParams::default()
        .to_yaml_string()
        .context("Failed to serialize preset")?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, yaml)
                .with_context(|| format!("Failed to write: {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => print!("{}", yaml),
    }
    Ok(())
}
