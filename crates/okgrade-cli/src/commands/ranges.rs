//! Slider range table.

use anyhow::Result;
use okgrade_ops::{GradeParams, PARAM_RANGES};

/// Run the ranges command.
pub fn run() -> Result<()> {
    let defaults = GradeParams::default().knobs();
    println!("{:<24} {:<22} {:>9} {:>9} {:>9}", "knob", "label", "min", "max", "default");
    for range in PARAM_RANGES {
        let default = defaults
            .iter()
            .find(|(name, _)| *name == range.name)
            .map(|(_, v)| *v)
            .unwrap_or_default();
        println!(
            "{:<24} {:<22} {:>9.4} {:>9.4} {:>9.4}",
            range.name, range.label, range.min, range.max, default
        );
    }
    Ok(())
}
