//! okgrade - OKLCH colour grade from the command line
//!
//! A small host around `okgrade-ops`: grades single pixels or raw RGBA
//! float buffers, and writes or inspects presets.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "okgrade")]
#[command(author, version, about = "Per-pixel OKLCH colour grade")]
#[command(long_about = "
Grades linear sRGB pixels in OKLCH: lightness/chroma tone, hue bands,
a targeted hue window and an optional per-hue curve table.

Examples:
  okgrade pixel 1 0 0 --band red=90          # Grade one pixel
  okgrade pixel 0.2 0.5 0.9 --curve --lut curve.f32
  okgrade apply in.rgba out.rgba --preset look.yaml
  okgrade preset -o look.yaml                # Write default preset
  okgrade ranges                             # Show slider ranges
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade a single pixel and print the result
    #[command(visible_alias = "p")]
    Pixel(commands::pixel::PixelArgs),

    /// Grade a raw interleaved RGBA f32 buffer file
    #[command(visible_alias = "a")]
    Apply(commands::apply::ApplyArgs),

    /// Write the default preset as YAML
    Preset(commands::preset::PresetArgs),

    /// Print slider ranges of every knob
    Ranges,
}

/// Installs the global subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Pixel(args) => commands::pixel::run(args),
        Commands::Apply(args) => commands::apply::run(args),
        Commands::Preset(args) => commands::preset::run(args),
        Commands::Ranges => commands::ranges::run(),
    }
}
