use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use epaper_dither::ConversionConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use photopainter::models::{AppConfig, ConfigOverrides};
use photopainter::services::{convert_file, output_path_for, BatchConverter};

#[derive(Parser)]
#[command(name = "photopainter")]
#[command(about = "Convert photos into six-colour BMP images for PhotoPainter e-paper frames")]
#[command(version)]
struct Cli {
    /// Image file to convert, or a directory with --batch
    input: PathBuf,

    /// Output directory (required with --batch)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Convert every image below INPUT
    #[arg(short, long)]
    batch: bool,

    /// Maximum subdirectory depth in batch mode [default: 3]
    #[arg(short, long)]
    depth: Option<usize>,

    /// Panel resolution: "800x480" or "480x800" [default: 800x480]
    #[arg(short, long)]
    resolution: Option<String>,

    /// Rotate portrait images clockwise before cropping [default: true]
    #[arg(long)]
    rotate: Option<bool>,

    /// YAML configuration file
    #[arg(short, long, env = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "photopainter=debug,epaper_dither=debug"
    } else {
        "photopainter=info,epaper_dither=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    }
    .with_overrides(ConfigOverrides {
        resolution: cli.resolution,
        auto_rotate: cli.rotate,
        max_depth: cli.depth,
        output_dir: cli.output,
    });

    let panel = config.display_spec();
    let conversion = panel.conversion_config(config.auto_rotate);
    tracing::debug!(
        resolution = %panel,
        auto_rotate = config.auto_rotate,
        "Conversion settings"
    );

    if cli.batch {
        let output_dir = config
            .output_dir
            .as_deref()
            .context("--batch requires an output directory (-o/--output)")?;
        run_batch(&cli.input, output_dir, conversion, config.max_depth)
    } else {
        let output = output_path_for(&cli.input, config.output_dir.as_deref());
        convert_file(&cli.input, &output, &conversion)
            .with_context(|| format!("Failed to convert {}", cli.input.display()))?;
        println!("Saved {}", output.display());
        Ok(())
    }
}

fn run_batch(
    input: &Path,
    output_dir: &Path,
    conversion: ConversionConfig,
    max_depth: usize,
) -> anyhow::Result<()> {
    let summary = BatchConverter::new(conversion, max_depth)
        .run(input, output_dir)
        .with_context(|| format!("Batch conversion of {} failed", input.display()))?;

    println!(
        "Converted {} of {} images into {}",
        summary.processed,
        summary.total(),
        output_dir.display()
    );
    if summary.failed > 0 {
        tracing::warn!(failed = summary.failed, "Some images could not be converted");
    }
    Ok(())
}
