//! White-background removal CLI tool
//!
//! Command-line interface over the remove-bg library: one input file, one
//! PNG output file, an optional threshold.

use super::config::CliConfigBuilder;
use crate::processor::BackgroundRemover;
use anyhow::{Context, Result};
use clap::Parser;
use std::time::Instant;
use tracing::{debug, info};

/// Make white-ish image backgrounds transparent
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "remove-bg")]
pub struct Cli {
    /// Input image file (any format the image codec supports)
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Output PNG file (overwritten if it exists)
    #[arg(value_name = "OUTPUT")]
    pub output: String,

    /// Per-channel brightness cutoff (0-255); pixels with red, green, and
    /// blue all strictly above this become transparent
    #[arg(short, long, default_value_t = 200)]
    pub threshold: u8,

    /// Enable verbose logging (-v: INFO, -vv: DEBUG, -vvv: TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose).context("Failed to initialize tracing")?;

    let config = CliConfigBuilder::from_cli(&cli);

    info!("Starting white-background removal");
    info!("Input: {}", cli.input);
    info!("Threshold: {}", config.threshold);

    let processor = BackgroundRemover::new(config);

    let start_time = Instant::now();
    let result = processor
        .process_file(&cli.input, &cli.output)
        .context("Background removal failed")?;

    debug!(
        background_pixels = result.background_pixels,
        foreground_pixels = result.foreground_pixels(),
        decode_ms = result.timings.decode_ms,
        transform_ms = result.timings.transform_ms,
        encode_ms = result.timings.encode_ms,
        "processing summary"
    );
    info!(
        "Processed {}x{} image in {:.2}s",
        result.dimensions.0,
        result.dimensions.1,
        start_time.elapsed().as_secs_f64()
    );

    // User-facing confirmation, printed regardless of verbosity
    println!("Saved transparent image to {}", cli.output);

    Ok(())
}

fn init_tracing(verbose_count: u8) -> Result<()> {
    use crate::tracing_config::{TracingConfig, TracingFormat};

    TracingConfig::new()
        .with_verbosity(verbose_count)
        .with_format(TracingFormat::Console)
        .init()
        .context("Failed to initialize tracing subscriber")?;

    Ok(())
}
