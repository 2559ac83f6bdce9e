//! White-background removal processor
//!
//! The core of the crate: a single-pass, stateless pixel classification.
//! Every pixel whose red, green, and blue channels all exceed the configured
//! threshold is rewritten to transparent white (255, 255, 255, 0); every
//! other pixel keeps its original four channel values.

use crate::config::RemovalConfig;
use crate::error::Result;
use crate::services::ImageIoService;
use crate::types::RemovalResult;
use image::{DynamicImage, Rgba};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, instrument};

/// Value written over every background pixel: white, fully transparent
const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Single-pass white-background remover
///
/// Stateless apart from its configuration; one instance can process any
/// number of images sequentially.
#[derive(Debug, Clone, Copy)]
pub struct BackgroundRemover {
    config: RemovalConfig,
}

impl BackgroundRemover {
    /// Create a processor with the given configuration
    #[must_use]
    pub fn new(config: RemovalConfig) -> Self {
        Self { config }
    }

    /// The configuration this processor runs with
    #[must_use]
    pub fn config(&self) -> &RemovalConfig {
        &self.config
    }

    /// Classify and rewrite every pixel of an in-memory image
    ///
    /// The image is converted to RGBA8 first, synthesizing full opacity
    /// (alpha = 255) when the source has no alpha channel. The pass is
    /// pointwise and in place: dimensions, pixel count, and row-major order
    /// are preserved, and there is no error path.
    #[instrument(skip(self, image), fields(
        threshold = self.config.threshold,
        width = image.width(),
        height = image.height(),
    ))]
    pub fn process_image(&self, image: &DynamicImage) -> RemovalResult {
        let transform_start = Instant::now();
        let threshold = self.config.threshold;

        let mut rgba = image.to_rgba8();
        let mut background_pixels = 0_u64;
        for pixel in rgba.pixels_mut() {
            let Rgba([r, g, b, _]) = *pixel;
            if r > threshold && g > threshold && b > threshold {
                *pixel = BACKGROUND;
                background_pixels += 1;
            }
        }

        let mut result = RemovalResult::new(rgba, background_pixels);
        result.timings.transform_ms = transform_start.elapsed().as_millis() as u64;

        debug!(
            background_pixels,
            foreground_pixels = result.foreground_pixels(),
            "classification pass complete"
        );
        result
    }

    /// Decode `input_path`, remove the white background, and encode the
    /// result as PNG at `output_path`
    ///
    /// # Errors
    ///
    /// Returns `BgRemovalError::Decode` when the input is missing,
    /// unreadable, or not a valid image, and `BgRemovalError::Encode` when
    /// the output cannot be written. On a decode failure nothing is written.
    #[instrument(skip(self, input_path, output_path), fields(threshold = self.config.threshold))]
    pub fn process_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<RemovalResult> {
        let decode_start = Instant::now();
        let image = ImageIoService::load_image(input_path.as_ref())?;
        let decode_ms = decode_start.elapsed().as_millis() as u64;

        let mut result = self.process_image(&image);
        result.timings.decode_ms = decode_ms;

        result.save_png_timed(output_path.as_ref())?;

        debug!(
            total_ms = result.timings.total_ms(),
            "file processed and written"
        );
        Ok(result)
    }
}
