//! Result types for background removal operations

use crate::error::Result;
use crate::services::ImageIoService;
use image::RgbaImage;
use std::path::Path;
use std::time::Instant;

/// Per-stage timings for a removal operation, in milliseconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingTimings {
    /// Time spent decoding the input file
    pub decode_ms: u64,
    /// Time spent in the classification pass
    pub transform_ms: u64,
    /// Time spent encoding the output, once it has been written
    pub encode_ms: Option<u64>,
}

impl ProcessingTimings {
    /// Total measured time across all stages
    #[must_use]
    pub fn total_ms(&self) -> u64 {
        self.decode_ms + self.transform_ms + self.encode_ms.unwrap_or(0)
    }
}

/// Result of a white-background removal operation
#[derive(Debug, Clone)]
pub struct RemovalResult {
    /// The processed image: RGBA8, same dimensions as the input
    pub image: RgbaImage,

    /// Original (and output) dimensions as (width, height)
    pub dimensions: (u32, u32),

    /// Number of pixels classified as background and cleared to
    /// transparent white
    pub background_pixels: u64,

    /// Per-stage timings
    pub timings: ProcessingTimings,
}

impl RemovalResult {
    /// Create a new removal result from a processed image
    #[must_use]
    pub fn new(image: RgbaImage, background_pixels: u64) -> Self {
        let dimensions = image.dimensions();
        Self {
            image,
            dimensions,
            background_pixels,
            timings: ProcessingTimings::default(),
        }
    }

    /// Number of pixels left untouched by the classification pass
    #[must_use]
    pub fn foreground_pixels(&self) -> u64 {
        u64::from(self.dimensions.0) * u64::from(self.dimensions.1) - self.background_pixels
    }

    /// Save the result as PNG with alpha channel
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        ImageIoService::save_image(&self.image, path)
    }

    /// Save the result as PNG and record the encode time in `timings`
    pub fn save_png_timed<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let encode_start = Instant::now();
        ImageIoService::save_image(&self.image, path)?;
        self.timings.encode_ms = Some(encode_start.elapsed().as_millis() as u64);
        Ok(())
    }
}
