#![allow(clippy::uninlined_format_args)]

//! # White Background Removal Library
//!
//! Converts a raster image with a (near-)white background into an RGBA image
//! in which white-ish pixels are fully transparent, preserving every other
//! pixel unchanged. Intended for preparing logo assets for use on
//! variable-colored backgrounds.
//!
//! The transform is a single stateless pass: a pixel whose red, green, and
//! blue channels are each strictly greater than the configured threshold
//! (default 200) is rewritten to transparent white `(255, 255, 255, 0)`;
//! all other pixels keep their original four channel values, with alpha
//! synthesized as 255 for sources that have no alpha channel. Output is
//! always PNG, the one lossless alpha-capable format this tool produces.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use remove_bg::{remove_white_bg, RemovalConfig};
//!
//! fn main() -> remove_bg::Result<()> {
//!     let config = RemovalConfig::default();
//!     let result = remove_white_bg("logo.jpg", "logo.png", &config)?;
//!     println!("cleared {} background pixels", result.background_pixels);
//!     Ok(())
//! }
//! ```
//!
//! ## Custom threshold
//!
//! ```rust,no_run
//! use remove_bg::{remove_white_bg, RemovalConfig};
//!
//! # fn main() -> remove_bg::Result<()> {
//! let config = RemovalConfig::builder().threshold(230).build();
//! remove_white_bg("scan.png", "scan-transparent.png", &config)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Library vs CLI Usage
//!
//! - **Library usage**: the transform, config, and I/O service are available
//!   by default with no CLI dependencies.
//! - **CLI usage**: the `cli` feature (on by default) adds the `remove-bg`
//!   binary with argument parsing and a tracing subscriber.

pub mod config;
pub mod error;
pub mod processor;
pub mod services;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod tracing_config;

// Public API exports
pub use config::{RemovalConfig, RemovalConfigBuilder, WHITE_THRESHOLD_DEFAULT};
pub use error::{BgRemovalError, Result};
pub use processor::BackgroundRemover;
pub use services::ImageIoService;
pub use types::{ProcessingTimings, RemovalResult};

#[cfg(feature = "cli")]
pub use tracing_config::{TracingConfig, TracingFormat};

use std::path::Path;

/// Remove the white background of the image at `input_path` and write the
/// result as PNG to `output_path`
///
/// This is the one-shot, path-to-path surface of the tool: decode,
/// classify, encode, in the calling thread, with no state left behind.
/// `output_path` is overwritten if it exists.
///
/// # Errors
///
/// Returns `BgRemovalError::Decode` when the input is missing or not a
/// valid image (nothing is written in that case), and
/// `BgRemovalError::Encode` when the output cannot be written.
pub fn remove_white_bg<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
    config: &RemovalConfig,
) -> Result<RemovalResult> {
    BackgroundRemover::new(*config).process_file(input_path, output_path)
}

/// Remove the white background from an image provided as bytes
///
/// In-memory variant for callers that already hold the encoded image, such
/// as web handlers. No file is read or written; save the returned result
/// with [`RemovalResult::save_png`] if needed.
///
/// # Errors
///
/// Returns `BgRemovalError::Decode` when the bytes are not a valid image
/// encoding; the error reports a `<memory>` pseudo-path.
pub fn remove_white_bg_from_bytes(
    image_bytes: &[u8],
    config: &RemovalConfig,
) -> Result<RemovalResult> {
    let image = image::load_from_memory(image_bytes)
        .map_err(|e| BgRemovalError::decode("<memory>", e))?;
    Ok(remove_white_bg_from_image(&image, config))
}

/// Remove the white background from a pre-loaded `DynamicImage`
///
/// The most flexible surface: pure in-memory transform, no I/O, no error
/// path.
#[must_use]
pub fn remove_white_bg_from_image(
    image: &image::DynamicImage,
    config: &RemovalConfig,
) -> RemovalResult {
    BackgroundRemover::new(*config).process_image(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_api_rejects_garbage() {
        let err = remove_white_bg_from_bytes(b"not an image", &RemovalConfig::default());
        assert!(matches!(err, Err(BgRemovalError::Decode { .. })));
    }

    #[test]
    fn test_bytes_api_round_trip() {
        // Encode a tiny image to PNG bytes, then run the in-memory surface
        let mut png_bytes = Vec::new();
        let img = image::RgbaImage::from_pixel(1, 1, image::Rgba([250, 250, 250, 255]));
        image::DynamicImage::ImageRgba8(img)
            .write_to(
                &mut std::io::Cursor::new(&mut png_bytes),
                image::ImageFormat::Png,
            )
            .unwrap();

        let result =
            remove_white_bg_from_bytes(&png_bytes, &RemovalConfig::default()).unwrap();
        assert_eq!(result.background_pixels, 1);
        assert_eq!(
            result.image.get_pixel(0, 0),
            &image::Rgba([255, 255, 255, 0])
        );
    }
}
