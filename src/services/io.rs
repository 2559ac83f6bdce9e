//! Image I/O operations service
//!
//! This module separates file I/O operations from the transform logic,
//! keeping the classification pass pure and testable.

use crate::error::{BgRemovalError, Result};
use image::{DynamicImage, RgbaImage};
use std::path::Path;

/// Service for handling image file input/output operations
pub struct ImageIoService;

impl ImageIoService {
    /// Load an image from a file path
    ///
    /// Tries extension-based format detection first, then falls back to
    /// content-based detection for files with a missing or misleading
    /// extension. All failures surface as a decode error carrying the
    /// failing path.
    pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(BgRemovalError::decode_io(
                path_ref,
                std::io::Error::new(std::io::ErrorKind::NotFound, "file does not exist"),
            ));
        }

        match image::open(path_ref) {
            Ok(img) => Ok(img),
            Err(extension_err) => {
                tracing::debug!(
                    path = %path_ref.display(),
                    error = %extension_err,
                    "extension-based decode failed, attempting content-based detection"
                );

                let data = std::fs::read(path_ref)
                    .map_err(|io_err| BgRemovalError::decode_io(path_ref, io_err))?;

                image::load_from_memory(&data).map_err(|content_err| {
                    tracing::debug!(
                        path = %path_ref.display(),
                        error = %content_err,
                        "content-based decode failed"
                    );
                    BgRemovalError::decode(path_ref, content_err)
                })
            },
        }
    }

    /// Save an RGBA image as PNG at the given path, overwriting any
    /// existing file
    ///
    /// PNG is lossless and alpha-capable, so per-pixel transparency is
    /// preserved exactly. The parent directory must already exist; a
    /// missing or unwritable directory surfaces as an encode error
    /// carrying the failing path.
    pub fn save_image<P: AsRef<Path>>(image: &RgbaImage, path: P) -> Result<()> {
        let path_ref = path.as_ref();

        image
            .save_with_format(path_ref, image::ImageFormat::Png)
            .map_err(|e| BgRemovalError::encode(path_ref, e))?;

        tracing::debug!(path = %path_ref.display(), "wrote PNG output");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_path_is_decode_error() {
        let err = ImageIoService::load_image("definitely/not/here.png").unwrap_err();
        assert!(matches!(err, BgRemovalError::Decode { .. }));
        assert_eq!(err.path(), Path::new("definitely/not/here.png"));
    }

    #[test]
    fn test_load_non_image_content_is_decode_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("not_an_image.png");
        std::fs::write(&path, b"this is plain text, not a PNG").unwrap();

        let err = ImageIoService::load_image(&path).unwrap_err();
        assert!(matches!(err, BgRemovalError::Decode { .. }));
        assert_eq!(err.path(), path);
    }

    #[test]
    fn test_save_and_reload_preserves_pixels() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roundtrip.png");

        let mut image = RgbaImage::new(2, 2);
        image.put_pixel(0, 0, Rgba([255, 255, 255, 0]));
        image.put_pixel(1, 1, Rgba([10, 20, 30, 128]));

        ImageIoService::save_image(&image, &path).unwrap();
        let reloaded = ImageIoService::load_image(&path).unwrap().to_rgba8();

        assert_eq!(reloaded.dimensions(), (2, 2));
        assert_eq!(reloaded.get_pixel(0, 0), &Rgba([255, 255, 255, 0]));
        assert_eq!(reloaded.get_pixel(1, 1), &Rgba([10, 20, 30, 128]));
    }

    #[test]
    fn test_save_into_missing_directory_is_encode_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no_such_dir").join("out.png");

        let image = RgbaImage::new(1, 1);
        let err = ImageIoService::save_image(&image, &path).unwrap_err();
        assert!(matches!(err, BgRemovalError::Encode { .. }));
        assert_eq!(err.path(), path);
    }

    #[test]
    fn test_load_with_misleading_extension_falls_back_to_content() {
        let dir = TempDir::new().unwrap();
        let png_path = dir.path().join("actually_a_png.jpg");

        let image = RgbaImage::from_pixel(3, 3, Rgba([1, 2, 3, 255]));
        // Write real PNG bytes under a .jpg extension
        image
            .save_with_format(&png_path, image::ImageFormat::Png)
            .unwrap();

        let reloaded = ImageIoService::load_image(&png_path).unwrap().to_rgba8();
        assert_eq!(reloaded.dimensions(), (3, 3));
        assert_eq!(reloaded.get_pixel(2, 2), &Rgba([1, 2, 3, 255]));
    }
}
