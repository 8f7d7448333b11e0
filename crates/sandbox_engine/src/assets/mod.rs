//! Ad-hoc asset loading
//!
//! The sandbox loads at most one texture as a smoke test; there is no
//! asset pipeline, caching, or streaming.

use std::path::Path;
use thiserror::Error;

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// The asset could not be decoded
    #[error("asset load failed: {0}")]
    LoadFailed(String),
}

/// Decoded image data, converted to RGBA8
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Raw RGBA pixel data
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Number of color channels, always 4 after conversion
    pub channels: u8,
}

impl ImageData {
    /// Load an image from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let img = image::open(path)
            .map_err(|e| AssetError::LoadFailed(format!("{}: {}", path.display(), e)))?;
        let image = Self::from_dynamic(img);
        log::info!(
            "loaded texture {} ({}x{})",
            path.display(),
            image.width,
            image.height
        );
        Ok(image)
    }

    /// Decode an image from bytes already in memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| AssetError::LoadFailed(e.to_string()))?;
        Ok(Self::from_dynamic(img))
    }

    fn from_dynamic(img: image::DynamicImage) -> Self {
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self {
            data: rgba.into_raw(),
            width,
            height,
            channels: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::png::PngEncoder;
    use image::{ExtendedColorType, ImageEncoder, RgbaImage};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes)
            .write_image(img.as_raw(), width, height, ExtendedColorType::Rgba8)
            .unwrap();
        bytes
    }

    #[test]
    fn decodes_png_from_memory() {
        let image = ImageData::from_bytes(&png_bytes(4, 2)).unwrap();
        assert_eq!((image.width, image.height), (4, 2));
        assert_eq!(image.channels, 4);
        assert_eq!(image.data.len(), 4 * 2 * 4);
        assert_eq!(&image.data[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn decodes_png_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tex.png");
        std::fs::write(&path, png_bytes(8, 8)).unwrap();

        let image = ImageData::from_file(&path).unwrap();
        assert_eq!((image.width, image.height), (8, 8));
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        assert!(matches!(
            ImageData::from_bytes(b"not an image"),
            Err(AssetError::LoadFailed(_))
        ));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(ImageData::from_file("nope/missing.png").is_err());
    }
}
