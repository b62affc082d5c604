//! Texture decoding through the `image` crate

use crate::error::LoadError;
use image::DynamicImage;
use meshpalette_core::{ImageDecoder, Result, TextureImage};
use std::path::Path;

/// [`ImageDecoder`] backed by the `image` crate (PNG and JPEG)
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCrateDecoder;

impl ImageDecoder for ImageCrateDecoder {
    fn decode_image(&self, bytes: &[u8]) -> Result<TextureImage> {
        let image = image::load_from_memory(bytes).map_err(LoadError::from)?;
        texture_from_dynamic(image)
    }
}

/// Read and decode a texture file
pub fn read_texture(decoder: &dyn ImageDecoder, path: &Path) -> Result<TextureImage> {
    let bytes = std::fs::read(path)?;
    decoder.decode_image(&bytes)
}

/// Convert a decoded image into an 8-bit texture, keeping its channel layout
///
/// Gray images stay single channel (or gray + alpha); wider sample types
/// are narrowed to 8 bits.
pub fn texture_from_dynamic(image: DynamicImage) -> Result<TextureImage> {
    let (width, height) = (image.width(), image.height());
    let color = image.color();

    let (channels, data) = match (color.has_color(), color.has_alpha()) {
        (false, false) => (1, image.into_luma8().into_raw()),
        (false, true) => (2, image.into_luma_alpha8().into_raw()),
        (true, false) => (3, image.into_rgb8().into_raw()),
        (true, true) => (4, image.into_rgba8().into_raw()),
    };

    TextureImage::new(width, height, channels, data)
}
