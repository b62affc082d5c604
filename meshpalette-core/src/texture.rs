//! Decoded texture images

use crate::error::{Error, Result};

/// A decoded 8-bit texture, stored row-major with row 0 at the top
///
/// `channels` is 1 (gray), 2 (gray + alpha), 3 (RGB) or 4 (RGBA).
/// Width and height are always non-zero.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureImage {
    width: u32,
    height: u32,
    channels: u8,
    data: Vec<u8>,
}

impl TextureImage {
    /// Create a texture from interleaved pixel data
    pub fn new(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidData(format!(
                "texture dimensions must be non-zero, got {}x{}",
                width, height
            )));
        }

        if !(1..=4).contains(&channels) {
            return Err(Error::InvalidData(format!(
                "texture must have 1 to 4 channels, got {}",
                channels
            )));
        }

        let expected = width as usize * height as usize * channels as usize;
        if data.len() != expected {
            return Err(Error::InvalidData(format!(
                "texture data length {} does not match {}x{}x{}",
                data.len(),
                width,
                height,
                channels
            )));
        }

        Ok(Self { width, height, channels, data })
    }

    /// Create a single-channel grayscale texture
    pub fn from_luma(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        Self::new(width, height, 1, data)
    }

    /// Create an RGB texture
    pub fn from_rgb(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        Self::new(width, height, 3, data)
    }

    /// Create an RGBA texture
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        Self::new(width, height, 4, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Raw interleaved pixel data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Channel values of the pixel at `(column, row)`
    ///
    /// # Panics
    /// Panics if the coordinate lies outside the image.
    pub fn pixel(&self, column: u32, row: u32) -> &[u8] {
        assert!(
            column < self.width && row < self.height,
            "pixel ({}, {}) outside {}x{} texture",
            column,
            row,
            self.width,
            self.height
        );
        let channels = self.channels as usize;
        let offset = (row as usize * self.width as usize + column as usize) * channels;
        &self.data[offset..offset + channels]
    }
}
