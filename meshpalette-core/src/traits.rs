//! Capability traits for the external loaders

use crate::{mesh::Scene, texture::TextureImage, error::Result};
use std::path::Path;

/// Trait for loading a scene of sub-meshes from an asset file
pub trait SceneLoader: Send + Sync {
    /// Load every sub-mesh the asset contains
    fn load_scene(&self, path: &Path) -> Result<Scene>;

    /// Get the format name this loader handles
    fn format_name(&self) -> &'static str;

    /// Get the file extensions this loader supports (lowercase, no dot)
    fn supported_extensions(&self) -> &[&'static str];
}

/// Trait for decoding encoded image bytes into a texture
pub trait ImageDecoder: Send + Sync {
    fn decode_image(&self, bytes: &[u8]) -> Result<TextureImage>;
}
