//! Format registry for extension- and header-based scene loading
//!
//! This module maps file formats to [`SceneLoader`]s so callers can load any
//! supported asset without knowing which decoder handles it.

use crate::{GltfLoader, ObjLoader, PlyLoader};
use meshpalette_core::{Error, Result, Scene, SceneLoader};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Registry that manages scene loaders keyed by lowercase file extension
pub struct FormatRegistry {
    loaders: HashMap<String, Arc<dyn SceneLoader>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            loaders: HashMap::new(),
        }
    }

    /// Create a registry with the built-in glTF, OBJ and PLY loaders
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(GltfLoader));
        registry.register(Arc::new(ObjLoader::new()));
        registry.register(Arc::new(PlyLoader::new()));
        registry
    }

    /// Register a loader for every extension it supports
    pub fn register(&mut self, loader: Arc<dyn SceneLoader>) {
        for extension in loader.supported_extensions() {
            self.loaders.insert(extension.to_lowercase(), loader.clone());
        }
    }

    /// Check if a loader is registered for `extension`
    pub fn supports(&self, extension: &str) -> bool {
        self.loaders.contains_key(&extension.to_lowercase())
    }

    /// Registered extensions, sorted
    pub fn extensions(&self) -> Vec<&str> {
        let mut extensions: Vec<&str> = self.loaders.keys().map(String::as_str).collect();
        extensions.sort_unstable();
        extensions
    }

    /// Pick the loader for `path` by extension, falling back to header sniffing
    pub fn loader_for(&self, path: &Path) -> Result<&dyn SceneLoader> {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .map(str::to_lowercase);

        if let Some(loader) = extension.as_ref().and_then(|ext| self.loaders.get(ext)) {
            return Ok(loader.as_ref());
        }

        if let Some(detected) = detect_format_by_header(path) {
            if let Some(loader) = self.loaders.get(detected) {
                debug!(path = %path.display(), format = detected, "detected format from header");
                return Ok(loader.as_ref());
            }
        }

        Err(Error::UnsupportedFormat(format!(
            "no scene loader for {:?} (supported: {})",
            extension.unwrap_or_default(),
            self.extensions().join(", ")
        )))
    }

    /// Load a scene, failing with [`Error::AssetNotFound`] before any decoding
    /// if `path` is not a readable file
    pub fn load_scene(&self, path: &Path) -> Result<Scene> {
        if !path.is_file() || File::open(path).is_err() {
            return Err(Error::AssetNotFound {
                path: path.to_path_buf(),
            });
        }

        let loader = self.loader_for(path)?;
        debug!(path = %path.display(), format = loader.format_name(), "loading scene");
        loader.load_scene(path)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Detect file format by examining the magic bytes
fn detect_format_by_header(path: &Path) -> Option<&'static str> {
    let mut file = File::open(path).ok()?;
    let mut header = [0u8; 4];
    file.read_exact(&mut header).ok()?;

    match &header {
        b"glTF" => Some("glb"),
        b"ply\n" | b"ply\r" => Some("ply"),
        _ => None,
    }
}
