//! Scene loading and color analysis entry points
//!
//! This crate provides the scene loaders for glTF, OBJ and PLY assets, the
//! texture decoder, and the top-level functions that load an asset and run
//! the color engine on it.

pub mod gltf;
pub mod obj;
pub mod ply;
pub mod texture;
pub mod registry;
pub mod error;

pub use error::*;
pub use crate::gltf::GltfLoader;
pub use crate::obj::ObjLoader;
pub use crate::ply::PlyLoader;
pub use registry::FormatRegistry;
pub use texture::{ImageCrateDecoder, texture_from_dynamic};

use meshpalette_algorithms::{analyze_scene, AnalysisOptions, ColorReport, RankedEntry};
use meshpalette_core::{Result, Scene};
use std::num::NonZeroUsize;
use std::path::Path;

/// Auto-detect format and load a scene
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene> {
    FormatRegistry::with_defaults().load_scene(path.as_ref())
}

/// Load an asset and produce the full color report
pub fn analyze<P: AsRef<Path>>(path: P, options: &AnalysisOptions) -> Result<ColorReport> {
    let scene = load_scene(path)?;
    analyze_scene(&scene, options)
}

/// Rank the colors of the asset at `path`, most frequent first
///
/// Fails with `AssetNotFound` if `path` is not a readable file,
/// `NoGeometry` if the asset holds no triangle meshes, and `NoColorData`
/// if no mesh carries vertex colors or a texture with UVs. Decoder faults
/// are returned unchanged as `Decode`.
///
/// # Example
/// ```rust,no_run
/// use meshpalette_io::analyze_colors;
/// use std::num::NonZeroUsize;
///
/// fn main() -> meshpalette_core::Result<()> {
///     for (rank, entry) in analyze_colors("scene.gltf", NonZeroUsize::new(10))?.iter().enumerate() {
///         println!("{}: {}, count={}", rank + 1, entry.color, entry.count);
///     }
///     Ok(())
/// }
/// ```
pub fn analyze_colors<P: AsRef<Path>>(path: P, top_n: Option<NonZeroUsize>) -> Result<Vec<RankedEntry>> {
    let options = AnalysisOptions {
        top_n,
        ..AnalysisOptions::default()
    };
    analyze(path, &options).map(|report| report.entries)
}
