//! # meshpalette
//!
//! Dominant color extraction for 3D mesh assets.
//!
//! This is the umbrella crate that provides convenient access to all meshpalette functionality.
//! You can use this crate to get everything in one place, or use individual crates for
//! more granular control over dependencies.
//!
//! ## Features
//!
//! - **Core**: Colors, textures, sub-meshes and the loader traits
//! - **Algorithms**: Texture sampling, frequency aggregation and ranking
//! - **I/O**: glTF, OBJ and PLY loading plus the `analyze_colors` entry point
//!
//! ## Quick Start
//!
//! ```rust
//! use meshpalette::prelude::*;
//!
//! let scene = Scene::from_meshes(vec![
//!     SubMesh::new(3).with_vertex_colors(vec![
//!         Color::new(255, 0, 0),
//!         Color::new(255, 0, 0),
//!         Color::new(0, 255, 0),
//!     ]),
//! ]);
//!
//! let report = analyze_scene(&scene, &AnalysisOptions::default()).unwrap();
//! assert_eq!(report.entries[0].color, Color::new(255, 0, 0));
//! assert_eq!(report.entries[0].count, 2);
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Enables algorithms and io
//! - `algorithms`: The color engine
//! - `io`: Asset loaders (implies `algorithms`)

// Re-export core functionality
pub use meshpalette_core::*;

// Re-export sub-crates
#[cfg(feature = "algorithms")]
pub use meshpalette_algorithms as algorithms;

#[cfg(feature = "io")]
pub use meshpalette_io as io;

#[cfg(feature = "io")]
pub use meshpalette_io::{analyze, analyze_colors, load_scene};

/// Convenient imports for common use cases
pub mod prelude {
    pub use meshpalette_core::*;

    #[cfg(feature = "algorithms")]
    pub use meshpalette_algorithms::*;

    #[cfg(feature = "io")]
    pub use meshpalette_io::{analyze, analyze_colors, load_scene, FormatRegistry};
}
