//! # meshpalette Algorithms
//!
//! The color-sampling and frequency-ranking engine.
//!
//! Sub-meshes are reduced to color samples (vertex colors, or texture lookups
//! through UV coordinates), samples are counted per distinct color across the
//! whole scene, and the counts are ranked into a deterministic palette.

pub mod sampler;
pub mod extract;
pub mod frequency;
pub mod ranking;
pub mod parallel;
pub mod analysis;

// Re-export commonly used items
pub use sampler::*;
pub use extract::*;
pub use frequency::*;
pub use ranking::*;
pub use parallel::*;
pub use analysis::*;
