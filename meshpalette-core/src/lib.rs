//! Core data structures and traits for meshpalette
//! 
//! This crate provides the fundamental types for color analysis of 3D assets:
//! colors, vertex color layouts, decoded textures, sub-meshes and scenes,
//! together with the loader capability traits and the shared error type.

pub mod color;
pub mod texture;
pub mod mesh;
pub mod traits;
pub mod error;

pub use color::*;
pub use texture::*;
pub use mesh::*;
pub use traits::*;
pub use error::*;
