//! Color sample extraction from sub-meshes

use crate::sampler::sample_texture;
use meshpalette_core::{Color, ColorSource, SubMesh, TextureImage, VertexColors, UV};

/// Extract the color samples of one sub-mesh
///
/// Exactly one path contributes per sub-mesh:
/// 1. per-vertex colors, one sample per vertex;
/// 2. otherwise a base-color texture sampled once per UV coordinate;
/// 3. otherwise nothing.
///
/// A sub-mesh with vertex colors never touches its texture.
///
/// # Example
/// ```rust
/// use meshpalette_core::{Color, SubMesh};
/// use meshpalette_algorithms::extract_samples;
///
/// let mesh = SubMesh::new(2).with_vertex_colors(vec![Color::new(1, 2, 3), Color::new(4, 5, 6)]);
/// assert_eq!(extract_samples(&mesh), vec![Color::new(1, 2, 3), Color::new(4, 5, 6)]);
/// ```
pub fn extract_samples(mesh: &SubMesh) -> Vec<Color> {
    match mesh.color_source() {
        ColorSource::VertexColored(colors) => vertex_color_samples(colors),
        ColorSource::TextureMapped { texture, uvs } => texture_samples(texture, uvs),
        ColorSource::Uncolored => Vec::new(),
    }
}

/// Quantize per-vertex colors to 8-bit RGB, dropping alpha
pub fn vertex_color_samples(colors: &VertexColors) -> Vec<Color> {
    match colors {
        VertexColors::RgbU8(c) => c.iter().map(|&[r, g, b]| Color::new(r, g, b)).collect(),
        VertexColors::RgbaU8(c) => c.iter().map(|&[r, g, b, _]| Color::new(r, g, b)).collect(),
        VertexColors::RgbU16(c) => c.iter().map(|&[r, g, b]| Color::from_unorm16(r, g, b)).collect(),
        VertexColors::RgbaU16(c) => c
            .iter()
            .map(|&[r, g, b, _]| Color::from_unorm16(r, g, b))
            .collect(),
        VertexColors::RgbF32(c) => c.iter().map(|&[r, g, b]| Color::from_unit_f32(r, g, b)).collect(),
        VertexColors::RgbaF32(c) => c
            .iter()
            .map(|&[r, g, b, _]| Color::from_unit_f32(r, g, b))
            .collect(),
    }
}

/// Sample `texture` once per UV coordinate
pub fn texture_samples(texture: &TextureImage, uvs: &[UV]) -> Vec<Color> {
    uvs.iter().map(|&uv| sample_texture(texture, uv)).collect()
}
