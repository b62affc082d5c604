//! glTF 2.0 (`.gltf` / `.glb`) scene loading

use crate::error::LoadError;
use gltf::image::Format;
use gltf::mesh::util::ReadColors;
use gltf::mesh::Mode;
use meshpalette_core::{
    Material, Result, Scene, SceneLoader, SubMesh, TextureImage, VertexColors,
};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// Loads every triangle primitive of a glTF document as a sub-mesh
///
/// Each mesh of the document is visited once, however many nodes instance
/// it. `COLOR_0` becomes the vertex colors; the PBR base-color texture is
/// attached together with the texture-coordinate set it references.
#[derive(Debug, Clone, Copy, Default)]
pub struct GltfLoader;

impl SceneLoader for GltfLoader {
    fn load_scene(&self, path: &Path) -> Result<Scene> {
        let (document, buffers, images) = gltf::import(path).map_err(LoadError::from)?;

        let mut textures = TextureCache::new(&images);
        let mut scene = Scene::new();

        for mesh in document.meshes() {
            for primitive in mesh.primitives() {
                if !is_triangle_mode(primitive.mode()) {
                    warn!(
                        mesh = mesh.name().unwrap_or("<unnamed>"),
                        mode = ?primitive.mode(),
                        "skipping non-triangle primitive"
                    );
                    continue;
                }

                let reader = primitive.reader(|buffer| Some(buffers[buffer.index()].0.as_slice()));
                let vertex_count = reader.read_positions().map(|p| p.count()).unwrap_or(0);

                let mut sub_mesh = SubMesh::new(vertex_count);
                if let Some(name) = mesh.name() {
                    sub_mesh = sub_mesh.with_name(format!("{}/{}", name, primitive.index()));
                }

                if let Some(colors) = reader.read_colors(0) {
                    sub_mesh = sub_mesh.with_vertex_colors(vertex_colors(colors));
                }

                let material = primitive.material();
                if let Some(info) = material.pbr_metallic_roughness().base_color_texture() {
                    let image_index = info.texture().source().index();
                    let texture = textures.get(image_index)?;

                    let mut pbr = Material::pbr(texture);
                    if let Some(name) = material.name() {
                        pbr = pbr.with_name(name);
                    }
                    sub_mesh = sub_mesh.with_material(pbr);

                    if let Some(uvs) = reader.read_tex_coords(info.tex_coord()) {
                        sub_mesh = sub_mesh.with_uvs(uvs.into_f32().collect());
                    }
                }

                debug!(
                    mesh = sub_mesh.name.as_deref().unwrap_or("<unnamed>"),
                    vertices = vertex_count,
                    vertex_colors = sub_mesh.vertex_colors.is_some(),
                    textured = sub_mesh.material.is_some(),
                    "loaded glTF primitive"
                );
                scene.push(sub_mesh);
            }
        }

        Ok(scene)
    }

    fn format_name(&self) -> &'static str {
        "glTF"
    }

    fn supported_extensions(&self) -> &[&'static str] {
        &["gltf", "glb"]
    }
}

fn is_triangle_mode(mode: Mode) -> bool {
    matches!(mode, Mode::Triangles | Mode::TriangleStrip | Mode::TriangleFan)
}

fn vertex_colors(colors: ReadColors<'_>) -> VertexColors {
    match colors {
        ReadColors::RgbU8(iter) => VertexColors::RgbU8(iter.collect()),
        ReadColors::RgbaU8(iter) => VertexColors::RgbaU8(iter.collect()),
        ReadColors::RgbU16(iter) => VertexColors::RgbU16(iter.collect()),
        ReadColors::RgbaU16(iter) => VertexColors::RgbaU16(iter.collect()),
        ReadColors::RgbF32(iter) => VertexColors::RgbF32(iter.collect()),
        ReadColors::RgbaF32(iter) => VertexColors::RgbaF32(iter.collect()),
    }
}

/// Converts document images on first use and shares them between primitives
struct TextureCache<'a> {
    images: &'a [gltf::image::Data],
    converted: HashMap<usize, Arc<TextureImage>>,
}

impl<'a> TextureCache<'a> {
    fn new(images: &'a [gltf::image::Data]) -> Self {
        Self {
            images,
            converted: HashMap::new(),
        }
    }

    fn get(&mut self, index: usize) -> Result<Arc<TextureImage>> {
        if let Some(texture) = self.converted.get(&index) {
            return Ok(texture.clone());
        }

        let data = self.images.get(index).ok_or_else(|| {
            meshpalette_core::Error::InvalidData(format!("image index {} out of range", index))
        })?;
        let texture = Arc::new(texture_from_gltf(data)?);
        self.converted.insert(index, texture.clone());
        Ok(texture)
    }
}

/// Narrow a glTF image to 8-bit channels
///
/// 16-bit channels keep their high byte; float channels are scaled by 255
/// and truncated.
pub fn texture_from_gltf(data: &gltf::image::Data) -> Result<TextureImage> {
    let pixels = &data.pixels;
    let (channels, bytes): (u8, Vec<u8>) = match data.format {
        Format::R8 => (1, pixels.clone()),
        Format::R8G8 => (2, pixels.clone()),
        Format::R8G8B8 => (3, pixels.clone()),
        Format::R8G8B8A8 => (4, pixels.clone()),
        Format::R16 => (1, narrow_u16(pixels)),
        Format::R16G16 => (2, narrow_u16(pixels)),
        Format::R16G16B16 => (3, narrow_u16(pixels)),
        Format::R16G16B16A16 => (4, narrow_u16(pixels)),
        Format::R32G32B32FLOAT => (3, narrow_f32(pixels)),
        Format::R32G32B32A32FLOAT => (4, narrow_f32(pixels)),
    };

    TextureImage::new(data.width, data.height, channels, bytes)
}

fn narrow_u16(pixels: &[u8]) -> Vec<u8> {
    pixels
        .chunks_exact(2)
        .map(|c| (u16::from_ne_bytes([c[0], c[1]]) >> 8) as u8)
        .collect()
}

fn narrow_f32(pixels: &[u8]) -> Vec<u8> {
    pixels
        .chunks_exact(4)
        .map(|c| meshpalette_core::unit_f32_to_u8(f32::from_ne_bytes([c[0], c[1], c[2], c[3]])))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_u16_keeps_high_byte() {
        let pixels: Vec<u8> = [0xFFFFu16, 0x8000, 0x00FF]
            .iter()
            .flat_map(|v| v.to_ne_bytes())
            .collect();
        assert_eq!(narrow_u16(&pixels), vec![0xFF, 0x80, 0x00]);
    }

    #[test]
    fn test_narrow_f32_truncates() {
        let pixels: Vec<u8> = [1.0f32, 0.5, 0.0].iter().flat_map(|v| v.to_ne_bytes()).collect();
        assert_eq!(narrow_f32(&pixels), vec![255, 127, 0]);
    }

    #[test]
    fn test_texture_from_gltf_rgb() {
        let data = gltf::image::Data {
            pixels: vec![1, 2, 3, 4, 5, 6],
            format: Format::R8G8B8,
            width: 2,
            height: 1,
        };
        let texture = texture_from_gltf(&data).unwrap();
        assert_eq!(texture.channels(), 3);
        assert_eq!(texture.pixel(1, 0), &[4, 5, 6]);
    }

    #[test]
    fn test_triangle_modes() {
        assert!(is_triangle_mode(Mode::Triangles));
        assert!(is_triangle_mode(Mode::TriangleFan));
        assert!(!is_triangle_mode(Mode::Points));
        assert!(!is_triangle_mode(Mode::Lines));
    }
}
