//! PLY format support

use crate::error::LoadError;
use crate::texture::{read_texture, ImageCrateDecoder};
use meshpalette_core::{
    unit_f32_to_u8, unorm16_to_u8, Color, ImageDecoder, Material, Result, Scene, SceneLoader,
    SubMesh, UV,
};
use ply_rs::{
    parser::Parser,
    ply::{DefaultElement, Property},
};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// Channel property names, tried in order
const RED_NAMES: [&str; 3] = ["red", "r", "diffuse_red"];
const GREEN_NAMES: [&str; 3] = ["green", "g", "diffuse_green"];
const BLUE_NAMES: [&str; 3] = ["blue", "b", "diffuse_blue"];
const U_NAMES: [&str; 3] = ["s", "u", "texture_u"];
const V_NAMES: [&str; 3] = ["t", "v", "texture_v"];

/// Loads a PLY mesh as a single sub-mesh
///
/// Vertex `red`/`green`/`blue` properties become vertex colors. Texture
/// coordinates are read from `s`/`t` (or `u`/`v`) and paired with the image
/// named by a `comment TextureFile <file>` header line.
/// A PLY without faces is a point cloud and yields an empty scene.
pub struct PlyLoader {
    decoder: Arc<dyn ImageDecoder>,
}

impl PlyLoader {
    /// Create a loader that decodes textures with the `image` crate
    pub fn new() -> Self {
        Self::with_decoder(Arc::new(ImageCrateDecoder))
    }

    /// Create a loader with a custom texture decoder
    pub fn with_decoder(decoder: Arc<dyn ImageDecoder>) -> Self {
        Self { decoder }
    }
}

impl Default for PlyLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneLoader for PlyLoader {
    fn load_scene(&self, path: &Path) -> Result<Scene> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        // Parse PLY header and payload
        let parser = Parser::<DefaultElement>::new();
        let ply = parser.read_ply(&mut reader).map_err(LoadError::Ply)?;

        let face_count = ply.payload.get("face").map_or(0, Vec::len);
        let vertices = match ply.payload.get("vertex") {
            Some(vertices) if face_count > 0 => vertices,
            _ => {
                debug!(path = %path.display(), "PLY has no faces, treating as point cloud");
                return Ok(Scene::new());
            }
        };

        let mut mesh = SubMesh::new(vertices.len());
        if let Some(name) = path.file_stem().and_then(|s| s.to_str()) {
            mesh = mesh.with_name(name);
        }

        if let Some(colors) = extract_colors(vertices) {
            mesh = mesh.with_vertex_colors(colors);
        }

        if let Some(uvs) = extract_uvs(vertices) {
            mesh = mesh.with_uvs(uvs);
        }

        let texture_file = ply
            .header
            .comments
            .iter()
            .find_map(|comment| comment.trim().strip_prefix("TextureFile"))
            .map(str::trim)
            .filter(|name| !name.is_empty());
        if let Some(texture_file) = texture_file {
            let texture_path = path.parent().unwrap_or_else(|| Path::new("")).join(texture_file);
            if texture_path.is_file() {
                let texture = read_texture(self.decoder.as_ref(), &texture_path)?;
                mesh = mesh.with_material(Material::legacy(Arc::new(texture)));
            } else {
                warn!(path = %texture_path.display(), "texture file not found");
            }
        }

        debug!(
            path = %path.display(),
            vertices = mesh.vertex_count,
            faces = face_count,
            vertex_colors = mesh.vertex_colors.is_some(),
            "loaded PLY mesh"
        );

        Ok(Scene::from_meshes(vec![mesh]))
    }

    fn format_name(&self) -> &'static str {
        "PLY"
    }

    fn supported_extensions(&self) -> &[&'static str] {
        &["ply"]
    }
}

/// Read per-vertex colors; None unless every vertex has all three channels
fn extract_colors(vertices: &[DefaultElement]) -> Option<Vec<Color>> {
    vertices
        .iter()
        .map(|vertex| {
            Some(Color::new(
                channel_value(find_property(vertex, &RED_NAMES)?)?,
                channel_value(find_property(vertex, &GREEN_NAMES)?)?,
                channel_value(find_property(vertex, &BLUE_NAMES)?)?,
            ))
        })
        .collect()
}

/// Read per-vertex texture coordinates; None unless every vertex has both
fn extract_uvs(vertices: &[DefaultElement]) -> Option<Vec<UV>> {
    vertices
        .iter()
        .map(|vertex| {
            Some([
                scalar_value(find_property(vertex, &U_NAMES)?)?,
                scalar_value(find_property(vertex, &V_NAMES)?)?,
            ])
        })
        .collect()
}

fn find_property<'a>(element: &'a DefaultElement, names: &[&str]) -> Option<&'a Property> {
    names.iter().find_map(|name| element.get(*name))
}

/// Quantize a color channel to 8 bits according to its storage type
fn channel_value(property: &Property) -> Option<u8> {
    match property {
        Property::Char(val) => Some((*val).max(0) as u8),
        Property::UChar(val) => Some(*val),
        Property::Short(val) => Some((*val).clamp(0, 255) as u8),
        Property::UShort(val) => Some(unorm16_to_u8(*val)),
        Property::Float(val) => Some(unit_f32_to_u8(*val)),
        Property::Double(val) => Some(unit_f32_to_u8(*val as f32)),
        Property::Int(val) => Some((*val).clamp(0, 255) as u8),
        Property::UInt(val) => Some((*val).min(255) as u8),
        _ => None,
    }
}

/// Extract a scalar property value as f32
fn scalar_value(property: &Property) -> Option<f32> {
    match property {
        Property::Float(val) => Some(*val),
        Property::Double(val) => Some(*val as f32),
        _ => None,
    }
}
