//! Sub-mesh and scene data structures

use crate::color::VertexColors;
use crate::texture::TextureImage;
use std::sync::Arc;

/// Texture coordinates (UV mapping)
pub type UV = [f32; 2];

/// Surface material, reduced to the texture slots that carry base color
///
/// Formats expose the base-color image either through a PBR slot (glTF
/// `baseColorTexture`) or through a legacy image slot (OBJ `map_Kd`).
#[derive(Debug, Clone, Default)]
pub struct Material {
    pub name: Option<String>,
    /// PBR base-color texture
    pub base_color_texture: Option<Arc<TextureImage>>,
    /// Legacy diffuse image
    pub image: Option<Arc<TextureImage>>,
}

impl Material {
    /// Create a material with no textures
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a material with a PBR base-color texture
    pub fn pbr(texture: Arc<TextureImage>) -> Self {
        Self {
            base_color_texture: Some(texture),
            ..Self::default()
        }
    }

    /// Create a material with a legacy diffuse image
    pub fn legacy(image: Arc<TextureImage>) -> Self {
        Self {
            image: Some(image),
            ..Self::default()
        }
    }

    /// Set the material name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The texture supplying base color, preferring the PBR slot
    pub fn texture(&self) -> Option<&TextureImage> {
        self.base_color_texture
            .as_deref()
            .or(self.image.as_deref())
    }
}

/// One discrete piece of geometry within a scene
#[derive(Debug, Clone, Default)]
pub struct SubMesh {
    pub name: Option<String>,
    pub vertex_count: usize,
    pub vertex_colors: Option<VertexColors>,
    pub uvs: Option<Vec<UV>>,
    pub material: Option<Material>,
}

/// Where the colors of a sub-mesh come from, resolved once per sub-mesh
#[derive(Debug, Clone, Copy)]
pub enum ColorSource<'a> {
    /// Explicit per-vertex colors
    VertexColored(&'a VertexColors),
    /// A base-color texture addressed through per-vertex UVs
    TextureMapped {
        texture: &'a TextureImage,
        uvs: &'a [UV],
    },
    /// Neither; contributes no samples
    Uncolored,
}

impl SubMesh {
    /// Create a sub-mesh with the given vertex count and no color data
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            ..Self::default()
        }
    }

    /// Set the sub-mesh name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach per-vertex colors
    pub fn with_vertex_colors(mut self, colors: impl Into<VertexColors>) -> Self {
        self.vertex_colors = Some(colors.into());
        self
    }

    /// Attach per-vertex texture coordinates
    pub fn with_uvs(mut self, uvs: Vec<UV>) -> Self {
        self.uvs = Some(uvs);
        self
    }

    /// Attach a material
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = Some(material);
        self
    }

    /// Resolve the color source: vertex colors first, then texture + UVs
    pub fn color_source(&self) -> ColorSource<'_> {
        if let Some(colors) = &self.vertex_colors {
            return ColorSource::VertexColored(colors);
        }

        let texture = self.material.as_ref().and_then(Material::texture);
        match (texture, &self.uvs) {
            (Some(texture), Some(uvs)) => ColorSource::TextureMapped { texture, uvs },
            _ => ColorSource::Uncolored,
        }
    }
}

/// A collection of sub-meshes loaded from one asset
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub meshes: Vec<SubMesh>,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scene from sub-meshes
    pub fn from_meshes(meshes: Vec<SubMesh>) -> Self {
        Self { meshes }
    }

    /// Add a sub-mesh
    pub fn push(&mut self, mesh: SubMesh) {
        self.meshes.push(mesh);
    }

    /// Get the number of sub-meshes
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// Check if the scene has no sub-meshes
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Iterate over the sub-meshes
    pub fn iter(&self) -> std::slice::Iter<'_, SubMesh> {
        self.meshes.iter()
    }
}

impl FromIterator<SubMesh> for Scene {
    fn from_iter<I: IntoIterator<Item = SubMesh>>(iter: I) -> Self {
        Self::from_meshes(iter.into_iter().collect())
    }
}
