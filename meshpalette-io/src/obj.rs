//! Wavefront OBJ (+ MTL) scene loading

use crate::error::LoadError;
use crate::texture::{read_texture, ImageCrateDecoder};
use meshpalette_core::{
    Error, ImageDecoder, Material, Result, Scene, SceneLoader, SubMesh, TextureImage, UV,
};
use obj::{MtlError, MtlLibsLoadError, Obj, ObjData, ObjMaterial};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Loads each OBJ group as a sub-mesh
///
/// The vertices of a group are the distinct (position, texcoord) pairs its
/// faces reference, so every vertex owns exactly one UV. The MTL `map_Kd`
/// image becomes the material's legacy image slot.
pub struct ObjLoader {
    decoder: Arc<dyn ImageDecoder>,
}

impl ObjLoader {
    /// Create a loader that decodes textures with the `image` crate
    pub fn new() -> Self {
        Self::with_decoder(Arc::new(ImageCrateDecoder))
    }

    /// Create a loader with a custom texture decoder
    pub fn with_decoder(decoder: Arc<dyn ImageDecoder>) -> Self {
        Self { decoder }
    }
}

impl Default for ObjLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneLoader for ObjLoader {
    fn load_scene(&self, path: &Path) -> Result<Scene> {
        let mut obj = Obj::load(path).map_err(LoadError::from)?;
        if let Err(err) = obj.load_mtls() {
            if !only_missing_libraries(&err) {
                return Err(LoadError::from(err).into());
            }
            warn!(path = %path.display(), error = %err, "material library not found");
        }

        let mut textures = HashMap::new();
        let mut scene = Scene::new();

        for object in &obj.data.objects {
            for group in &object.groups {
                if group.polys.is_empty() {
                    continue;
                }

                let (vertex_count, uvs) = group_vertices(&obj.data, &group.polys)?;
                let mut sub_mesh =
                    SubMesh::new(vertex_count).with_name(format!("{}/{}", object.name, group.name));

                if let Some(ObjMaterial::Mtl(mtl)) = &group.material {
                    let mut material = Material::new().with_name(mtl.name.clone());
                    if let Some(map_kd) = &mtl.map_kd {
                        material.image = self.texture(&mut textures, obj.path.join(map_kd))?;
                    }
                    sub_mesh = sub_mesh.with_material(material);
                }

                if let Some(uvs) = uvs {
                    sub_mesh = sub_mesh.with_uvs(uvs);
                }

                debug!(
                    group = sub_mesh.name.as_deref().unwrap_or_default(),
                    vertices = vertex_count,
                    textured = sub_mesh.material.as_ref().and_then(|m| m.image.as_ref()).is_some(),
                    "loaded OBJ group"
                );
                scene.push(sub_mesh);
            }
        }

        Ok(scene)
    }

    fn format_name(&self) -> &'static str {
        "OBJ"
    }

    fn supported_extensions(&self) -> &[&'static str] {
        &["obj"]
    }
}

impl ObjLoader {
    /// Decode a texture once per path; a missing file leaves the slot empty
    fn texture(
        &self,
        cache: &mut HashMap<PathBuf, Option<Arc<TextureImage>>>,
        path: PathBuf,
    ) -> Result<Option<Arc<TextureImage>>> {
        match cache.entry(path) {
            Entry::Occupied(entry) => Ok(entry.get().clone()),
            Entry::Vacant(entry) => {
                let texture = if entry.key().is_file() {
                    Some(Arc::new(read_texture(self.decoder.as_ref(), entry.key())?))
                } else {
                    warn!(path = %entry.key().display(), "texture file not found");
                    None
                };
                Ok(entry.insert(texture).clone())
            }
        }
    }
}

/// True when every failed material library is simply absent from disk
fn only_missing_libraries(err: &MtlLibsLoadError) -> bool {
    err.0
        .iter()
        .all(|(_, e)| matches!(e, MtlError::Io(io) if io.kind() == ErrorKind::NotFound))
}

/// Count the distinct vertices of a group and collect their UVs
///
/// UVs are returned only when every referenced vertex has a texture index.
fn group_vertices(data: &ObjData, polys: &[obj::SimplePolygon]) -> Result<(usize, Option<Vec<UV>>)> {
    let mut seen = HashSet::new();
    let mut uvs = Vec::new();
    let mut complete = true;

    for poly in polys {
        for tuple in &poly.0 {
            let key = (tuple.0, tuple.1);
            if !seen.insert(key) {
                continue;
            }

            match tuple.1 {
                Some(t) => {
                    let uv = data.texture.get(t).ok_or_else(|| {
                        Error::InvalidData(format!("texture coordinate index {} out of range", t))
                    })?;
                    uvs.push(*uv);
                }
                None => complete = false,
            }
        }
    }

    let uvs = if complete && !uvs.is_empty() { Some(uvs) } else { None };
    Ok((seen.len(), uvs))
}
