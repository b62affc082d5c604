//! Error types for scene and image loading

use thiserror::Error;

/// Faults raised by the third-party decoders
///
/// Every variant is transparent: the decoder's own message and source chain
/// reach the caller unchanged.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Gltf(#[from] gltf::Error),

    #[error(transparent)]
    Obj(#[from] obj::ObjError),

    #[error(transparent)]
    Mtl(#[from] obj::MtlLibsLoadError),

    #[error(transparent)]
    Ply(std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

impl From<LoadError> for meshpalette_core::Error {
    fn from(err: LoadError) -> Self {
        meshpalette_core::Error::decode(err)
    }
}
