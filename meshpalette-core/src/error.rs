//! Error types for meshpalette

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for meshpalette operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Asset not found: {}", path.display())]
    AssetNotFound { path: PathBuf },

    #[error("No mesh geometry found in asset")]
    NoGeometry,

    #[error("No color data found: no vertex colors and no textured UVs in any mesh")]
    NoColorData,

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Algorithm error: {0}")]
    Algorithm(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A fault raised by an asset or image decoder, forwarded unchanged.
    #[error(transparent)]
    Decode(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wrap a third-party decoder error without altering its message
    pub fn decode<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Decode(Box::new(err))
    }
}

/// Result type alias for meshpalette operations
pub type Result<T> = std::result::Result<T, Error>;
