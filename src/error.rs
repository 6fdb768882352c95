/// Error types for the gallery
///
/// Library code returns `Result<T>` and propagates with `?`.
/// The application turns these into status-line strings at the
/// message boundary (async task results must be `Clone`).

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which half of a comparison pair an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Before,
    After,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Before => write!(f, "before"),
            Side::After => write!(f, "after"),
        }
    }
}

#[derive(Debug, Error)]
pub enum GalleryError {
    /// `jump_to` was called with an index outside `[0, len)`
    #[error("index {index} is out of range for a gallery of {len} items")]
    InvalidIndex { index: usize, len: usize },

    #[error("comparison item {id} has no {side} image")]
    MissingImage { id: u32, side: Side },

    #[error("duplicate comparison item id {0}")]
    DuplicateId(u32),

    #[error("remote image references are not supported: {0}")]
    RemoteReference(String),

    #[error("could not determine the user config directory")]
    NoConfigDir,

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl GalleryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GalleryError::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, GalleryError>;
