//! Load-time error type.
//!
//! Everything that can go wrong while reading level and atlas data ends up
//! here. These errors are fatal: a session is never built from partial data.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("level has no \"enemy-spawn\" marker")]
    MissingEnemySpawn,

    #[error("level is invalid: {0}")]
    InvalidLevel(String),

    #[error("clip \"{clip}\" has no frames")]
    EmptyClip { clip: String },

    #[error("clip \"{clip}\" references missing atlas frame \"{frame}\"")]
    MissingAtlasFrame { clip: String, frame: String },
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoadError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        LoadError::Json {
            path: path.into(),
            source,
        }
    }
}
