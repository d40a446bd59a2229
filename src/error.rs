// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Damping factor must be between 0 and 1, got {0}")]
    InvalidDamping(f64),

    #[error("Invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, GraphError>;

impl GraphError {
    /// Wraps an I/O failure together with the path that caused it.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        GraphError::Io {
            source,
            path: path.into(),
        }
    }
}
