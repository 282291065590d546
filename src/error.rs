//! Error types for table file IO

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or saving a table
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no file path set")]
    NoPath,
}

pub type Result<T> = std::result::Result<T, TableError>;
