use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TailError {
    #[error("cannot open '{}': No such file or directory", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot open '{}': Permission denied", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("cannot read '{}': Not a regular file", path.display())]
    NotAFile { path: PathBuf },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TailError {
    /// Classify an I/O failure on `path` into the matching variant.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => TailError::NotFound { path },
            io::ErrorKind::PermissionDenied => TailError::PermissionDenied { path },
            _ => TailError::Io { path, source },
        }
    }
}

pub type Result<T> = std::result::Result<T, TailError>;
