use std::{io, path::PathBuf};

use serde::Serialize;
use thiserror::Error;

pub type Result<T, E = FsError> = std::result::Result<T, E>;

/// Coarse error taxonomy used when reporting failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Create, delete, rename, copy, paste or listing failed.
    Io,
    /// Volume or directory probing failed.
    Enumeration,
}

#[derive(Error, Debug)]
pub enum FsError {
    #[error("{action} '{}': {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{}' does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("'{}' already exists", .0.display())]
    AlreadyExists(PathBuf),

    #[error("invalid name: {0:?}")]
    InvalidName(String),

    #[error("cannot copy '{}' onto itself", .0.display())]
    SameFile(PathBuf),

    #[error("cannot copy '{}' into its own subdirectory '{}'", .source_dir.display(), .dest.display())]
    CopyIntoSelf { source_dir: PathBuf, dest: PathBuf },

    #[error("directory nesting under '{}' exceeds {limit} levels", .path.display())]
    DepthLimit { path: PathBuf, limit: usize },

    #[error("cannot enumerate volumes: {0}")]
    Enumeration(String),
}

impl FsError {
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        FsError::Io {
            action,
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            FsError::Enumeration(_) => ErrorCategory::Enumeration,
            _ => ErrorCategory::Io,
        }
    }
}
