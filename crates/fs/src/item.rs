use std::{
    fs::Metadata,
    path::{Path, PathBuf},
    time::SystemTime,
};

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::config::SIZE_UNIT;

/// One entry of a flat directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileItem {
    pub name: String,
    /// Absolute path; the identity of the entry.
    pub full_path: PathBuf,
    /// Size in bytes, 0 for directories.
    pub size: u64,
    /// Last write time, when the platform reports one.
    pub last_modified: Option<DateTime<Local>>,
    pub is_dir: bool,
}

impl FileItem {
    pub fn directory(full_path: PathBuf, last_modified: Option<DateTime<Local>>) -> Self {
        Self {
            name: file_name_of(&full_path),
            full_path,
            size: 0,
            last_modified,
            is_dir: true,
        }
    }

    pub fn file(full_path: PathBuf, size: u64, last_modified: Option<DateTime<Local>>) -> Self {
        Self {
            name: file_name_of(&full_path),
            full_path,
            size,
            last_modified,
            is_dir: false,
        }
    }

    /// Builds an item from already-fetched metadata.
    pub fn from_metadata(full_path: PathBuf, metadata: &Metadata) -> Self {
        let modified = to_local(metadata.modified().ok());
        if metadata.is_dir() {
            Self::directory(full_path, modified)
        } else {
            Self::file(full_path, metadata.len(), modified)
        }
    }

    /// Extension including the leading dot, or an empty string.
    pub fn extension(&self) -> String {
        self.full_path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default()
    }

    pub fn display_size(&self) -> String {
        if self.is_dir {
            "Folder".to_owned()
        } else {
            format_size(self.size)
        }
    }
}

/// Formats a byte count as B, KB, MB or GB with one decimal place.
pub fn format_size(bytes: u64) -> String {
    let kb = SIZE_UNIT;
    let mb = kb * SIZE_UNIT;
    let gb = mb * SIZE_UNIT;

    if bytes < kb {
        format!("{bytes} B")
    } else if bytes < mb {
        format!("{:.1} KB", bytes as f64 / kb as f64)
    } else if bytes < gb {
        format!("{:.1} MB", bytes as f64 / mb as f64)
    } else {
        format!("{:.1} GB", bytes as f64 / gb as f64)
    }
}

/// Last path component, or the whole path for roots like `/`.
pub fn file_name_of(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}

pub(crate) fn to_local(t: Option<SystemTime>) -> Option<DateTime<Local>> {
    t.map(DateTime::<Local>::from)
}

#[cfg(test)]
#[path = "item_tests.rs"]
mod tests;
