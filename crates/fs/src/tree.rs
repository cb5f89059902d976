use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use log::debug;
use serde::Serialize;

use crate::{
    error::Result,
    item::{FileItem, file_name_of},
    lister::{has_subdirectories, list_subdirectories},
};

/// Whether a node's children have been loaded from disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Realization {
    /// A probe saw at least one subdirectory; children not loaded yet.
    Unrealized,
    /// Probed or loaded, and there are no subdirectories.
    Empty,
    /// Loaded with at least one child.
    Populated,
}

impl Realization {
    fn probe(path: &Path) -> Self {
        if has_subdirectories(path) {
            Realization::Unrealized
        } else {
            Realization::Empty
        }
    }
}

/// A directory node of the navigation tree. Holds subdirectories only.
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryItem {
    pub name: String,
    pub full_path: PathBuf,
    pub last_modified: Option<DateTime<Local>>,
    pub children: Vec<DirectoryItem>,
    pub is_expanded: bool,
    realization: Realization,
}

impl DirectoryItem {
    /// Creates a node and probes one level down for subdirectories.
    pub fn probed(name: String, full_path: PathBuf, last_modified: Option<DateTime<Local>>) -> Self {
        let realization = Realization::probe(&full_path);
        Self {
            name,
            full_path,
            last_modified,
            children: Vec::new(),
            is_expanded: false,
            realization,
        }
    }

    pub fn from_item(item: FileItem) -> Self {
        Self::probed(item.name, item.full_path, item.last_modified)
    }

    pub fn realization(&self) -> Realization {
        self.realization
    }

    pub fn has_unrealized_children(&self) -> bool {
        self.realization == Realization::Unrealized
    }

    /// Flat-listing view of this node.
    pub fn to_file_item(&self) -> FileItem {
        FileItem {
            name: self.name.clone(),
            full_path: self.full_path.clone(),
            size: 0,
            last_modified: self.last_modified,
            is_dir: true,
        }
    }

    /// Loads the immediate subdirectories on first call; later calls are no-ops.
    ///
    /// The node leaves [`Realization::Unrealized`] even when loading fails, so
    /// an unreadable directory is not retried on every expansion. On failure
    /// the children stay empty and the error is returned for reporting.
    pub fn expand(&mut self) -> Result<()> {
        if !self.has_unrealized_children() {
            return Ok(());
        }

        self.children.clear();
        let loaded = list_subdirectories(&self.full_path);
        self.realization = Realization::Empty;

        let subdirs = loaded?;
        self.children = subdirs.into_iter().map(DirectoryItem::from_item).collect();
        if !self.children.is_empty() {
            self.realization = Realization::Populated;
        }

        debug!(
            "[tree] expanded {:?}: {} children",
            self.full_path,
            self.children.len()
        );
        Ok(())
    }

    /// Finds the node for `path` in this subtree, following only loaded children.
    pub fn find(&self, path: &Path) -> Option<&DirectoryItem> {
        if self.full_path == path {
            return Some(self);
        }
        if !path.starts_with(&self.full_path) {
            return None;
        }
        self.children.iter().find_map(|c| c.find(path))
    }

    pub fn find_mut(&mut self, path: &Path) -> Option<&mut DirectoryItem> {
        if self.full_path == path {
            return Some(self);
        }
        if !path.starts_with(&self.full_path) {
            return None;
        }
        self.children.iter_mut().find_map(|c| c.find_mut(path))
    }
}

/// Builds a root node for `path`, naming it after its last component.
pub fn node_for_path(path: &Path) -> DirectoryItem {
    let modified = std::fs::metadata(path)
        .ok()
        .and_then(|m| m.modified().ok())
        .map(DateTime::<Local>::from);
    DirectoryItem::probed(file_name_of(path), path.to_path_buf(), modified)
}

/// Finds `path` across a forest of roots.
pub fn find_in<'a>(roots: &'a [DirectoryItem], path: &Path) -> Option<&'a DirectoryItem> {
    roots.iter().find_map(|r| r.find(path))
}

pub fn find_in_mut<'a>(
    roots: &'a mut [DirectoryItem],
    path: &Path,
) -> Option<&'a mut DirectoryItem> {
    roots.iter_mut().find_map(|r| r.find_mut(path))
}

/// Expands every node on the way from a root down to `path`, loading
/// children as needed, and returns the node for `path` if it is reachable.
pub fn reveal<'a>(roots: &'a mut [DirectoryItem], path: &Path) -> Option<&'a mut DirectoryItem> {
    // Longest matching root wins so nested mount points resolve correctly.
    let root = roots
        .iter_mut()
        .filter(|r| path.starts_with(&r.full_path))
        .max_by_key(|r| r.full_path.components().count())?;

    let mut node = root;
    loop {
        if node.full_path == path {
            return Some(node);
        }
        if let Err(e) = node.expand() {
            debug!("[tree] reveal stopped at {:?}: {e}", node.full_path);
            return None;
        }
        node.is_expanded = true;
        node = node
            .children
            .iter_mut()
            .find(|c| path.starts_with(&c.full_path))?;
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
