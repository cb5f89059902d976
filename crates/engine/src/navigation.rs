use std::path::{Path, PathBuf};

use burrow_fs::FileItem;

/// Where the explorer is, what is selected, and what is on the clipboard.
///
/// `current_path == None` is the drive-list view.
#[derive(Debug, Default)]
pub struct NavigationState {
    current_path: Option<PathBuf>,
    selected: Option<FileItem>,
    clipboard: Option<FileItem>,
    loading: bool,
}

impl NavigationState {
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    pub(crate) fn set_current_path(&mut self, path: PathBuf) {
        self.current_path = Some(path);
    }

    /// Parent of the current directory; `None` at a root or in the drive list.
    pub fn parent_path(&self) -> Option<&Path> {
        self.current_path.as_deref().and_then(Path::parent)
    }

    pub fn can_navigate_up(&self) -> bool {
        self.parent_path().is_some()
    }

    pub fn selected(&self) -> Option<&FileItem> {
        self.selected.as_ref()
    }

    pub(crate) fn select(&mut self, item: FileItem) {
        self.selected = Some(item);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn clipboard(&self) -> Option<&FileItem> {
        self.clipboard.as_ref()
    }

    /// Replaces the clipboard contents with `item`.
    pub(crate) fn remember(&mut self, item: FileItem) {
        self.clipboard = Some(item);
    }

    pub fn can_paste(&self) -> bool {
        self.clipboard.is_some() && self.current_path.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}

#[cfg(test)]
#[path = "navigation_tests.rs"]
mod tests;
