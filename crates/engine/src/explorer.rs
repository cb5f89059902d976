use std::path::{Path, PathBuf};

use burrow_fs::{
    self as bfs, Change, DirectoryItem, FileItem, FsError, VolumeSource, file_name_of, find_in,
    find_in_mut,
};
use log::debug;

use crate::{
    host::{DeclinePrompt, FileLauncher, FolderObserver, LogSink, NoLauncher, Prompt, StatusSink},
    navigation::NavigationState,
    status::{OpKind, StatusEvent},
};

const DEFAULT_FOLDER_NAME: &str = "New Folder";

/// The browsing engine: a lazily expanded directory tree, a flat listing of
/// the current directory, and the operations a front end invokes on them.
///
/// Every operation reports a [`StatusEvent`] and never returns an error;
/// every successful mutation reloads the current view from disk.
pub struct Explorer {
    volumes: Box<dyn VolumeSource>,
    prompt: Box<dyn Prompt>,
    status_sink: Box<dyn StatusSink>,
    launcher: Box<dyn FileLauncher>,
    observers: Vec<Box<dyn FolderObserver>>,
    tree: Vec<DirectoryItem>,
    files: Vec<FileItem>,
    nav: NavigationState,
    last_status: Option<StatusEvent>,
}

impl Explorer {
    /// Creates an explorer with no roots loaded. Call [`Explorer::load_drives`]
    /// or [`Explorer::navigate_to`] to populate it.
    pub fn new(volumes: Box<dyn VolumeSource>) -> Self {
        Self {
            volumes,
            prompt: Box::new(DeclinePrompt),
            status_sink: Box::new(LogSink),
            launcher: Box::new(NoLauncher),
            observers: Vec::new(),
            tree: Vec::new(),
            files: Vec::new(),
            nav: NavigationState::default(),
            last_status: None,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Prompt + 'static) -> Self {
        self.prompt = Box::new(prompt);
        self
    }

    pub fn with_status_sink(mut self, sink: impl StatusSink + 'static) -> Self {
        self.status_sink = Box::new(sink);
        self
    }

    pub fn with_launcher(mut self, launcher: impl FileLauncher + 'static) -> Self {
        self.launcher = Box::new(launcher);
        self
    }

    pub fn on_folder_selected(&mut self, observer: impl FolderObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    // ---- read-only view ----

    pub fn tree(&self) -> &[DirectoryItem] {
        &self.tree
    }

    pub fn files(&self) -> &[FileItem] {
        &self.files
    }

    pub fn node(&self, path: &Path) -> Option<&DirectoryItem> {
        find_in(&self.tree, path)
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.nav.current_path()
    }

    pub fn selected(&self) -> Option<&FileItem> {
        self.nav.selected()
    }

    pub fn clipboard(&self) -> Option<&FileItem> {
        self.nav.clipboard()
    }

    pub fn is_loading(&self) -> bool {
        self.nav.is_loading()
    }

    pub fn last_status(&self) -> Option<&StatusEvent> {
        self.last_status.as_ref()
    }

    pub fn can_navigate_up(&self) -> bool {
        self.nav.can_navigate_up()
    }

    pub fn can_delete(&self) -> bool {
        self.nav.selected().is_some()
    }

    pub fn can_rename(&self) -> bool {
        self.nav.selected().is_some()
    }

    pub fn can_copy(&self) -> bool {
        self.nav.selected().is_some()
    }

    pub fn can_paste(&self) -> bool {
        self.nav.can_paste()
    }

    // ---- loading ----

    fn report(&mut self, event: StatusEvent) {
        debug!("[explorer] {:?}", event);
        self.status_sink.report(&event);
        self.last_status = Some(event);
    }

    /// Rebuilds the tree roots from the volume source.
    pub fn load_drives(&mut self) {
        self.nav.set_loading(true);
        self.tree.clear();

        let event = match bfs::list_roots(self.volumes.as_ref()) {
            Ok(roots) => {
                let count = roots.len();
                self.tree = roots;
                StatusEvent::succeeded(OpKind::LoadDrives, None, count.to_string())
            }
            Err(e) => StatusEvent::failed(OpKind::LoadDrives, None, &e),
        };

        self.nav.set_loading(false);
        self.report(event);
    }

    /// Makes `path` the current directory and rebuilds the flat listing.
    /// The previous listing is discarded even if the new one fails to load.
    fn load_directory(&mut self, path: PathBuf) -> bool {
        self.nav.set_loading(true);
        self.files.clear();
        self.nav.clear_selection();
        self.nav.set_current_path(path.clone());

        let result = bfs::list_directory(&path);
        self.nav.set_loading(false);

        match result {
            Ok(items) => {
                self.files = items;
                let count = self.files.len();
                self.report(StatusEvent::succeeded(
                    OpKind::LoadDirectory,
                    Some(path.clone()),
                    count.to_string(),
                ));
                for observer in &mut self.observers {
                    observer.on_folder_selected(&path);
                }
                true
            }
            Err(e) => {
                self.report(StatusEvent::failed(OpKind::LoadDirectory, Some(path), &e));
                false
            }
        }
    }

    /// Reloads the current view: the listing when inside a directory,
    /// otherwise the drive list.
    pub fn refresh(&mut self) {
        match self.nav.current_path() {
            Some(path) => {
                let path = path.to_path_buf();
                self.load_directory(path);
            }
            None => self.load_drives(),
        }
    }

    /// Opens `path` as the current directory without touching the tree.
    pub fn navigate_to(&mut self, path: impl Into<PathBuf>) -> bool {
        self.load_directory(path.into())
    }

    /// Lists the parent directory, then reports the move itself.
    pub fn navigate_up(&mut self) {
        match self.nav.parent_path() {
            Some(parent) => {
                let parent = parent.to_path_buf();
                if self.load_directory(parent.clone()) {
                    let name = file_name_of(&parent);
                    self.report(StatusEvent::succeeded(OpKind::Navigate, Some(parent), name));
                }
            }
            None => {
                let target = self.nav.current_path().map(Path::to_path_buf);
                self.report(StatusEvent::skipped(
                    OpKind::Navigate,
                    target,
                    "already at the top level",
                ));
            }
        }
    }

    // ---- tree ----

    /// Loads the children of the tree node at `path` if they were never loaded,
    /// and marks it expanded.
    pub fn expand_node(&mut self, path: &Path) {
        let Some(node) = find_in_mut(&mut self.tree, path) else {
            let err = FsError::NotFound(path.to_path_buf());
            self.report(StatusEvent::failed(
                OpKind::ExpandNode,
                Some(path.to_path_buf()),
                &err,
            ));
            return;
        };

        let was_unrealized = node.has_unrealized_children();
        let result = node.expand();
        node.is_expanded = true;
        let name = node.name.clone();

        match result {
            Err(e) => self.report(StatusEvent::failed(
                OpKind::ExpandNode,
                Some(path.to_path_buf()),
                &e,
            )),
            Ok(()) if was_unrealized => self.report(StatusEvent::succeeded(
                OpKind::ExpandNode,
                Some(path.to_path_buf()),
                name,
            )),
            Ok(()) => {}
        }
    }

    pub fn collapse_node(&mut self, path: &Path) {
        if let Some(node) = find_in_mut(&mut self.tree, path) {
            node.is_expanded = false;
        }
    }

    /// Selects a tree node: expands it on first selection, then lists it.
    pub fn select_tree_node(&mut self, path: &Path) {
        let Some(node) = find_in(&self.tree, path) else {
            let err = FsError::NotFound(path.to_path_buf());
            self.report(StatusEvent::failed(
                OpKind::LoadDirectory,
                Some(path.to_path_buf()),
                &err,
            ));
            return;
        };

        if node.has_unrealized_children() {
            self.expand_node(path);
        }
        self.load_directory(path.to_path_buf());
    }

    /// Expands the tree from its root down to `path`, so a front end can
    /// highlight the current folder. Returns whether `path` was reached.
    pub fn reveal_in_tree(&mut self, path: &Path) -> bool {
        bfs::reveal(&mut self.tree, path).is_some()
    }

    // ---- selection ----

    /// Selects the listing entry called `name`. Returns whether it exists.
    pub fn select_item(&mut self, name: &str) -> bool {
        match self.files.iter().find(|i| i.name == name) {
            Some(item) => {
                let item = item.clone();
                self.nav.select(item);
                true
            }
            None => false,
        }
    }

    pub fn clear_selection(&mut self) {
        self.nav.clear_selection();
    }

    // ---- mutations ----

    /// Asks for a name and creates that folder in the current directory.
    pub fn create_folder(&mut self) {
        if self.nav.current_path().is_none() {
            self.report(StatusEvent::skipped(
                OpKind::CreateFolder,
                None,
                "no current directory",
            ));
            return;
        }

        match self.prompt.prompt_text("Create Folder", DEFAULT_FOLDER_NAME) {
            Some(name) => self.create_folder_named(&name),
            None => self.report(StatusEvent::skipped(
                OpKind::CreateFolder,
                None,
                "cancelled",
            )),
        }
    }

    pub fn create_folder_named(&mut self, name: &str) {
        let Some(parent) = self.nav.current_path().map(Path::to_path_buf) else {
            self.report(StatusEvent::skipped(
                OpKind::CreateFolder,
                None,
                "no current directory",
            ));
            return;
        };

        let event = match bfs::create_folder(&parent, name) {
            Ok(Change::Applied(path)) => {
                self.refresh();
                StatusEvent::succeeded(OpKind::CreateFolder, Some(path), name)
            }
            Ok(Change::Unchanged(reason)) => {
                StatusEvent::skipped(OpKind::CreateFolder, Some(parent), reason)
            }
            Err(e) => StatusEvent::failed(OpKind::CreateFolder, Some(parent.join(name)), &e),
        };
        self.report(event);
    }

    /// Deletes the selected entry after the prompt confirms it.
    pub fn delete_selected(&mut self) {
        let Some(item) = self.nav.selected().cloned() else {
            self.report(StatusEvent::skipped(OpKind::Delete, None, "nothing selected"));
            return;
        };

        let question = format!("Are you sure you want to delete '{}'?", item.name);
        if !self.prompt.confirm(&question) {
            self.report(StatusEvent::skipped(
                OpKind::Delete,
                Some(item.full_path),
                "deletion not confirmed",
            ));
            return;
        }

        let event = match bfs::delete(&item) {
            Ok(()) => {
                self.refresh();
                StatusEvent::succeeded(OpKind::Delete, Some(item.full_path), item.name)
            }
            Err(e) => StatusEvent::failed(OpKind::Delete, Some(item.full_path), &e),
        };
        self.report(event);
    }

    /// Asks for a new name for the selected entry and renames it.
    pub fn rename_selected(&mut self) {
        let Some(current) = self.nav.selected().map(|i| i.name.clone()) else {
            self.report(StatusEvent::skipped(OpKind::Rename, None, "nothing selected"));
            return;
        };

        match self.prompt.prompt_text("Rename Item", &current) {
            Some(name) => self.rename_selected_to(&name),
            None => self.report(StatusEvent::skipped(OpKind::Rename, None, "cancelled")),
        }
    }

    pub fn rename_selected_to(&mut self, new_name: &str) {
        let Some(item) = self.nav.selected().cloned() else {
            self.report(StatusEvent::skipped(OpKind::Rename, None, "nothing selected"));
            return;
        };

        let event = match bfs::rename(&item, new_name) {
            Ok(Change::Applied(dest)) => {
                self.refresh();
                StatusEvent::succeeded(OpKind::Rename, Some(dest), new_name)
            }
            Ok(Change::Unchanged(reason)) => {
                StatusEvent::skipped(OpKind::Rename, Some(item.full_path), reason)
            }
            Err(e) => StatusEvent::failed(OpKind::Rename, Some(item.full_path), &e),
        };
        self.report(event);
    }

    /// Puts the selected entry on the clipboard, replacing what was there.
    pub fn copy_selected(&mut self) {
        let Some(item) = self.nav.selected().cloned() else {
            self.report(StatusEvent::skipped(OpKind::Copy, None, "nothing selected"));
            return;
        };

        let event = StatusEvent::succeeded(
            OpKind::Copy,
            Some(item.full_path.clone()),
            item.name.clone(),
        );
        self.nav.remember(item);
        self.report(event);
    }

    /// Copies the clipboard entry into the current directory.
    /// The clipboard keeps its entry, so it can be pasted again elsewhere.
    pub fn paste(&mut self) {
        let (Some(item), Some(dest_dir)) = (
            self.nav.clipboard().cloned(),
            self.nav.current_path().map(Path::to_path_buf),
        ) else {
            let reason = if self.nav.clipboard().is_none() {
                "clipboard is empty"
            } else {
                "no current directory"
            };
            self.report(StatusEvent::skipped(OpKind::Paste, None, reason));
            return;
        };

        let event = match bfs::paste(&item, &dest_dir) {
            Ok(dest) => {
                self.refresh();
                StatusEvent::succeeded(OpKind::Paste, Some(dest), item.name)
            }
            Err(e) => StatusEvent::failed(OpKind::Paste, Some(item.full_path), &e),
        };
        self.report(event);
    }

    /// Directories become the current directory; files go to the launcher.
    pub fn open(&mut self, item: &FileItem) {
        if item.is_dir {
            self.load_directory(item.full_path.clone());
            return;
        }

        let path = item.full_path.clone();
        let event = match self.launcher.open_with_default_application(&path) {
            Ok(()) => StatusEvent::succeeded(OpKind::Open, Some(path), file_name_of(&item.full_path)),
            Err(e) => {
                let err = FsError::io("cannot open", &path, e);
                StatusEvent::failed(OpKind::Open, Some(path), &err)
            }
        };
        self.report(event);
    }

    pub fn open_selected(&mut self) {
        match self.nav.selected().cloned() {
            Some(item) => self.open(&item),
            None => self.report(StatusEvent::skipped(OpKind::Open, None, "nothing selected")),
        }
    }
}

#[cfg(test)]
#[path = "explorer_tests.rs"]
mod tests;
