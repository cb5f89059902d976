use std::{
    fs::{self, DirEntry},
    path::Path,
};

use log::{debug, warn};

use crate::{
    error::{FsError, Result},
    item::{FileItem, to_local},
};

/// Lists the immediate children of `dir`: every subdirectory first, then
/// every file. Each block keeps the order the OS enumerated it in.
pub fn list_directory(dir: &Path) -> Result<Vec<FileItem>> {
    let (mut dirs, files) = read_children(dir)?;
    debug!(
        "[list] {:?}: {} dirs, {} files",
        dir,
        dirs.len(),
        files.len()
    );
    dirs.extend(files);
    Ok(dirs)
}

/// Immediate subdirectories of `dir`, in OS order.
pub fn list_subdirectories(dir: &Path) -> Result<Vec<FileItem>> {
    let (dirs, _) = read_children(dir)?;
    Ok(dirs)
}

/// Cheap probe for at least one subdirectory. Stops at the first hit.
/// Any failure, permission denied included, counts as "none".
pub fn has_subdirectories(dir: &Path) -> bool {
    let rd = match fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) => {
            debug!("[probe] read_dir({:?}) failed: {e}", dir);
            return false;
        }
    };

    rd.filter_map(|entry| entry.ok())
        .any(|entry| fs::metadata(entry.path()).is_ok_and(|m| m.is_dir()))
}

fn read_children(dir: &Path) -> Result<(Vec<FileItem>, Vec<FileItem>)> {
    let rd = fs::read_dir(dir).map_err(|e| FsError::io("cannot read directory", dir, e))?;

    let mut dirs = Vec::new();
    let mut files = Vec::new();

    for entry_res in rd {
        let entry = match entry_res {
            Ok(e) => e,
            Err(e) => {
                warn!("[list] error reading entry in {:?}: {e}", dir);
                continue;
            }
        };

        match inspect_entry(&entry) {
            Some(item) if item.is_dir => dirs.push(item),
            Some(item) => files.push(item),
            None => {}
        }
    }

    Ok((dirs, files))
}

/// Symlinks are classified by their target. A dangling link is reported as
/// an empty file so it can still be renamed or deleted.
fn inspect_entry(entry: &DirEntry) -> Option<FileItem> {
    let full_path = entry.path();

    match fs::metadata(&full_path) {
        Ok(metadata) => Some(FileItem::from_metadata(full_path, &metadata)),
        Err(_) => match entry.metadata() {
            Ok(link_meta) => {
                let modified = to_local(link_meta.modified().ok());
                Some(FileItem::file(full_path, 0, modified))
            }
            Err(e) => {
                warn!("[list] metadata({:?}) failed: {e}", full_path);
                None
            }
        },
    }
}

#[cfg(test)]
#[path = "lister_tests.rs"]
mod tests;
