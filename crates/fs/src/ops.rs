use std::{
    fs, io,
    path::{Component, Path, PathBuf},
};

use log::{debug, info, warn};

use crate::{
    config::MAX_COPY_DEPTH,
    error::{FsError, Result},
    item::{FileItem, file_name_of},
    lister::list_directory,
};

/// Result of an operation that may legitimately do nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// The filesystem was modified; carries the resulting path.
    Applied(PathBuf),
    /// Nothing was touched, with the reason.
    Unchanged(&'static str),
}

/// Rejects names that would escape the parent directory.
/// A blank name is not an error here; callers treat it as "nothing to do".
fn check_name(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    let single_normal = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );

    if !single_normal || name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) {
        return Err(FsError::InvalidName(name.to_owned()));
    }
    Ok(())
}

fn exists_no_follow(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Creates directory `name` inside `parent`.
pub fn create_folder(parent: &Path, name: &str) -> Result<Change> {
    if name.trim().is_empty() {
        return Ok(Change::Unchanged("folder name is empty"));
    }
    check_name(name)?;

    let target = parent.join(name);
    if exists_no_follow(&target) {
        return Err(FsError::AlreadyExists(target));
    }

    fs::create_dir(&target).map_err(|e| match e.kind() {
        io::ErrorKind::AlreadyExists => FsError::AlreadyExists(target.clone()),
        _ => FsError::io("cannot create folder", &target, e),
    })?;

    info!("[ops] created folder {:?}", target);
    Ok(Change::Applied(target))
}

/// Deletes `item`; directories are removed with all their contents.
/// A symlink is removed itself, never its target.
pub fn delete(item: &FileItem) -> Result<()> {
    let path = &item.full_path;
    let meta = fs::symlink_metadata(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => FsError::NotFound(path.clone()),
        _ => FsError::io("cannot delete", path, e),
    })?;

    if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
    .map_err(|e| FsError::io("cannot delete", path, e))?;

    info!("[ops] deleted {:?}", path);
    Ok(())
}

/// Renames `item` in place. Blank or unchanged names do nothing.
///
/// An existing destination is an error; the check runs first because a
/// POSIX rename would silently replace a file.
pub fn rename(item: &FileItem, new_name: &str) -> Result<Change> {
    if new_name.trim().is_empty() {
        return Ok(Change::Unchanged("new name is empty"));
    }
    if new_name == item.name {
        return Ok(Change::Unchanged("name is unchanged"));
    }
    check_name(new_name)?;

    let source = &item.full_path;
    let parent = source
        .parent()
        .ok_or_else(|| FsError::InvalidName(item.name.clone()))?;
    let dest = parent.join(new_name);

    if !exists_no_follow(source) {
        return Err(FsError::NotFound(source.clone()));
    }
    if exists_no_follow(&dest) {
        return Err(FsError::AlreadyExists(dest));
    }

    fs::rename(source, &dest).map_err(|e| FsError::io("cannot rename", source, e))?;

    info!("[ops] renamed {:?} -> {:?}", source, dest);
    Ok(Change::Applied(dest))
}

/// Copies `source` into `dest_dir`, keeping its name, and returns the new path.
///
/// Files overwrite an existing destination. Pasting an entry into the
/// directory that already holds it is refused. Directories are copied
/// depth-first: files of each level before its subdirectories, skipping
/// dangling links. A failure midway leaves whatever was already copied in place.
pub fn paste(source: &FileItem, dest_dir: &Path) -> Result<PathBuf> {
    let src = &source.full_path;
    let meta = fs::metadata(src).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => FsError::NotFound(src.clone()),
        _ => FsError::io("cannot read", src, e),
    })?;

    let name = src
        .file_name()
        .ok_or_else(|| FsError::InvalidName(file_name_of(src)))?;
    let dest = dest_dir.join(name);

    if same_entry(src, &dest) {
        return Err(FsError::SameFile(src.clone()));
    }

    if meta.is_dir() {
        guard_not_nested(src, dest_dir)?;
        copy_dir_recursive(src, &dest, 0)?;
    } else {
        fs::copy(src, &dest).map_err(|e| FsError::io("cannot copy", src, e))?;
    }

    info!("[ops] pasted {:?} -> {:?}", src, dest);
    Ok(dest)
}

fn same_entry(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Refuses to copy a directory into itself or one of its descendants.
fn guard_not_nested(src: &Path, dest_dir: &Path) -> Result<()> {
    let src_real = fs::canonicalize(src).map_err(|e| FsError::io("cannot resolve", src, e))?;
    let dest_real =
        fs::canonicalize(dest_dir).map_err(|e| FsError::io("cannot resolve", dest_dir, e))?;

    if dest_real.starts_with(&src_real) {
        return Err(FsError::CopyIntoSelf {
            source_dir: src.to_path_buf(),
            dest: dest_dir.to_path_buf(),
        });
    }
    Ok(())
}

fn copy_dir_recursive(src: &Path, dest: &Path, depth: usize) -> Result<()> {
    if depth > MAX_COPY_DEPTH {
        return Err(FsError::DepthLimit {
            path: src.to_path_buf(),
            limit: MAX_COPY_DEPTH,
        });
    }

    fs::create_dir_all(dest).map_err(|e| FsError::io("cannot create folder", dest, e))?;

    let entries = list_directory(src)?;
    let (dirs, files): (Vec<_>, Vec<_>) = entries.into_iter().partition(|e| e.is_dir);

    for file in &files {
        if !file.full_path.exists() {
            warn!("[ops] skipping dangling link {:?}", file.full_path);
            continue;
        }
        let target = dest.join(file.full_path.file_name().unwrap_or_default());
        fs::copy(&file.full_path, &target)
            .map_err(|e| FsError::io("cannot copy", &file.full_path, e))?;
    }

    for dir in &dirs {
        let target = dest.join(dir.full_path.file_name().unwrap_or_default());
        copy_dir_recursive(&dir.full_path, &target, depth + 1)?;
    }

    debug!(
        "[ops] copied {:?}: {} files, {} dirs",
        src,
        files.len(),
        dirs.len()
    );
    Ok(())
}

#[cfg(test)]
#[path = "ops_tests.rs"]
mod tests;
