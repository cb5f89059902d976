use super::*;

use std::fs::{create_dir, create_dir_all, write};

use crate::error::ErrorCategory;

fn item_for(path: &Path) -> FileItem {
    let meta = fs::metadata(path).expect("metadata");
    FileItem::from_metadata(path.to_path_buf(), &meta)
}

/// Relative path and byte length of every file under `root`, sorted.
fn file_sizes(root: &Path) -> Vec<(PathBuf, u64)> {
    fn walk(root: &Path, dir: &Path, out: &mut Vec<(PathBuf, u64)>) {
        for entry in fs::read_dir(dir).expect("read_dir") {
            let entry = entry.expect("entry");
            let path = entry.path();
            let meta = entry.metadata().expect("metadata");
            if meta.is_dir() {
                walk(root, &path, out);
            } else {
                let rel = path.strip_prefix(root).unwrap().to_path_buf();
                out.push((rel, meta.len()));
            }
        }
    }

    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.sort();
    out
}

#[test]
fn create_folder_then_list_contains_it() {
    let tmp = tempfile::tempdir().expect("create temp dir");

    let change = create_folder(tmp.path(), "X").expect("create_folder");
    assert_eq!(change, Change::Applied(tmp.path().join("X")));

    let items = list_directory(tmp.path()).expect("list");
    assert!(items.iter().any(|i| i.name == "X" && i.is_dir));
}

#[test]
fn create_folder_blank_names_do_nothing() {
    let tmp = tempfile::tempdir().expect("create temp dir");

    for name in ["", "   ", "\t"] {
        let change = create_folder(tmp.path(), name).expect("blank name is not an error");
        assert!(matches!(change, Change::Unchanged(_)), "{name:?} -> {change:?}");
    }

    assert!(list_directory(tmp.path()).expect("list").is_empty());
}

#[test]
fn create_folder_rejects_existing_and_invalid_names() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    create_dir(tmp.path().join("taken")).expect("create taken");

    let err = create_folder(tmp.path(), "taken").expect_err("exists");
    assert!(matches!(err, FsError::AlreadyExists(_)), "got {err:?}");

    for bad in [".", "..", "a/b", "trailing/", "/abs"] {
        let err = create_folder(tmp.path(), bad).expect_err("invalid name");
        assert!(matches!(err, FsError::InvalidName(_)), "{bad:?} -> {err:?}");
        assert_eq!(err.category(), ErrorCategory::Io);
    }
}

#[test]
fn create_folder_in_missing_parent_fails() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let err = create_folder(&tmp.path().join("missing"), "child").expect_err("no parent");
    assert!(matches!(err, FsError::Io { .. }), "got {err:?}");
}

#[test]
fn delete_directory_removes_contents() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let victim = tmp.path().join("victim");
    create_dir_all(victim.join("inner")).expect("create victim/inner");
    write(victim.join("a.txt"), b"a").expect("write");
    write(victim.join("inner").join("b.txt"), b"b").expect("write");

    delete(&item_for(&victim)).expect("delete");

    assert!(!victim.exists());
    let items = list_directory(tmp.path()).expect("list");
    assert!(items.iter().all(|i| i.name != "victim"));
}

#[test]
fn delete_file_and_missing_target() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let file = tmp.path().join("f.txt");
    write(&file, b"f").expect("write");

    let item = item_for(&file);
    delete(&item).expect("delete file");
    assert!(!file.exists());

    let err = delete(&item).expect_err("already gone");
    assert!(matches!(err, FsError::NotFound(_)), "got {err:?}");
}

#[cfg(unix)]
#[test]
fn delete_symlink_keeps_target() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let real = tmp.path().join("real");
    create_dir(&real).expect("create real");
    write(real.join("keep.txt"), b"k").expect("write");
    let link = tmp.path().join("link");
    std::os::unix::fs::symlink(&real, &link).expect("symlink");

    delete(&item_for(&link)).expect("delete link");

    assert!(fs::symlink_metadata(&link).is_err());
    assert!(real.join("keep.txt").exists());
}

#[test]
fn rename_noops_touch_nothing() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let file = tmp.path().join("same.txt");
    write(&file, b"s").expect("write");
    let item = item_for(&file);

    for name in ["", "  ", "same.txt"] {
        let change = rename(&item, name).expect("no-op");
        assert!(matches!(change, Change::Unchanged(_)), "{name:?} -> {change:?}");
    }
    assert!(file.exists());
}

#[test]
fn rename_moves_file_and_directory() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let file = tmp.path().join("old.txt");
    write(&file, b"data").expect("write");
    let dir = tmp.path().join("olddir");
    create_dir(&dir).expect("create");

    let change = rename(&item_for(&file), "new.txt").expect("rename file");
    assert_eq!(change, Change::Applied(tmp.path().join("new.txt")));
    assert!(!file.exists());
    assert_eq!(fs::read(tmp.path().join("new.txt")).expect("read"), b"data");

    rename(&item_for(&dir), "newdir").expect("rename dir");
    assert!(tmp.path().join("newdir").is_dir());
}

#[test]
fn rename_refuses_to_overwrite() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let a = tmp.path().join("a.txt");
    let b = tmp.path().join("b.txt");
    write(&a, b"a").expect("write a");
    write(&b, b"bbb").expect("write b");

    let err = rename(&item_for(&a), "b.txt").expect_err("destination exists");
    assert!(matches!(err, FsError::AlreadyExists(_)), "got {err:?}");
    assert_eq!(fs::read(&b).expect("read b"), b"bbb", "b untouched");
    assert!(a.exists());
}

#[test]
fn paste_file_overwrites_existing() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let src_dir = tmp.path().join("src");
    let dest_dir = tmp.path().join("dest");
    create_dir(&src_dir).expect("create src");
    create_dir(&dest_dir).expect("create dest");

    let file = src_dir.join("report.txt");
    write(&file, b"fresh contents").expect("write");
    write(dest_dir.join("report.txt"), b"old").expect("write stale");

    let dest = paste(&item_for(&file), &dest_dir).expect("paste");
    assert_eq!(dest, dest_dir.join("report.txt"));
    assert_eq!(fs::read(&dest).expect("read"), b"fresh contents");
}

#[test]
fn paste_file_onto_itself_is_rejected() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let file = tmp.path().join("self.txt");
    write(&file, b"precious").expect("write");

    let err = paste(&item_for(&file), tmp.path()).expect_err("same file");
    assert!(matches!(err, FsError::SameFile(_)), "got {err:?}");
    assert_eq!(fs::read(&file).expect("read"), b"precious");
}

#[test]
fn paste_twice_uses_same_source() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let src = tmp.path().join("A");
    create_dir_all(src.join("sub")).expect("create A/sub");
    write(src.join("one.txt"), b"1").expect("write");
    write(src.join("sub").join("two.txt"), b"22").expect("write");

    let b = tmp.path().join("B");
    let c = tmp.path().join("C");
    create_dir(&b).expect("create B");
    create_dir(&c).expect("create C");

    let item = item_for(&src);
    paste(&item, &b).expect("paste into B");
    paste(&item, &c).expect("paste into C");

    let expected = file_sizes(&src);
    assert_eq!(file_sizes(&b.join("A")), expected);
    assert_eq!(file_sizes(&c.join("A")), expected);
}

#[test]
fn recursive_copy_preserves_structure_and_lengths() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let src = tmp.path().join("S");

    // S/
    //   top.bin          (100 bytes)
    //   empty/
    //   x/
    //     mid.txt        (5 bytes)
    //     y/
    //       z/
    //         deep.dat   (2048 bytes)
    create_dir_all(src.join("x").join("y").join("z")).expect("create tree");
    create_dir(src.join("empty")).expect("create empty");
    write(src.join("top.bin"), vec![7u8; 100]).expect("write");
    write(src.join("x").join("mid.txt"), b"hello").expect("write");
    write(src.join("x").join("y").join("z").join("deep.dat"), vec![1u8; 2048]).expect("write");

    let dest_dir = tmp.path().join("D");
    create_dir(&dest_dir).expect("create D");

    let copied = paste(&item_for(&src), &dest_dir).expect("paste");
    assert_eq!(copied, dest_dir.join("S"));
    assert_eq!(file_sizes(&copied), file_sizes(&src));
    assert!(copied.join("empty").is_dir(), "empty directories are copied");
}

#[test]
fn paste_directory_into_itself_is_rejected() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let src = tmp.path().join("loop");
    create_dir_all(src.join("inside")).expect("create loop/inside");

    let item = item_for(&src);
    for dest in [src.clone(), src.join("inside")] {
        let err = paste(&item, &dest).expect_err("nested destination");
        assert!(matches!(err, FsError::CopyIntoSelf { .. }), "{dest:?} -> {err:?}");
    }
    assert!(!src.join("loop").exists());
    assert!(!src.join("inside").join("loop").exists());
}

#[test]
fn paste_directory_into_own_parent_is_rejected() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let docs = tmp.path().join("docs");
    create_dir_all(docs.join("nested")).expect("create docs/nested");
    write(docs.join("a.txt"), b"hello world").expect("write");
    write(docs.join("nested").join("b.txt"), b"bee").expect("write");
    let before = file_sizes(&docs);

    let err = paste(&item_for(&docs), tmp.path()).expect_err("own parent");
    assert!(matches!(err, FsError::SameFile(_)), "got {err:?}");

    assert_eq!(file_sizes(&docs), before);
    assert_eq!(fs::read(docs.join("a.txt")).expect("read"), b"hello world");
}

#[cfg(unix)]
#[test]
fn recursive_copy_skips_dangling_links() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let src = tmp.path().join("S");
    create_dir_all(src.join("sub")).expect("create S/sub");
    write(src.join("keep.txt"), b"keep").expect("write");
    write(src.join("sub").join("later.txt"), b"later").expect("write");
    std::os::unix::fs::symlink(tmp.path().join("nowhere"), src.join("broken"))
        .expect("symlink");

    let dest_dir = tmp.path().join("D");
    create_dir(&dest_dir).expect("create D");

    let copied = paste(&item_for(&src), &dest_dir).expect("paste");
    assert_eq!(fs::read(copied.join("keep.txt")).expect("read"), b"keep");
    assert_eq!(
        fs::read(copied.join("sub").join("later.txt")).expect("read"),
        b"later"
    );
    assert!(fs::symlink_metadata(copied.join("broken")).is_err());
}

#[test]
fn paste_missing_source_is_not_found() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let gone = tmp.path().join("gone.txt");
    write(&gone, b"g").expect("write");
    let item = item_for(&gone);
    fs::remove_file(&gone).expect("remove");

    let err = paste(&item, tmp.path()).expect_err("source vanished");
    assert!(matches!(err, FsError::NotFound(_)), "got {err:?}");
}

#[test]
fn copy_stops_at_depth_limit() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let src = tmp.path().join("src");
    create_dir_all(src.join("child")).expect("create src/child");

    let dest = tmp.path().join("dest");
    let err = copy_dir_recursive(&src, &dest, MAX_COPY_DEPTH).expect_err("child exceeds limit");
    assert!(matches!(err, FsError::DepthLimit { .. }), "got {err:?}");
    assert!(dest.is_dir(), "partial copy is left in place");
}
