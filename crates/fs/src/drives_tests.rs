use super::*;

use std::fs::{create_dir, create_dir_all};

use crate::{error::FsError, tree::Realization};

struct FailingVolumes;

impl VolumeSource for FailingVolumes {
    fn volumes(&self) -> Result<Vec<Volume>> {
        Err(FsError::Enumeration("device table unavailable".into()))
    }
}

fn volume_label(mount_point: &std::path::Path) -> String {
    format!("{} (Fixed)", mount_point.display())
}

fn fixed(mount_point: PathBuf) -> Volume {
    Volume {
        label: String::new(),
        kind: VolumeKind::Fixed,
        mount_point,
    }
}

#[test]
fn display_name_cases() {
    let cases = [
        (
            Volume {
                label: String::new(),
                kind: VolumeKind::Fixed,
                mount_point: PathBuf::from("/"),
            },
            "/ (Fixed)",
        ),
        (
            Volume {
                label: "/".into(),
                kind: VolumeKind::Fixed,
                mount_point: PathBuf::from("/"),
            },
            "/ (Fixed)",
        ),
        (
            Volume {
                label: "USBSTICK".into(),
                kind: VolumeKind::Removable,
                mount_point: PathBuf::from("/media/usb"),
            },
            "/media/usb USBSTICK (Removable)",
        ),
    ];

    for (volume, expected) in cases {
        assert_eq!(volume.display_name(), expected);
    }
}

#[test]
fn single_volume_with_users_folder() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let drive = tmp.path().to_path_buf();
    create_dir_all(drive.join("Users").join("alice")).expect("create Users/alice");

    let source = StaticVolumes(vec![fixed(drive.clone())]);
    let mut roots = list_roots(&source).expect("list_roots");

    assert_eq!(roots.len(), 1);
    let root = &mut roots[0];
    assert_eq!(root.full_path, drive);
    assert_eq!(root.name, volume_label(&drive));
    assert!(root.last_modified.is_some(), "roots carry their modified time");
    assert!(root.has_unrealized_children());

    root.expand().expect("expand root");
    assert_eq!(root.children.len(), 1);

    let users = &root.children[0];
    assert_eq!(users.name, "Users");
    assert!(users.has_unrealized_children(), "Users has a subfolder");
}

#[test]
fn root_without_subdirectories_starts_empty() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    std::fs::write(tmp.path().join("only_a_file"), b"x").expect("write");

    let roots = list_roots(&StaticVolumes(vec![fixed(tmp.path().to_path_buf())])).expect("roots");
    assert_eq!(roots[0].realization(), Realization::Empty);
}

#[test]
fn unready_and_duplicate_volumes_are_skipped() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let a = tmp.path().join("a");
    create_dir(&a).expect("create a");

    let source = StaticVolumes(vec![
        fixed(a.clone()),
        fixed(tmp.path().join("not_mounted")),
        fixed(a.clone()),
    ]);

    let roots = list_roots(&source).expect("list_roots");
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].full_path, a);
}

#[test]
fn enumeration_failure_propagates_to_caller() {
    let err = list_roots(&FailingVolumes).expect_err("should fail");
    assert_eq!(err.category(), crate::error::ErrorCategory::Enumeration);
}

#[test]
fn system_volumes_never_empty() {
    let volumes = SystemVolumes.volumes().expect("system volumes");
    assert!(!volumes.is_empty());
}
