use super::*;

use std::path::Path;

#[test]
fn success_messages_per_operation() {
    let cases: &[(OpKind, &str, &str)] = &[
        (OpKind::LoadDrives, "", "Drives loaded successfully"),
        (OpKind::LoadDirectory, "4", "Loaded 4 items"),
        (OpKind::CreateFolder, "X", "Folder 'X' created successfully"),
        (OpKind::Delete, "old.txt", "'old.txt' deleted successfully"),
        (OpKind::Rename, "new.txt", "Item renamed to 'new.txt' successfully"),
        (OpKind::Copy, "a.txt", "'a.txt' copied to clipboard"),
        (OpKind::Paste, "a.txt", "'a.txt' pasted successfully"),
        (OpKind::Navigate, "home", "Moved to 'home'"),
    ];

    for (op, subject, expected) in cases {
        let ev = StatusEvent::succeeded(*op, None, *subject);
        assert_eq!(ev.to_string(), *expected, "{op:?}");
        assert!(ev.is_success());
    }
}

#[test]
fn failure_messages_carry_prefix_and_category() {
    let err = FsError::AlreadyExists(Path::new("/tmp/X").to_path_buf());
    let cases: &[(OpKind, &str)] = &[
        (OpKind::CreateFolder, "Error creating folder: "),
        (OpKind::Delete, "Error deleting item: "),
        (OpKind::Rename, "Error renaming item: "),
        (OpKind::Paste, "Error pasting item: "),
        (OpKind::LoadDirectory, "Error loading files: "),
        (OpKind::ExpandNode, "Error loading directory: "),
    ];

    for (op, prefix) in cases {
        let ev = StatusEvent::failed(*op, None, &err);
        let text = ev.to_string();
        assert!(text.starts_with(prefix), "{op:?}: {text}");
        assert!(text.ends_with("'/tmp/X' already exists"), "{op:?}: {text}");
        assert!(ev.is_failure());
    }

    let enum_err = FsError::Enumeration("no device table".into());
    let ev = StatusEvent::failed(OpKind::LoadDrives, None, &enum_err);
    assert_eq!(
        ev.outcome,
        Outcome::Failed {
            category: ErrorCategory::Enumeration,
            message: "cannot enumerate volumes: no device table".into(),
        }
    );
}

#[test]
fn skipped_has_one_consistent_message() {
    let ev = StatusEvent::skipped(OpKind::Rename, None, "name is unchanged");
    assert_eq!(ev.to_string(), "Nothing to do: name is unchanged");
    assert!(ev.is_skipped());
}

#[test]
fn serializes_flat_with_status_tag() {
    let ev = StatusEvent::succeeded(OpKind::Paste, Some("/tmp/B/a.txt".into()), "a.txt");
    let json = serde_json::to_value(&ev).expect("serialize");

    assert_eq!(json["op"], "paste");
    assert_eq!(json["target"], "/tmp/B/a.txt");
    assert_eq!(json["status"], "succeeded");
    assert_eq!(json["subject"], "a.txt");
}
