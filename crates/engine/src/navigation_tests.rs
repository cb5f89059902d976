use super::*;

#[test]
fn drive_list_view_cannot_navigate_up() {
    let nav = NavigationState::default();
    assert!(nav.current_path().is_none());
    assert!(!nav.can_navigate_up());
    assert!(!nav.can_paste());
}

#[test]
fn navigate_up_enabled_only_below_a_root() {
    let cases: &[(&str, Option<&str>)] = &[
        ("/", None),
        ("/home", Some("/")),
        ("/home/alice/docs", Some("/home/alice")),
    ];

    for (current, parent) in cases {
        let mut nav = NavigationState::default();
        nav.set_current_path(PathBuf::from(current));
        assert_eq!(nav.parent_path(), parent.map(Path::new), "parent of {current}");
        assert_eq!(nav.can_navigate_up(), parent.is_some(), "can_navigate_up at {current}");
    }
}

#[test]
fn clipboard_holds_latest_item_and_survives_selection_changes() {
    let mut nav = NavigationState::default();
    let a = FileItem::file(PathBuf::from("/tmp/a.txt"), 1, None);
    let b = FileItem::file(PathBuf::from("/tmp/b.txt"), 2, None);

    nav.remember(a);
    nav.remember(b.clone());
    nav.clear_selection();

    assert_eq!(nav.clipboard(), Some(&b));
    assert!(!nav.can_paste(), "no current directory yet");

    nav.set_current_path(PathBuf::from("/tmp"));
    assert!(nav.can_paste());
}
