use super::*;
use serial_test::serial;

#[test]
#[serial]
fn start_dir_prefers_env_override() {
    let tmp = tempfile::tempdir().expect("create temp dir");

    unsafe { std::env::set_var(PROGRAM_START_DIR, tmp.path()) };
    let dir = default_start_dir();
    unsafe { std::env::remove_var(PROGRAM_START_DIR) };

    assert_eq!(dir, tmp.path());
}

#[test]
#[serial]
fn start_dir_ignores_empty_override() {
    unsafe { std::env::set_var(PROGRAM_START_DIR, "") };
    let dir = default_start_dir();
    unsafe { std::env::remove_var(PROGRAM_START_DIR) };

    assert!(!dir.as_os_str().is_empty());
}

#[test]
#[serial]
fn log_file_env_cases() {
    let cases: &[(Option<&str>, Option<PathBuf>)] = &[
        (None, None),
        (Some(""), None),
        (Some("/tmp/burrow.log"), Some(PathBuf::from("/tmp/burrow.log"))),
    ];

    for (value, expected) in cases {
        match value {
            Some(v) => unsafe { std::env::set_var(PROGRAM_LOG_FILE, v) },
            None => unsafe { std::env::remove_var(PROGRAM_LOG_FILE) },
        }

        let got = log_file_from_env();
        assert_eq!(&got, expected, "env {:?} should yield {:?}", value, expected);
    }

    unsafe { std::env::remove_var(PROGRAM_LOG_FILE) };
}

#[test]
fn fallback_root_is_absolute() {
    assert!(fallback_root().is_absolute());
}
