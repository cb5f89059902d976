use std::path::PathBuf;

pub const PROGRAM_NAME: &str = "burrow";
pub const PROGRAM_LOG_LEVEL: &str = "BURROW_LOG_LEVEL";
/// When set, log lines are appended to this file instead of stderr.
pub const PROGRAM_LOG_FILE: &str = "BURROW_LOG_FILE";
/// Overrides the directory an interactive session starts in.
pub const PROGRAM_START_DIR: &str = "BURROW_START_DIR";

/// Directory an interactive session opens when none is given.
///
/// Resolution order: `BURROW_START_DIR`, the user's home directory,
/// then the current working directory.
pub fn default_start_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(PROGRAM_START_DIR)
        && !dir.is_empty()
    {
        return PathBuf::from(dir);
    }

    dirs::home_dir().unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Filesystem root used when the platform reports no mounted volumes.
pub fn fallback_root() -> PathBuf {
    #[cfg(windows)]
    {
        std::env::var_os("SystemDrive")
            .map(|d| PathBuf::from(d).join("\\"))
            .unwrap_or_else(|| PathBuf::from("C:\\"))
    }
    #[cfg(not(windows))]
    {
        PathBuf::from("/")
    }
}

pub fn log_file_from_env() -> Option<PathBuf> {
    std::env::var_os(PROGRAM_LOG_FILE)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
