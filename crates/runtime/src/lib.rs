mod config;
pub mod logging;

pub use config::{
    PROGRAM_LOG_FILE, PROGRAM_LOG_LEVEL, PROGRAM_NAME, PROGRAM_START_DIR, default_start_dir,
    fallback_root,
};

pub use logging::init;
