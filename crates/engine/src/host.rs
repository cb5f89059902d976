//! Contracts for the collaborators a front end plugs into [`crate::Explorer`].

use std::{io, path::Path};

use log::{info, warn};

use crate::status::StatusEvent;

/// Interactive questions asked before destructive or naming operations.
pub trait Prompt {
    /// Yes/no confirmation. Returning `false` cancels the operation.
    fn confirm(&mut self, message: &str) -> bool;

    /// Free-text input with a suggested value. `None` means cancelled.
    fn prompt_text(&mut self, title: &str, default_value: &str) -> Option<String>;
}

/// Receives every status event the explorer produces.
pub trait StatusSink {
    fn report(&mut self, event: &StatusEvent);
}

impl<F: FnMut(&StatusEvent)> StatusSink for F {
    fn report(&mut self, event: &StatusEvent) {
        self(event)
    }
}

/// Notified whenever a directory listing is loaded as the current folder.
pub trait FolderObserver {
    fn on_folder_selected(&mut self, path: &Path);
}

impl<F: FnMut(&Path)> FolderObserver for F {
    fn on_folder_selected(&mut self, path: &Path) {
        self(path)
    }
}

/// Hands a file to the platform's default application.
pub trait FileLauncher {
    fn open_with_default_application(&mut self, path: &Path) -> io::Result<()>;
}

/// Declines every confirmation and cancels every text prompt.
#[derive(Debug, Default)]
pub struct DeclinePrompt;

impl Prompt for DeclinePrompt {
    fn confirm(&mut self, _message: &str) -> bool {
        false
    }

    fn prompt_text(&mut self, _title: &str, _default_value: &str) -> Option<String> {
        None
    }
}

/// Writes status events to the log.
#[derive(Debug, Default)]
pub struct LogSink;

impl StatusSink for LogSink {
    fn report(&mut self, event: &StatusEvent) {
        if event.is_failure() {
            warn!("[status] {event}");
        } else {
            info!("[status] {event}");
        }
    }
}

/// Launcher for hosts that cannot start applications.
#[derive(Debug, Default)]
pub struct NoLauncher;

impl FileLauncher for NoLauncher {
    fn open_with_default_application(&mut self, path: &Path) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            format!("no application launcher for {}", path.display()),
        ))
    }
}
