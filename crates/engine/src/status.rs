use std::{fmt, path::PathBuf};

use burrow_fs::{ErrorCategory, FsError};
use serde::Serialize;

/// Which facade operation produced a status event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpKind {
    LoadDrives,
    LoadDirectory,
    ExpandNode,
    Navigate,
    CreateFolder,
    Delete,
    Rename,
    Copy,
    Paste,
    Open,
}

impl OpKind {
    /// Prefix used in failure messages, e.g. "Error deleting item".
    fn failure_prefix(self) -> &'static str {
        match self {
            OpKind::LoadDrives => "Error loading drives",
            OpKind::LoadDirectory => "Error loading files",
            OpKind::ExpandNode => "Error loading directory",
            OpKind::Navigate => "Error navigating",
            OpKind::CreateFolder => "Error creating folder",
            OpKind::Delete => "Error deleting item",
            OpKind::Rename => "Error renaming item",
            OpKind::Copy => "Error copying item",
            OpKind::Paste => "Error pasting item",
            OpKind::Open => "Error opening file",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// `subject` is the affected name, or the entry count for loads.
    Succeeded { subject: String },
    /// Nothing was attempted.
    Skipped { reason: String },
    Failed {
        category: ErrorCategory,
        message: String,
    },
}

/// Structured result of one facade operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusEvent {
    pub op: OpKind,
    pub target: Option<PathBuf>,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl StatusEvent {
    pub fn succeeded(op: OpKind, target: Option<PathBuf>, subject: impl Into<String>) -> Self {
        Self {
            op,
            target,
            outcome: Outcome::Succeeded {
                subject: subject.into(),
            },
        }
    }

    pub fn skipped(op: OpKind, target: Option<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            op,
            target,
            outcome: Outcome::Skipped {
                reason: reason.into(),
            },
        }
    }

    pub fn failed(op: OpKind, target: Option<PathBuf>, err: &FsError) -> Self {
        Self {
            op,
            target,
            outcome: Outcome::Failed {
                category: err.category(),
                message: err.to_string(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Succeeded { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self.outcome, Outcome::Skipped { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, Outcome::Failed { .. })
    }
}

impl fmt::Display for StatusEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Succeeded { subject } => match self.op {
                OpKind::LoadDrives => f.write_str("Drives loaded successfully"),
                OpKind::LoadDirectory => write!(f, "Loaded {subject} items"),
                OpKind::ExpandNode => write!(f, "'{subject}' expanded"),
                OpKind::Navigate => write!(f, "Moved to '{subject}'"),
                OpKind::CreateFolder => write!(f, "Folder '{subject}' created successfully"),
                OpKind::Delete => write!(f, "'{subject}' deleted successfully"),
                OpKind::Rename => write!(f, "Item renamed to '{subject}' successfully"),
                OpKind::Copy => write!(f, "'{subject}' copied to clipboard"),
                OpKind::Paste => write!(f, "'{subject}' pasted successfully"),
                OpKind::Open => write!(f, "'{subject}' opened"),
            },
            Outcome::Skipped { reason } => write!(f, "Nothing to do: {reason}"),
            Outcome::Failed { message, .. } => {
                write!(f, "{}: {message}", self.op.failure_prefix())
            }
        }
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
