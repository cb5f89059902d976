mod explorer;
pub mod host;
mod navigation;
mod status;

pub use explorer::Explorer;
pub use host::{DeclinePrompt, FileLauncher, FolderObserver, LogSink, NoLauncher, Prompt, StatusSink};
pub use navigation::NavigationState;
pub use status::{OpKind, Outcome, StatusEvent};
