mod config;
mod drives;
mod error;
mod item;
mod lister;
mod ops;
mod tree;

pub use config::MAX_COPY_DEPTH;
pub use drives::{StaticVolumes, SystemVolumes, Volume, VolumeKind, VolumeSource, list_roots};
pub use error::{ErrorCategory, FsError, Result};
pub use item::{FileItem, file_name_of, format_size};
pub use lister::{has_subdirectories, list_directory, list_subdirectories};
pub use ops::{Change, create_folder, delete, paste, rename};
pub use tree::{DirectoryItem, Realization, find_in, find_in_mut, node_for_path, reveal};
