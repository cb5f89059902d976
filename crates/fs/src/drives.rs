use std::{
    collections::HashSet,
    fmt,
    path::PathBuf,
};

use burrow_runtime::fallback_root;
use log::{debug, warn};
use sysinfo::Disks;

use crate::{
    error::Result,
    tree::{DirectoryItem, node_for_path},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeKind {
    Fixed,
    Removable,
}

impl fmt::Display for VolumeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VolumeKind::Fixed => f.write_str("Fixed"),
            VolumeKind::Removable => f.write_str("Removable"),
        }
    }
}

/// A mounted volume as reported by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volume {
    pub label: String,
    pub kind: VolumeKind,
    pub mount_point: PathBuf,
}

impl Volume {
    /// Tree label: mount point, the volume label when it says something
    /// different, and the volume type.
    pub fn display_name(&self) -> String {
        let mount = self.mount_point.display().to_string();
        if self.label.is_empty() || self.label == mount {
            format!("{mount} ({})", self.kind)
        } else {
            format!("{mount} {} ({})", self.label, self.kind)
        }
    }
}

/// Where volume roots come from.
pub trait VolumeSource {
    fn volumes(&self) -> Result<Vec<Volume>>;
}

/// Volumes mounted on this machine.
#[derive(Debug, Default)]
pub struct SystemVolumes;

impl VolumeSource for SystemVolumes {
    fn volumes(&self) -> Result<Vec<Volume>> {
        let disks = Disks::new_with_refreshed_list();

        let mut volumes: Vec<Volume> = disks
            .list()
            .iter()
            .map(|disk| Volume {
                label: disk.name().to_string_lossy().into_owned(),
                kind: if disk.is_removable() {
                    VolumeKind::Removable
                } else {
                    VolumeKind::Fixed
                },
                mount_point: disk.mount_point().to_path_buf(),
            })
            .collect();

        if volumes.is_empty() {
            debug!("[drives] platform reported no volumes, using filesystem root");
            volumes.push(Volume {
                label: String::new(),
                kind: VolumeKind::Fixed,
                mount_point: fallback_root(),
            });
        }

        Ok(volumes)
    }
}

/// A fixed list of volumes, for front ends that browse a chosen directory
/// as if it were a drive.
#[derive(Debug, Clone, Default)]
pub struct StaticVolumes(pub Vec<Volume>);

impl VolumeSource for StaticVolumes {
    fn volumes(&self) -> Result<Vec<Volume>> {
        Ok(self.0.clone())
    }
}

/// Builds one tree root per ready volume.
///
/// Volumes whose mount point is not an accessible directory are skipped, and
/// a mount point reported twice yields a single root.
pub fn list_roots(source: &dyn VolumeSource) -> Result<Vec<DirectoryItem>> {
    let mut seen = HashSet::new();
    let mut roots = Vec::new();

    for volume in source.volumes()? {
        if !volume.mount_point.is_dir() {
            warn!("[drives] skipping {:?}: not ready", volume.mount_point);
            continue;
        }
        if !seen.insert(volume.mount_point.clone()) {
            continue;
        }

        let mut root = node_for_path(&volume.mount_point);
        root.name = volume.display_name();
        roots.push(root);
    }

    debug!("[drives] {} roots", roots.len());
    Ok(roots)
}

#[cfg(test)]
#[path = "drives_tests.rs"]
mod tests;
