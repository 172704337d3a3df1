// src/fs/access.rs
//! Storage access check run by the host before the first listing.

use std::{fs, io, path::Path};

/// Result of probing the storage root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageAccess {
    Granted,
    Denied { reason: String },
}

impl StorageAccess {
    pub fn is_granted(&self) -> bool {
        matches!(self, StorageAccess::Granted)
    }
}

/// Check that `root` is a directory we are allowed to list.
pub fn check_storage_access(root: &Path) -> StorageAccess {
    match fs::read_dir(root) {
        Ok(_) => StorageAccess::Granted,
        Err(err) => {
            let reason = match err.kind() {
                io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading {}", root.display())
                }
                io::ErrorKind::NotFound => format!("{} does not exist", root.display()),
                _ => format!("cannot read {}: {}", root.display(), err),
            };
            StorageAccess::Denied { reason }
        }
    }
}
