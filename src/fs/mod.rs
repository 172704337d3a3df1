// src/fs/mod.rs
//! Filesystem module - listing, default locations, and type detection.

pub mod access;
pub mod browser;
pub mod defaults;
pub mod detection;
pub mod entry;

// Re-export commonly used types
pub use access::{check_storage_access, StorageAccess};
pub use browser::{list_entries, resolve_entries, sort_entries, tail_path};
pub use defaults::expand_defaults;
pub use detection::{
    category_for_mime, detect_category, FileCategory, MimeResolver, MimeTypeProvider,
    SystemMimeTable, FALLBACK_MIME,
};
pub use entry::{Entry, LocationSpec};
