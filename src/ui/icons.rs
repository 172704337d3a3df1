// src/ui/icons.rs
//! Icons and kind labels for listing entries.

use crate::fs::{Entry, FileCategory};

const FOLDER: &str = "\u{f07b}";

/// Nerd-font glyph for `entry`.
pub fn icon_for(entry: &Entry, category: FileCategory) -> &'static str {
    if entry.is_dir {
        return FOLDER;
    }
    match category {
        FileCategory::Audio => "\u{f1c7}",
        FileCategory::Image => "\u{f1c5}",
        FileCategory::Video => "\u{f1c8}",
        FileCategory::Document => "\u{f15c}",
        FileCategory::Binary => "\u{f1c6}",
    }
}

/// Human-readable kind, e.g. "Folder" or "Video".
pub fn kind_label(entry: &Entry, category: FileCategory) -> String {
    if entry.is_dir {
        "Folder".to_string()
    } else {
        category.to_string()
    }
}
