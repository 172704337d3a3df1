// src/fs/detection.rs
//! MIME type resolution by extension, plus icon categories.

use std::{fmt, fs, path::Path};

use infer::{Infer, MatcherType};

/// Returned whenever a name has no usable extension.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Extension-to-MIME lookup table.
pub trait MimeTypeProvider {
    /// Look up `extension` (without the dot).
    fn mime_for_extension(&self, extension: &str) -> Option<String>;
}

/// The built-in extension table shipped with `mime_guess`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemMimeTable;

impl MimeTypeProvider for SystemMimeTable {
    fn mime_for_extension(&self, extension: &str) -> Option<String> {
        mime_guess::from_ext(extension)
            .first_raw()
            .map(str::to_string)
    }
}

/// Resolves filenames to MIME types through a [`MimeTypeProvider`].
#[derive(Debug, Clone, Default)]
pub struct MimeResolver<P = SystemMimeTable> {
    provider: P,
}

impl<P: MimeTypeProvider> MimeResolver<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Resolve `name` to a MIME type. Never empty; unknown names get
    /// [`FALLBACK_MIME`].
    pub fn resolve(&self, name: &str) -> String {
        extension_of(name)
            .and_then(|ext| self.provider.mime_for_extension(ext))
            .filter(|mime| !mime.is_empty())
            .unwrap_or_else(|| FALLBACK_MIME.to_string())
    }
}

/// The segment after the last `.`; `archive.tar.gz` gives `gz`.
///
/// Trailing dots are ignored, so `file.` and `file..` have no extension.
pub fn extension_of(name: &str) -> Option<&str> {
    let trimmed = name.trim_end_matches('.');
    match trimmed.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => Some(ext),
        _ => None,
    }
}

/// High-level file categories.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FileCategory {
    Image,
    Audio,
    Video,
    Document,
    Binary,
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FileCategory::Image => "Image",
            FileCategory::Audio => "Audio",
            FileCategory::Video => "Video",
            FileCategory::Document => "Document",
            FileCategory::Binary => "Binary",
        };
        write!(f, "{}", s)
    }
}

/// Map a MIME type's top-level type to a category.
pub fn category_for_mime(mime: &str) -> FileCategory {
    if mime == FALLBACK_MIME {
        return FileCategory::Binary;
    }
    match mime.split('/').next().unwrap_or("application") {
        "image" => FileCategory::Image,
        "audio" => FileCategory::Audio,
        "video" => FileCategory::Video,
        "text" | "application" => FileCategory::Document,
        _ => FileCategory::Binary,
    }
}

/// Pick an icon category for the file at `path` whose resolved type is `mime`.
///
/// When the extension told us nothing, sniff the magic number instead. This
/// only decides what icon to draw; dispatch always uses `mime`. Only regular
/// files are sniffed; opening a FIFO or device would block.
pub fn detect_category(path: &Path, mime: &str) -> FileCategory {
    if mime != FALLBACK_MIME {
        return category_for_mime(mime);
    }
    if !fs::metadata(path).map(|m| m.is_file()).unwrap_or(false) {
        return FileCategory::Binary;
    }

    match Infer::new().get_from_path(path) {
        Ok(Some(kind)) => match kind.matcher_type() {
            MatcherType::Image => FileCategory::Image,
            MatcherType::Audio => FileCategory::Audio,
            MatcherType::Video => FileCategory::Video,
            MatcherType::Doc | MatcherType::Text => FileCategory::Document,
            _ => FileCategory::Binary,
        },
        _ => FileCategory::Binary,
    }
}
