// src/fs/entry.rs
//! Listing entries and configured location specs.

use std::{
    fmt,
    path::{Component, Path, PathBuf},
};

use serde::{Deserialize, Deserializer};

/// One child of a listed directory (or one expanded default location).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Final path component, used for display and sorting
    pub name: String,
    /// Absolute path handed to dispatch
    pub path: PathBuf,
    /// Whether the path is a directory (symlinks followed)
    pub is_dir: bool,
}

impl Entry {
    /// Build an entry for `path`, inspecting the filesystem for directory-ness.
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let is_dir = path.is_dir();
        Self { name, path, is_dir }
    }
}

/// Names starting with `.` are never shown.
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}

/// A configured default location, relative to the storage root.
///
/// `Movies` names a single location. `Download/*` names every visible child
/// of `Download`; a bare `*` names the children of the root itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationSpec {
    Literal(PathBuf),
    ChildrenOf(PathBuf),
}

impl LocationSpec {
    const WILDCARD: &'static str = "/*";

    pub fn parse(spec: &str) -> Self {
        // Bare `*` is the root's own children, not a literal `root/*`.
        if spec == "*" {
            LocationSpec::ChildrenOf(PathBuf::new())
        } else if let Some(dir) = spec.strip_suffix(Self::WILDCARD) {
            LocationSpec::ChildrenOf(PathBuf::from(dir))
        } else {
            LocationSpec::Literal(PathBuf::from(spec))
        }
    }

    /// The directory (or literal location) this spec points at under `root`.
    ///
    /// Leading `/` (or a drive prefix) is dropped so the result never
    /// escapes `root`.
    pub fn base(&self, root: &Path) -> PathBuf {
        let rel = match self {
            LocationSpec::Literal(rel) | LocationSpec::ChildrenOf(rel) => rel,
        };
        rel.components()
            .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
            .fold(root.to_path_buf(), |acc, c| acc.join(c))
    }
}

impl From<&str> for LocationSpec {
    fn from(spec: &str) -> Self {
        LocationSpec::parse(spec)
    }
}

impl fmt::Display for LocationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationSpec::Literal(rel) => write!(f, "{}", rel.display()),
            LocationSpec::ChildrenOf(rel) if rel.as_os_str().is_empty() => write!(f, "*"),
            LocationSpec::ChildrenOf(rel) => write!(f, "{}/*", rel.display()),
        }
    }
}

impl<'de> Deserialize<'de> for LocationSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(LocationSpec::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_literal_and_wildcard_specs() {
        assert_eq!(
            LocationSpec::parse("Movies"),
            LocationSpec::Literal(PathBuf::from("Movies"))
        );
        assert_eq!(
            LocationSpec::parse("Download/*"),
            LocationSpec::ChildrenOf(PathBuf::from("Download"))
        );
        assert_eq!(
            LocationSpec::parse("*"),
            LocationSpec::ChildrenOf(PathBuf::new())
        );
    }

    #[test]
    fn only_a_trailing_marker_is_a_wildcard() {
        assert_eq!(
            LocationSpec::parse("a/*/b"),
            LocationSpec::Literal(PathBuf::from("a/*/b"))
        );
    }

    #[test]
    fn bare_star_lists_root_children() {
        let spec = LocationSpec::parse("*");
        assert_eq!(spec.base(Path::new("/sd")), PathBuf::from("/sd"));
        assert!(matches!(spec, LocationSpec::ChildrenOf(_)));
    }

    #[test]
    fn leading_slash_stays_under_root() {
        let root = Path::new("/sd");
        assert_eq!(LocationSpec::parse("/Movies").base(root), PathBuf::from("/sd/Movies"));
        assert_eq!(
            LocationSpec::parse("/Download/*").base(root),
            PathBuf::from("/sd/Download")
        );
    }

    #[test]
    fn display_round_trips_config_text() {
        for raw in ["Movies", "Download/*", "*"] {
            assert_eq!(LocationSpec::parse(raw).to_string(), raw);
        }
    }

    #[test]
    fn hidden_names() {
        assert!(is_hidden_name(".git"));
        assert!(!is_hidden_name("notes.txt"));
    }
}
