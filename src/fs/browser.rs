// src/fs/browser.rs
//! Directory listing, ordering, and the listing entry point.

use std::{cmp::Ordering, fs, path::Path};

use tracing::debug;

use super::{
    defaults::expand_defaults,
    entry::{is_hidden_name, Entry, LocationSpec},
};

/// List the visible children of `dir`.
///
/// A path that is missing, unreadable, or not a directory lists as empty.
pub fn list_entries(dir: &Path) -> Vec<Entry> {
    let read = match fs::read_dir(dir) {
        Ok(read) => read,
        Err(err) => {
            debug!(path = %dir.display(), error = %err, "listing failed, treating as empty");
            return Vec::new();
        }
    };

    read.filter_map(Result::ok)
        .filter(|e| !is_hidden_name(&e.file_name().to_string_lossy()))
        .map(|e| Entry::from_path(e.path()))
        .collect()
}

/// Directories first, then by name (codepoint order), then by path.
pub fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    b.is_dir
        .cmp(&a.is_dir)
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.path.cmp(&b.path))
}

/// Order a listing for display.
pub fn sort_entries(mut entries: Vec<Entry>) -> Vec<Entry> {
    entries.sort_by(compare_entries);
    entries
}

/// Produce the sorted listing for an explicit path, or for the configured
/// default locations under `root` when no path is given.
///
/// The explicit path is listed as-is; it is not checked against `root`.
pub fn resolve_entries(explicit: Option<&Path>, root: &Path, specs: &[LocationSpec]) -> Vec<Entry> {
    let entries = match explicit {
        Some(path) => list_entries(path),
        None => expand_defaults(root, specs),
    };
    sort_entries(entries)
}

/// Show only the last `n` components of `path`, prefixed with `…/` when
/// anything was cut.
pub fn tail_path(path: &Path, n: usize) -> String {
    let parts: Vec<String> = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .filter(|c| c != "/")
        .collect();

    if parts.len() <= n {
        return path.display().to_string();
    }
    format!("…/{}", parts[parts.len() - n..].join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn entry(name: &str, is_dir: bool) -> Entry {
        Entry {
            name: name.to_string(),
            path: PathBuf::from("/sd").join(name),
            is_dir,
        }
    }

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn lists_visible_children_only() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), b"a").unwrap();
        fs::write(dir.path().join(".hidden"), b"h").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let entries = sort_entries(list_entries(dir.path()));
        assert_eq!(names(&entries), vec!["sub", "a.txt"]);
        assert!(entries[0].is_dir);
        assert!(!entries[1].is_dir);
        assert_eq!(entries[1].path, dir.path().join("a.txt"));
        assert!(entries.iter().all(|e| !is_hidden_name(&e.name)));
    }

    #[test]
    fn missing_directory_lists_empty() {
        let dir = TempDir::new().unwrap();
        assert!(list_entries(&dir.path().join("nope")).is_empty());
    }

    #[test]
    fn listing_a_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, b"x").unwrap();
        assert!(list_entries(&file).is_empty());
    }

    #[test]
    fn directories_sort_before_files_case_sensitively() {
        let sorted = sort_entries(vec![
            entry("b.txt", false),
            entry("Zeta", true),
            entry("a.txt", false),
            entry("B.txt", false),
            entry("alpha", true),
        ]);
        assert_eq!(names(&sorted), vec!["Zeta", "alpha", "B.txt", "a.txt", "b.txt"]);
    }

    #[test]
    fn sorting_is_total_and_idempotent() {
        let input = vec![
            entry("m", false),
            entry("c", true),
            entry("a", false),
            entry("z", true),
            entry("k", false),
        ];
        let once = sort_entries(input.clone());
        let twice = sort_entries(once.clone());
        assert_eq!(once, twice);

        let first_file = once.iter().position(|e| !e.is_dir).unwrap();
        assert!(once[..first_file].iter().all(|e| e.is_dir));
        assert!(once[first_file..].iter().all(|e| !e.is_dir));
        for group in [&once[..first_file], &once[first_file..]] {
            assert!(group.windows(2).all(|w| w[0].name <= w[1].name));
        }

        let mut reversed = input;
        reversed.reverse();
        assert_eq!(sort_entries(reversed), once);
    }

    #[test]
    fn equal_names_fall_back_to_path() {
        let a = Entry {
            name: "notes".into(),
            path: PathBuf::from("/sd/b/notes"),
            is_dir: false,
        };
        let b = Entry {
            name: "notes".into(),
            path: PathBuf::from("/sd/a/notes"),
            is_dir: false,
        };
        let sorted = sort_entries(vec![a, b.clone()]);
        assert_eq!(sorted[0], b);
    }

    #[test]
    fn explicit_path_ignores_configured_specs() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("Movies")).unwrap();
        let other = TempDir::new().unwrap();
        fs::write(other.path().join("z.txt"), b"z").unwrap();

        let specs = vec![LocationSpec::parse("Movies")];
        let entries = resolve_entries(Some(other.path()), root.path(), &specs);
        assert_eq!(names(&entries), vec!["z.txt"]);
    }

    #[test]
    fn tail_path_keeps_last_components() {
        assert_eq!(tail_path(Path::new("/a/b/c/d"), 2), "…/c/d");
        assert_eq!(tail_path(Path::new("/a/b"), 3), "/a/b");
    }
}
