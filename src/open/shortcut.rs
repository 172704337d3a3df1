// src/open/shortcut.rs
//! Shortcut descriptors a host can pin.

use super::{content::ContentProvider, dispatch::Dispatcher, OpenAction};
use crate::fs::{Entry, MimeTypeProvider};

/// A pinnable shortcut: replaying it performs `action`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    /// Stable id; the entry's absolute path
    pub id: String,
    pub label: String,
    pub action: OpenAction,
}

impl Shortcut {
    pub fn for_entry<M: MimeTypeProvider, C: ContentProvider>(
        entry: &Entry,
        dispatcher: &Dispatcher<M, C>,
    ) -> Self {
        Self {
            id: entry.path.display().to_string(),
            label: entry.name.clone(),
            action: dispatcher.dispatch(entry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn shortcut_replays_dispatch() {
        let dispatcher = Dispatcher::new();
        let entry = Entry {
            name: "Music".into(),
            path: PathBuf::from("/sd/Music"),
            is_dir: true,
        };
        let shortcut = Shortcut::for_entry(&entry, &dispatcher);
        assert_eq!(shortcut.id, "/sd/Music");
        assert_eq!(shortcut.label, "Music");
        assert_eq!(shortcut.action, dispatcher.dispatch(&entry));
    }
}
