// src/open/dispatch.rs
//! Decides what opening an entry means.

use std::{fmt, path::PathBuf};

use super::content::{ContentProvider, FileUriProvider};
use crate::fs::{Entry, MimeResolver, MimeTypeProvider, SystemMimeTable};

/// What the host should do with a selected entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenAction {
    /// List `path` next, through the same pipeline.
    Navigate { path: PathBuf },
    /// Hand `uri` to an external viewer.
    ViewExternally {
        uri: String,
        mime_type: String,
        /// Viewer gets read access to `uri`
        grant_read: bool,
        /// Viewer runs detached from the browser
        new_task: bool,
    },
}

impl fmt::Display for OpenAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenAction::Navigate { path } => write!(f, "navigate {}", path.display()),
            OpenAction::ViewExternally {
                uri,
                mime_type,
                grant_read,
                new_task,
            } => write!(
                f,
                "view {} as {} (grant_read={}, new_task={})",
                uri, mime_type, grant_read, new_task
            ),
        }
    }
}

/// Maps entries to [`OpenAction`]s.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher<M = SystemMimeTable, C = FileUriProvider> {
    mime: MimeResolver<M>,
    content: C,
}

impl Dispatcher {
    /// Dispatcher backed by the built-in MIME table and `file://` URIs.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M: MimeTypeProvider, C: ContentProvider> Dispatcher<M, C> {
    pub fn with_parts(mime: MimeResolver<M>, content: C) -> Self {
        Self { mime, content }
    }

    pub fn mime(&self) -> &MimeResolver<M> {
        &self.mime
    }

    /// Decide how to open `entry`. Always succeeds.
    pub fn dispatch(&self, entry: &Entry) -> OpenAction {
        if entry.is_dir {
            return OpenAction::Navigate {
                path: entry.path.clone(),
            };
        }

        let mime_type = self.mime.resolve(&entry.name);
        // Video players keep their own task; everything else gets a fresh one.
        let new_task = !mime_type.starts_with("video/");
        OpenAction::ViewExternally {
            uri: self.content.uri_for(&entry.path),
            mime_type,
            grant_read: true,
            new_task,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    struct TaggedUris;

    impl ContentProvider for TaggedUris {
        fn uri_for(&self, path: &Path) -> String {
            format!("content://burrow{}", path.display())
        }
    }

    fn file(name: &str) -> Entry {
        Entry {
            name: name.to_string(),
            path: PathBuf::from("/sd").join(name),
            is_dir: false,
        }
    }

    #[test]
    fn directory_navigates() {
        let entry = Entry {
            name: "Movies".into(),
            path: PathBuf::from("/sd/Movies"),
            is_dir: true,
        };
        assert_eq!(
            Dispatcher::new().dispatch(&entry),
            OpenAction::Navigate {
                path: PathBuf::from("/sd/Movies")
            }
        );
    }

    #[test]
    fn video_stays_in_task() {
        match Dispatcher::new().dispatch(&file("clip.mp4")) {
            OpenAction::ViewExternally {
                mime_type,
                grant_read,
                new_task,
                ..
            } => {
                assert_eq!(mime_type, "video/mp4");
                assert!(grant_read);
                assert!(!new_task);
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn document_gets_new_task() {
        assert_eq!(
            Dispatcher::new().dispatch(&file("doc.pdf")),
            OpenAction::ViewExternally {
                uri: "file:///sd/doc.pdf".into(),
                mime_type: "application/pdf".into(),
                grant_read: true,
                new_task: true,
            }
        );
    }

    #[test]
    fn unknown_file_falls_back_and_gets_new_task() {
        match Dispatcher::new().dispatch(&file("README")) {
            OpenAction::ViewExternally {
                mime_type,
                new_task,
                ..
            } => {
                assert_eq!(mime_type, crate::fs::FALLBACK_MIME);
                assert!(new_task);
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn uri_comes_from_content_provider() {
        let dispatcher =
            Dispatcher::with_parts(MimeResolver::<SystemMimeTable>::default(), TaggedUris);
        match dispatcher.dispatch(&file("song.mp3")) {
            OpenAction::ViewExternally { uri, .. } => {
                assert_eq!(uri, "content://burrow/sd/song.mp3")
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }
}
