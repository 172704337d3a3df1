// src/open/content.rs
//! Content references handed to external viewers.

use std::path::Path;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped in the path part of a `file://` URI.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b']')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Turns an absolute path into a URI an external viewer can open.
pub trait ContentProvider {
    fn uri_for(&self, path: &Path) -> String;
}

/// Plain `file://` URIs.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileUriProvider;

impl ContentProvider for FileUriProvider {
    fn uri_for(&self, path: &Path) -> String {
        let raw = path.to_string_lossy().replace('\\', "/");
        let encoded = utf8_percent_encode(&raw, PATH_SEGMENT).to_string();
        if encoded.starts_with('/') {
            format!("file://{}", encoded)
        } else {
            // Windows drive paths: file:///C:/...
            format!("file:///{}", encoded)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_path_becomes_file_uri() {
        assert_eq!(
            FileUriProvider.uri_for(Path::new("/sd/Movies/clip.mp4")),
            "file:///sd/Movies/clip.mp4"
        );
    }

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!(
            FileUriProvider.uri_for(Path::new("/sd/My Docs/#1?.pdf")),
            "file:///sd/My%20Docs/%231%3F.pdf"
        );
    }

    #[test]
    fn non_ascii_is_utf8_encoded() {
        assert_eq!(
            FileUriProvider.uri_for(Path::new("/sd/é.txt")),
            "file:///sd/%C3%A9.txt"
        );
    }
}
