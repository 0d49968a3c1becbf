//! Resource model for candidate audiobook bundles.
//!
//! A bundle is a flat list of [`Resource`]s: relative paths plus the media
//! type inferred from the file extension. The built-in provider walks a
//! directory on disk; library callers may build resource lists from any
//! other source (an archive reader, a remote listing) and feed them to
//! [`crate::classify::classify`] directly.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::ScanConfig;
use crate::error::ParseError;

/// Media type of a packaged audiobook archive.
pub const AUDIOBOOK_ARCHIVE_TYPE: &str = "application/audiobook+zip";

/// Extensions recognized as audio tracks, mapped to their media types.
const AUDIO_MEDIA_TYPES: &[(&str, &str)] = &[
    ("aac", "audio/aac"),
    ("aif", "audio/aiff"),
    ("aiff", "audio/aiff"),
    ("flac", "audio/flac"),
    ("m4a", "audio/mp4"),
    ("m4b", "audio/mp4"),
    ("mp3", "audio/mpeg"),
    ("oga", "audio/ogg"),
    ("ogg", "audio/ogg"),
    ("opus", "audio/opus"),
    ("wav", "audio/wav"),
    ("webm", "audio/webm"),
];

/// A file-like entry in a bundle.
///
/// `href` is the path relative to the bundle root and is the resource's
/// identity. The media type is whatever the provider declared; `None` when
/// the extension is unrecognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub href: String,
    pub media_type: Option<String>,
}

impl Resource {
    /// Build a resource from a relative path, inferring the media type.
    pub fn from_href(href: impl Into<String>) -> Self {
        let href = href.into();
        let media_type = media_type_for(&href).map(String::from);
        Self { href, media_type }
    }

    /// Final path component of the href.
    pub fn file_name(&self) -> &str {
        self.href.rsplit('/').next().unwrap_or(&self.href)
    }

    /// Lowercased extension, if any.
    pub fn extension(&self) -> Option<String> {
        let name = self.file_name();
        let (stem, ext) = name.rsplit_once('.')?;
        if stem.is_empty() {
            // ".hidden" has no extension, just a hidden name
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    /// Whether the declared media type identifies an audio stream.
    pub fn is_audio(&self) -> bool {
        self.media_type
            .as_deref()
            .is_some_and(|t| t.starts_with("audio/"))
    }
}

/// Look up the media type for a path by extension.
pub fn media_type_for(href: &str) -> Option<&'static str> {
    let name = href.rsplit('/').next()?;
    let (_, ext) = name.rsplit_once('.')?;
    let ext = ext.to_ascii_lowercase();
    AUDIO_MEDIA_TYPES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, t)| *t)
}

/// Recursively list a directory as a bundle of resources.
///
/// Hrefs are `/`-separated paths relative to `root`, so the same tree
/// produces the same hrefs on every platform. Directories themselves are
/// not resources. Fails only when the root cannot be walked at all.
pub fn scan_directory(root: &Path, config: &ScanConfig) -> Result<Vec<Resource>, ParseError> {
    let mut resources = Vec::new();

    for entry in WalkDir::new(root).follow_links(config.follow_links) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        resources.push(Resource::from_href(relative));
    }

    Ok(resources)
}

/// Resolve a resource href back to a path under the bundle root.
pub fn resolve(root: &Path, href: &str) -> PathBuf {
    let mut path = root.to_path_buf();
    for segment in href.split('/') {
        path.push(segment);
    }
    path
}
