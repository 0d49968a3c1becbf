//! Resource classifier and orderer.
//!
//! Decides whether a resource set qualifies as an audiobook bundle and, if
//! so, produces the default reading order. Pure functions of their inputs.

use crate::bundle::{Resource, AUDIOBOOK_ARCHIVE_TYPE};

/// Companion files that never disqualify a bundle and never become tracks
const IGNORABLE_EXTENSIONS: &[&str] = &[
    "asx", "bio", "m3u", "m3u8", "pla", "pls", "smil", "txt", "vlc", "wpl", "xspf", "zpl",
];

const THUMBNAIL_CACHE: &str = "thumbs.db";

/// Check whether a resource is an ignorable companion file.
///
/// Playlists, subtitles and text notes shipped alongside the tracks, plus
/// hidden files and the Windows thumbnail cache.
pub fn is_ignorable(resource: &Resource, extra_extensions: &[String]) -> bool {
    let name = resource.file_name();
    if name.starts_with('.') {
        return true;
    }
    if name.eq_ignore_ascii_case(THUMBNAIL_CACHE) {
        return true;
    }
    match resource.extension() {
        Some(ext) => {
            IGNORABLE_EXTENSIONS.contains(&ext.as_str())
                || extra_extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext))
        }
        None => false,
    }
}

/// Classify a resource set and produce the default reading order.
///
/// Accepts immediately when the package itself is declared as an audiobook
/// archive. Otherwise the set must be non-empty and contain nothing but
/// audio tracks and ignorable companions; a single foreign resource (a PDF,
/// an EPUB chapter) means this is not a pure audiobook bundle and the whole
/// set is rejected.
///
/// The returned tracks are audio resources only, sorted by case-insensitive
/// href comparison so the order is reproducible regardless of how the
/// provider enumerated the files. Returns `None` when the set is rejected
/// or no audio remains after filtering.
pub fn classify(
    resources: &[Resource],
    package_media_type: Option<&str>,
    extra_ignored: &[String],
) -> Option<Vec<Resource>> {
    let declared_archive = package_media_type == Some(AUDIOBOOK_ARCHIVE_TYPE);

    if !declared_archive {
        if resources.is_empty() {
            return None;
        }
        if !resources
            .iter()
            .all(|r| r.is_audio() || is_ignorable(r, extra_ignored))
        {
            return None;
        }
    }

    let mut tracks: Vec<Resource> = resources
        .iter()
        .filter(|r| r.is_audio() && !is_ignorable(r, extra_ignored))
        .cloned()
        .collect();

    if tracks.is_empty() {
        return None;
    }

    tracks.sort_by_key(|r| r.href.to_lowercase());
    Some(tracks)
}
