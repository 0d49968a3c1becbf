//! Embedded media metadata probing.
//!
//! The parser never touches audio containers itself; it asks a
//! [`MediaProber`] for whatever a track carries. Probers normalize
//! container-specific tag keys into the [`TagKind`] identifiers the merge
//! step understands, and must swallow unreadable files: a probe either
//! yields metadata or yields nothing, it never errors.

mod lofty;

pub use self::lofty::LoftyProber;

use std::path::Path;

/// Normalized tag identifiers, independent of the source container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// Per-track title. Enriches tracks only, never the publication.
    Title,
    /// Publication-level work title.
    Work,
    /// Album title.
    Album,
    /// Set/disc subtitle.
    Subtitle,
    /// Per-track subtitle.
    TrackSubtitle,
    LastModified,
    CreationDate,
    Date,
    Language,
    Subject,
    Author,
    Narrator,
    Artist,
    AlbumArtist,
    Illustrator,
    Contributor,
    Publisher,
    Label,
    Description,
    Comment,
}

/// Kind of an embedded picture, in descending usefulness as a cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PictureKind {
    FrontCover,
    BackCover,
    Other,
}

/// An embedded picture: raw encoded bytes, not yet validated as an image.
#[derive(Debug, Clone)]
pub struct Picture {
    pub kind: PictureKind,
    pub data: Vec<u8>,
}

/// Everything a prober could learn about one track.
///
/// All fields are best-effort; a track with no tags at all is still a
/// valid probe result.
#[derive(Debug, Clone, Default)]
pub struct ProbedMetadata {
    /// Playback length in seconds.
    pub duration: Option<f64>,
    /// Estimated audio stream bitrate in bits per second.
    pub bitrate: Option<f64>,
    /// Normalized tag values, in the order the container stored them.
    pub tags: Vec<(TagKind, String)>,
    /// Embedded pictures, in container order.
    pub pictures: Vec<Picture>,
}

impl ProbedMetadata {
    /// First value of the given kind, if any.
    pub fn first(&self, kind: TagKind) -> Option<&str> {
        self.tags
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, v)| v.as_str())
    }

    /// All values of the given kind, in stored order.
    pub fn all(&self, kind: TagKind) -> impl Iterator<Item = &str> {
        self.tags
            .iter()
            .filter(move |(k, _)| *k == kind)
            .map(|(_, v)| v.as_str())
    }
}

/// A source of embedded media metadata.
///
/// Implementations must treat unreadable or corrupt files as "no
/// metadata" (`None`) rather than failing; per-track degradation is the
/// caller's normal operating mode.
pub trait MediaProber {
    fn probe(&self, path: &Path) -> Option<ProbedMetadata>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_and_all_accessors() {
        let probed = ProbedMetadata {
            tags: vec![
                (TagKind::Author, "Ann".to_string()),
                (TagKind::Title, "Chapter 1".to_string()),
                (TagKind::Author, "Ben".to_string()),
            ],
            ..Default::default()
        };

        assert_eq!(probed.first(TagKind::Author), Some("Ann"));
        assert_eq!(probed.first(TagKind::Album), None);
        let authors: Vec<&str> = probed.all(TagKind::Author).collect();
        assert_eq!(authors, vec!["Ann", "Ben"]);
    }
}
