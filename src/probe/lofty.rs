//! Default media prober backed by lofty.

use std::path::Path;

use lofty::{AudioFile, ItemKey, PictureType, TaggedFileExt};
use tracing::warn;

use super::{MediaProber, Picture, PictureKind, ProbedMetadata, TagKind};

/// Reads duration, bitrate and embedded tags through lofty.
///
/// Handles every container lofty understands (MP3, MP4/M4B, FLAC, Ogg,
/// WAV, ...). Any read failure is reported as "no metadata".
pub struct LoftyProber;

impl LoftyProber {
    pub fn new() -> Self {
        Self
    }

    fn normalize_key(key: &ItemKey) -> Option<TagKind> {
        match key {
            ItemKey::TrackTitle => Some(TagKind::Title),
            ItemKey::Work => Some(TagKind::Work),
            ItemKey::AlbumTitle => Some(TagKind::Album),
            ItemKey::SetSubtitle => Some(TagKind::Subtitle),
            ItemKey::TrackSubtitle => Some(TagKind::TrackSubtitle),
            ItemKey::OriginalReleaseDate => Some(TagKind::CreationDate),
            ItemKey::RecordingDate | ItemKey::Year => Some(TagKind::Date),
            ItemKey::Language => Some(TagKind::Language),
            ItemKey::Genre => Some(TagKind::Subject),
            ItemKey::Writer => Some(TagKind::Author),
            // Audiobook rips conventionally store the narrator in the
            // composer field.
            ItemKey::Composer => Some(TagKind::Narrator),
            ItemKey::TrackArtist => Some(TagKind::Artist),
            ItemKey::AlbumArtist => Some(TagKind::AlbumArtist),
            ItemKey::InvolvedPeople => Some(TagKind::Contributor),
            ItemKey::Publisher => Some(TagKind::Publisher),
            ItemKey::Label => Some(TagKind::Label),
            ItemKey::Description => Some(TagKind::Description),
            ItemKey::Comment => Some(TagKind::Comment),
            _ => None,
        }
    }

    fn normalize_picture_type(kind: PictureType) -> PictureKind {
        match kind {
            PictureType::CoverFront => PictureKind::FrontCover,
            PictureType::CoverBack => PictureKind::BackCover,
            _ => PictureKind::Other,
        }
    }

    fn extract_from_tag(tag: &lofty::Tag, probed: &mut ProbedMetadata) {
        for item in tag.items() {
            let Some(kind) = Self::normalize_key(item.key()) else {
                continue;
            };
            if let Some(text) = item.value().text() {
                probed.tags.push((kind, text.to_string()));
            }
        }

        for picture in tag.pictures() {
            probed.pictures.push(Picture {
                kind: Self::normalize_picture_type(picture.pic_type()),
                data: picture.data().to_vec(),
            });
        }
    }
}

impl Default for LoftyProber {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaProber for LoftyProber {
    fn probe(&self, path: &Path) -> Option<ProbedMetadata> {
        let tagged_file = match lofty::read_from_path(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Failed to probe {:?}: {}", path, e);
                return None;
            }
        };

        let properties = tagged_file.properties();
        let mut probed = ProbedMetadata {
            duration: Some(properties.duration().as_secs_f64()),
            bitrate: properties.audio_bitrate().map(|kbps| f64::from(kbps) * 1000.0),
            ..Default::default()
        };

        if let Some(tag) = tagged_file.primary_tag().or_else(|| tagged_file.first_tag()) {
            Self::extract_from_tag(tag, &mut probed);
        }

        Some(probed)
    }
}
