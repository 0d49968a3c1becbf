//! Metadata augmentation: turn a draft manifest into an enriched one by
//! merging embedded tag values across every track.
//!
//! The merge is deterministic: tracks are probed and aggregated in reading
//! order, scalar fields follow the precedence tables in [`precedence`],
//! and list fields dedup by rendered name preserving first-seen order.
//! Augmentation itself never fails; a track whose probe fails simply
//! contributes nothing.

pub mod precedence;

use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use tracing::warn;

use crate::bundle;
use crate::manifest::{Contributor, Cover, Manifest, Subject};
use crate::probe::{MediaProber, ProbedMetadata, TagKind};

/// A manifest augmentation strategy.
///
/// One default implementation exists ([`TagAugmentor`]); substitute
/// [`NoopAugmentor`] when the draft should pass through untouched.
pub trait Augment {
    fn augment(&self, draft: Manifest) -> (Manifest, Option<Cover>);
}

/// Default augmentor: probes each track through a [`MediaProber`] and
/// merges the results.
pub struct TagAugmentor<'a, P: MediaProber> {
    prober: &'a P,
    root: &'a Path,
}

impl<'a, P: MediaProber> TagAugmentor<'a, P> {
    pub fn new(prober: &'a P, root: &'a Path) -> Self {
        Self { prober, root }
    }
}

impl<P: MediaProber> Augment for TagAugmentor<'_, P> {
    fn augment(&self, draft: Manifest) -> (Manifest, Option<Cover>) {
        let probed: Vec<Option<ProbedMetadata>> = draft
            .reading_order
            .iter()
            .map(|track| self.prober.probe(&bundle::resolve(self.root, &track.href)))
            .collect();

        merge_probed(draft, &probed)
    }
}

/// Augmentor that returns the draft unchanged. Useful when callers only
/// want classification and ordering.
pub struct NoopAugmentor;

impl Augment for NoopAugmentor {
    fn augment(&self, draft: Manifest) -> (Manifest, Option<Cover>) {
        (draft, None)
    }
}

/// Merge per-track probe results into the draft manifest.
///
/// `probed` is aligned with the draft's reading order; `None` entries are
/// tracks whose probe failed.
pub fn merge_probed(
    mut draft: Manifest,
    probed: &[Option<ProbedMetadata>],
) -> (Manifest, Option<Cover>) {
    for (track, result) in draft.reading_order.iter_mut().zip(probed) {
        if let Some(meta) = result {
            track.title = meta.first(TagKind::Title).map(String::from);
            track.bitrate = meta.bitrate;
            track.duration = meta.duration;
        }
    }

    let metadata = &mut draft.metadata;

    if let Some(title) = first_tag(probed, precedence::TITLE) {
        metadata.title = title;
    }
    metadata.subtitle = first_tag(probed, precedence::SUBTITLE);
    metadata.modified = first_tag(probed, precedence::MODIFIED)
        .as_deref()
        .and_then(parse_datetime);
    metadata.published = first_tag(probed, precedence::PUBLISHED)
        .as_deref()
        .and_then(parse_datetime);

    metadata.languages = collect_values(probed, precedence::LANGUAGES);
    metadata.subjects = collect_values(probed, precedence::SUBJECTS)
        .into_iter()
        .map(|name| Subject { name })
        .collect();
    metadata.authors = collect_contributors(probed, precedence::AUTHORS);
    metadata.narrators = collect_contributors(probed, precedence::NARRATORS);
    metadata.artists = collect_contributors(probed, precedence::ARTISTS);
    metadata.illustrators = collect_contributors(probed, precedence::ILLUSTRATORS);
    metadata.contributors = collect_contributors(probed, precedence::CONTRIBUTORS);
    metadata.publishers = collect_contributors(probed, precedence::PUBLISHERS);

    metadata.description = first_tag(probed, precedence::DESCRIPTION);

    // Strict fold: one unknown track duration makes the total unknown.
    metadata.duration = draft
        .reading_order
        .iter()
        .map(|track| track.duration)
        .try_fold(0.0_f64, |acc, duration| duration.map(|d| acc + d));

    let cover = select_cover(probed);
    (draft, cover)
}

/// First value of the first kind that yields one, scanning kind-major
/// across all tracks in reading order.
fn first_tag(probed: &[Option<ProbedMetadata>], kinds: &[TagKind]) -> Option<String> {
    for &kind in kinds {
        for meta in probed.iter().flatten() {
            if let Some(value) = meta.first(kind) {
                return Some(value.to_string());
            }
        }
    }
    None
}

/// Every value of every listed kind across all tracks, deduped by the
/// rendered string, first-seen order preserved.
fn collect_values(probed: &[Option<ProbedMetadata>], kinds: &[TagKind]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut values = Vec::new();
    for &kind in kinds {
        for meta in probed.iter().flatten() {
            for value in meta.all(kind) {
                if seen.insert(value.to_string()) {
                    values.push(value.to_string());
                }
            }
        }
    }
    values
}

fn collect_contributors(probed: &[Option<ProbedMetadata>], kinds: &[TagKind]) -> Vec<Contributor> {
    collect_values(probed, kinds)
        .into_iter()
        .map(Contributor::new)
        .collect()
}

/// Parse a tag date: RFC 3339, then a plain date, then a bare year.
fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
    }
    if let Ok(year) = value.parse::<i32>() {
        let date = NaiveDate::from_ymd_opt(year, 1, 1)?;
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
    }
    None
}

/// Pick the first embedded picture that actually decodes as an image,
/// trying picture kinds in priority order across all tracks.
fn select_cover(probed: &[Option<ProbedMetadata>]) -> Option<Cover> {
    for &kind in precedence::COVER {
        for meta in probed.iter().flatten() {
            for picture in meta.pictures.iter().filter(|p| p.kind == kind) {
                if let Some(cover) = decode_cover(&picture.data) {
                    return Some(cover);
                }
                warn!("Skipping undecodable embedded picture ({:?})", kind);
            }
        }
    }
    None
}

fn decode_cover(data: &[u8]) -> Option<Cover> {
    let format = image::guess_format(data).ok()?;
    let decoded = image::load_from_memory(data).ok()?;
    Some(Cover {
        data: data.to_vec(),
        media_type: format.to_mime_type().to_string(),
        width: decoded.width(),
        height: decoded.height(),
    })
}
