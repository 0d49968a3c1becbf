//! Bundle parsing entry point.
//!
//! Glues the classifier and the augmentor together: scan the bundle,
//! decide whether it is an audiobook, build the draft manifest, enrich
//! it, and hand back a [`Publication`]. "This isn't an audiobook" is a
//! normal outcome (`Ok(None)`), never an error.

use std::path::Path;

use crate::augment::{Augment, TagAugmentor};
use crate::bundle::{self, Resource};
use crate::classify;
use crate::config::ScanConfig;
use crate::error::ParseError;
use crate::manifest::{Cover, Manifest, PublicationMetadata, Track};
use crate::probe::{LoftyProber, MediaProber};

/// The assembled publication: manifest plus the optional cover, with the
/// position capability derived from the reading order.
#[derive(Debug, Clone)]
pub struct Publication {
    pub manifest: Manifest,
    pub cover: Option<Cover>,
}

impl Publication {
    /// Starting offset of each track within the whole publication, in
    /// seconds. `None` while any preceding track's duration is unknown;
    /// consumers use these as locator targets for seeking.
    pub fn positions(&self) -> Vec<Option<f64>> {
        let mut offset = Some(0.0_f64);
        self.manifest
            .reading_order
            .iter()
            .map(|track| {
                let start = offset;
                offset = match (offset, track.duration) {
                    (Some(at), Some(d)) => Some(at + d),
                    _ => None,
                };
                start
            })
            .collect()
    }

    /// Index of a track in the reading order, by href.
    pub fn track_index(&self, href: &str) -> Option<usize> {
        self.manifest
            .reading_order
            .iter()
            .position(|track| track.href == href)
    }
}

/// Parse a directory bundle with the default lofty-backed prober.
pub fn try_parse(root: &Path, config: &ScanConfig) -> Result<Option<Publication>, ParseError> {
    let prober = LoftyProber::new();
    try_parse_with(root, config, &prober)
}

/// Parse a directory bundle, probing tracks through `prober`.
///
/// Returns `Ok(None)` when the directory does not qualify as an
/// audiobook bundle. Per-track probe failures degrade to bare tracks and
/// never fail the parse.
pub fn try_parse_with<P: MediaProber>(
    root: &Path,
    config: &ScanConfig,
    prober: &P,
) -> Result<Option<Publication>, ParseError> {
    if !root.is_dir() {
        return Err(ParseError::NotADirectory(root.to_path_buf()));
    }

    let resources = bundle::scan_directory(root, config)?;
    let Some(tracks) = classify::classify(&resources, None, &config.ignore_extensions) else {
        return Ok(None);
    };

    let draft = draft_manifest(root, &tracks);
    let augmentor = TagAugmentor::new(prober, root);
    let (manifest, cover) = augmentor.augment(draft);

    Ok(Some(Publication { manifest, cover }))
}

/// Skeleton manifest: asset-derived title, audiobook profile, bare tracks.
fn draft_manifest(root: &Path, tracks: &[Resource]) -> Manifest {
    let title = root
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| root.display().to_string());

    Manifest {
        metadata: PublicationMetadata::draft(title),
        reading_order: tracks
            .iter()
            .map(|r| Track::new(r.href.clone(), r.media_type.clone()))
            .collect(),
    }
}
