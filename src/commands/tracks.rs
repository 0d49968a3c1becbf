use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use audiopub::config::ScanConfig;

use super::{format_duration, parse_or_bail};

pub fn run(dir: &Path, scan: &ScanConfig) -> Result<()> {
    let publication = parse_or_bail(dir, scan)?;
    let positions = publication.positions();

    for (index, (track, position)) in publication
        .manifest
        .reading_order
        .iter()
        .zip(positions)
        .enumerate()
    {
        let duration = track
            .duration
            .map(format_duration)
            .unwrap_or_else(|| "--:--:--".to_string());
        let start = position
            .map(format_duration)
            .unwrap_or_else(|| "--:--:--".to_string());

        let title = track.title.as_deref().unwrap_or(&track.href);
        println!(
            "{:>3}. [{} @ {}] {}",
            (index + 1).to_string().cyan(),
            duration,
            start,
            title
        );
    }

    Ok(())
}
