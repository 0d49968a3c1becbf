pub mod cover;
pub mod parse;
pub mod tracks;

use anyhow::{bail, Result};
use std::path::Path;

use audiopub::config::ScanConfig;
use audiopub::Publication;

/// Parse a bundle or bail with the not-applicable message.
fn parse_or_bail(dir: &Path, scan: &ScanConfig) -> Result<Publication> {
    match audiopub::try_parse(dir, scan)? {
        Some(publication) => Ok(publication),
        None => bail!("Not an audiobook bundle: {}", dir.display()),
    }
}

/// Format seconds as HH:MM:SS.
fn format_duration(seconds: f64) -> String {
    let total = seconds.round() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}
