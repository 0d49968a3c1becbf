use anyhow::{bail, Context, Result};
use std::path::Path;

use audiopub::config::ScanConfig;

use super::parse_or_bail;

pub fn run(dir: &Path, scan: &ScanConfig, output: &Path, quiet: bool) -> Result<()> {
    let publication = parse_or_bail(dir, scan)?;

    let Some(cover) = publication.cover else {
        bail!("No cover image found in {}", dir.display());
    };

    std::fs::write(output, &cover.data)
        .with_context(|| format!("Failed to write cover to {:?}", output))?;

    if !quiet {
        println!(
            "Wrote {}x{} {} cover to {}",
            cover.width,
            cover.height,
            cover.media_type,
            output.display()
        );
    }

    Ok(())
}
