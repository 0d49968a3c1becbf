use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use audiopub::config::ScanConfig;
use audiopub::manifest::Contributor;
use audiopub::Publication;

use super::{format_duration, parse_or_bail};

pub fn run(dir: &Path, scan: &ScanConfig, json: bool, quiet: bool) -> Result<()> {
    let publication = parse_or_bail(dir, scan)?;

    if json {
        print_json(&publication)?;
    } else {
        print_pretty(&publication, dir, quiet);
    }

    Ok(())
}

fn print_json(publication: &Publication) -> Result<()> {
    let json = serde_json::to_string_pretty(&publication.manifest)?;
    println!("{}", json);
    Ok(())
}

fn print_pretty(publication: &Publication, dir: &Path, quiet: bool) {
    let metadata = &publication.manifest.metadata;

    if !quiet {
        println!("{}", dir.display().to_string().bold());
        println!("{}", "-".repeat(40));
    }

    print_field("Title", Some(&metadata.title));
    print_field("Subtitle", metadata.subtitle.as_deref());
    print_names("Authors", &metadata.authors);
    print_names("Narrators", &metadata.narrators);
    print_names("Artists", &metadata.artists);
    print_names("Publishers", &metadata.publishers);

    if !metadata.languages.is_empty() {
        print_field("Languages", Some(&metadata.languages.join(", ")));
    }
    if let Some(published) = metadata.published {
        print_field("Published", Some(&published.format("%Y-%m-%d").to_string()));
    }
    if let Some(duration) = metadata.duration {
        print_field("Duration", Some(&format_duration(duration)));
    }
    print_field(
        "Tracks",
        Some(&publication.manifest.reading_order.len().to_string()),
    );
    if let Some(cover) = &publication.cover {
        print_field(
            "Cover",
            Some(&format!(
                "{}x{} ({})",
                cover.width, cover.height, cover.media_type
            )),
        );
    }

    if let Some(desc) = &metadata.description {
        println!();
        println!("{}", "Description:".cyan());
        println!("  {}", desc);
    }
}

fn print_field(label: &str, value: Option<&str>) {
    if let Some(v) = value {
        println!("{:>12}: {}", label.cyan(), v);
    }
}

fn print_names(label: &str, contributors: &[Contributor]) {
    if !contributors.is_empty() {
        let names: Vec<&str> = contributors.iter().map(|c| c.name.as_str()).collect();
        print_field(label, Some(&names.join(", ")));
    }
}
