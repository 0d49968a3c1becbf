//! End-to-end parsing over on-disk fixture bundles.

use std::fs;
use std::path::Path;

use audiopub::config::ScanConfig;
use audiopub::manifest::AUDIOBOOK_PROFILE;

use tempfile::TempDir;

fn bundle(files: &[&str]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for name in files {
        let path = temp.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"x").unwrap();
    }
    temp
}

fn hrefs(publication: &audiopub::Publication) -> Vec<String> {
    publication
        .manifest
        .reading_order
        .iter()
        .map(|t| t.href.clone())
        .collect()
}

#[test]
fn test_nested_tracks_sorted_case_insensitively() {
    let temp = bundle(&[
        "Disc 2/01.mp3",
        "disc 1/02.mp3",
        "disc 1/01.mp3",
        "playlist.m3u",
    ]);

    let publication = audiopub::try_parse(temp.path(), &ScanConfig::default())
        .unwrap()
        .unwrap();

    assert_eq!(
        hrefs(&publication),
        vec!["disc 1/01.mp3", "disc 1/02.mp3", "Disc 2/01.mp3"]
    );
}

#[test]
fn test_mixed_audio_formats_accepted() {
    let temp = bundle(&["01.mp3", "02.flac", "03.m4b", "04.ogg"]);
    let publication = audiopub::try_parse(temp.path(), &ScanConfig::default())
        .unwrap()
        .unwrap();
    assert_eq!(publication.manifest.reading_order.len(), 4);
}

#[test]
fn test_hidden_and_companion_files_do_not_disqualify() {
    let temp = bundle(&["01.mp3", ".DS_Store", "Thumbs.db", "notes.txt", "list.m3u8"]);
    let publication = audiopub::try_parse(temp.path(), &ScanConfig::default())
        .unwrap()
        .unwrap();
    assert_eq!(hrefs(&publication), vec!["01.mp3"]);
}

#[test]
fn test_single_foreign_file_rejects_whole_bundle() {
    let temp = bundle(&["01.mp3", "02.mp3", "03.mp3", "extras/booklet.epub"]);
    let outcome = audiopub::try_parse(temp.path(), &ScanConfig::default()).unwrap();
    assert!(outcome.is_none());
}

#[test]
fn test_empty_directory_is_not_applicable() {
    let temp = TempDir::new().unwrap();
    let outcome = audiopub::try_parse(temp.path(), &ScanConfig::default()).unwrap();
    assert!(outcome.is_none());
}

#[test]
fn test_manifest_carries_audiobook_profile_and_media_types() {
    let temp = bundle(&["01.mp3"]);
    let publication = audiopub::try_parse(temp.path(), &ScanConfig::default())
        .unwrap()
        .unwrap();

    assert_eq!(
        publication.manifest.metadata.conforms_to,
        vec![AUDIOBOOK_PROFILE.to_string()]
    );
    assert_eq!(
        publication.manifest.reading_order[0].media_type.as_deref(),
        Some("audio/mpeg")
    );
}

#[test]
fn test_unreadable_tracks_degrade_but_parse_succeeds() {
    // Junk bytes: every probe fails, the manifest still comes out with a
    // full reading order and no aggregate duration.
    let temp = bundle(&["01.mp3", "02.mp3"]);
    let publication = audiopub::try_parse(temp.path(), &ScanConfig::default())
        .unwrap()
        .unwrap();

    assert_eq!(publication.manifest.reading_order.len(), 2);
    assert!(publication.manifest.metadata.duration.is_none());
    for track in &publication.manifest.reading_order {
        assert!(track.duration.is_none());
        assert!(track.title.is_none());
    }
}

#[test]
fn test_not_a_directory_errors() {
    let temp = bundle(&["01.mp3"]);
    let file = temp.path().join("01.mp3");
    let result = audiopub::try_parse(Path::new(&file), &ScanConfig::default());
    assert!(result.is_err());
}
