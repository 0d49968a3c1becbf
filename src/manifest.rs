//! Publication manifest data model.
//!
//! Everything here is created once per parse and immutable afterwards.
//! Serialization uses camelCase field names so the JSON output matches
//! what downstream publication tooling expects.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Profile tag carried by every manifest this crate produces.
pub const AUDIOBOOK_PROFILE: &str = "https://readium.org/webpub-manifest/profiles/audiobook";

/// A named entity: author, narrator, publisher and so on.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Contributor {
    pub name: String,
}

impl Contributor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A subject/genre classification.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Subject {
    pub name: String,
}

/// One entry in the reading order: a resource plus its enriched attributes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Estimated bitrate in bits per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<f64>,
    /// Duration in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl Track {
    /// A bare track with no enriched attributes.
    pub fn new(href: impl Into<String>, media_type: Option<String>) -> Self {
        Self {
            href: href.into(),
            media_type,
            title: None,
            bitrate: None,
            duration: None,
        }
    }
}

/// Aggregated publication-level metadata.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationMetadata {
    pub conforms_to: Vec<String>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subjects: Vec<Subject>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<Contributor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub narrators: Vec<Contributor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub artists: Vec<Contributor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub illustrators: Vec<Contributor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contributors: Vec<Contributor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub publishers: Vec<Contributor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Total duration in seconds; `None` when any track's is unknown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl PublicationMetadata {
    /// A skeleton record carrying only the asset-derived title.
    pub fn draft(title: impl Into<String>) -> Self {
        Self {
            conforms_to: vec![AUDIOBOOK_PROFILE.to_string()],
            title: title.into(),
            subtitle: None,
            modified: None,
            published: None,
            languages: Vec::new(),
            subjects: Vec::new(),
            authors: Vec::new(),
            narrators: Vec::new(),
            artists: Vec::new(),
            illustrators: Vec::new(),
            contributors: Vec::new(),
            publishers: Vec::new(),
            description: None,
            duration: None,
        }
    }
}

/// The structured publication description: metadata plus reading order.
///
/// `reading_order` is non-empty whenever a manifest exists; the classifier
/// refuses to produce one otherwise.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub metadata: PublicationMetadata,
    pub reading_order: Vec<Track>,
}

/// A resolved cover image: original encoded bytes plus decoded dimensions.
#[derive(Debug, Clone)]
pub struct Cover {
    pub data: Vec<u8>,
    pub media_type: String,
    pub width: u32,
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_carries_audiobook_profile() {
        let metadata = PublicationMetadata::draft("My Book");
        assert_eq!(metadata.conforms_to, vec![AUDIOBOOK_PROFILE.to_string()]);
        assert_eq!(metadata.title, "My Book");
    }

    #[test]
    fn test_manifest_serializes_camel_case_and_skips_empties() {
        let manifest = Manifest {
            metadata: PublicationMetadata::draft("My Book"),
            reading_order: vec![Track::new("01.mp3", Some("audio/mpeg".to_string()))],
        };

        let json = serde_json::to_value(&manifest).unwrap();
        assert!(json.get("readingOrder").is_some());
        assert!(json["metadata"].get("conformsTo").is_some());
        assert!(json["metadata"].get("subtitle").is_none());
        assert!(json["metadata"].get("authors").is_none());
        assert_eq!(json["readingOrder"][0]["href"], "01.mp3");
    }
}
