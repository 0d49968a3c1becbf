//! Parse folders of audio files into audiobook publication manifests.
//!
//! Given a directory of audio tracks (plus whatever playlists, notes and
//! thumbnails ride along), `audiopub` decides whether the set is an
//! audiobook, orders the tracks deterministically, merges the embedded
//! tags of every track into one publication metadata record, and resolves
//! an optional cover image.
//!
//! ```no_run
//! use std::path::Path;
//! use audiopub::config::ScanConfig;
//!
//! let outcome = audiopub::try_parse(Path::new("/books/The Hobbit"), &ScanConfig::default());
//! match outcome {
//!     Ok(Some(publication)) => println!("{} tracks", publication.manifest.reading_order.len()),
//!     Ok(None) => println!("not an audiobook bundle"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

pub mod augment;
pub mod bundle;
pub mod classify;
pub mod config;
pub mod error;
pub mod manifest;
pub mod parser;
pub mod probe;

pub use error::ParseError;
pub use manifest::{Cover, Manifest, PublicationMetadata, Track};
pub use parser::{try_parse, try_parse_with, Publication};
