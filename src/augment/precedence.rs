//! Per-field tag precedence tables.
//!
//! Each publication field scans these kinds in order across every track's
//! probed metadata. Scalar fields take the first value the first matching
//! kind yields; list fields collect every value of every listed kind.
//! Kept declarative and separate from the merge loop so the policy is
//! testable on its own.

use crate::probe::{PictureKind, TagKind};

/// Publication title. Per-track titles deliberately never qualify; a
/// bundle whose tracks are titled "Chapter 1", "Chapter 2" should fall
/// back to the asset name, not adopt the first chapter's title.
pub const TITLE: &[TagKind] = &[TagKind::Work, TagKind::Album];

pub const SUBTITLE: &[TagKind] = &[TagKind::Subtitle, TagKind::TrackSubtitle];

pub const MODIFIED: &[TagKind] = &[TagKind::LastModified];
pub const PUBLISHED: &[TagKind] = &[TagKind::CreationDate, TagKind::Date];

pub const LANGUAGES: &[TagKind] = &[TagKind::Language];
pub const SUBJECTS: &[TagKind] = &[TagKind::Subject];

pub const AUTHORS: &[TagKind] = &[TagKind::Author];
pub const NARRATORS: &[TagKind] = &[TagKind::Narrator];
pub const ARTISTS: &[TagKind] = &[TagKind::Artist, TagKind::AlbumArtist];
pub const ILLUSTRATORS: &[TagKind] = &[TagKind::Illustrator];
pub const CONTRIBUTORS: &[TagKind] = &[TagKind::Contributor];
pub const PUBLISHERS: &[TagKind] = &[TagKind::Publisher, TagKind::Label];

pub const DESCRIPTION: &[TagKind] = &[TagKind::Description, TagKind::Comment];

/// Cover candidates, best kind first.
pub const COVER: &[PictureKind] = &[
    PictureKind::FrontCover,
    PictureKind::BackCover,
    PictureKind::Other,
];
