use std::path::PathBuf;

use thiserror::Error;

/// Environment-level failures while reading a bundle.
///
/// Everything metadata-related degrades silently instead of erroring;
/// this type only covers "the bundle root itself cannot be read".
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("bundle root {0:?} is not a directory")]
    NotADirectory(PathBuf),

    #[error("failed to scan bundle directory: {0}")]
    Scan(#[from] walkdir::Error),
}
