//! Error types shared across the crate.

use thiserror::Error;

/// Reasons a single track's tags could not be turned into metadata.
///
/// These never cross a track boundary: the loader logs them and marks the
/// track unresolved.
#[derive(Error, Debug)]
pub enum MetadataError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Lofty(#[from] lofty::error::LoftyError),

    #[error("no tags found")]
    NoTags,

    #[error("tag parsing error: {0}")]
    Parse(String),
}

/// Errors reading or writing the persisted preferences file.
#[derive(Error, Debug)]
pub enum PrefsError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid preferences file: {0}")]
    Decode(#[from] toml::de::Error),

    #[error("could not encode preferences: {0}")]
    Encode(#[from] toml::ser::Error),
}
