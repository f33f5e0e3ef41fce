use std::future::Future;
use std::io::{self, Cursor};
use std::sync::Arc;

use lofty::config::ParseOptions;
use lofty::file::TaggedFileExt;
use lofty::probe::Probe;
use lofty::tag::{Accessor, Tag};

use crate::error::MetadataError;
use crate::library::FileRef;
use crate::registry::MetadataUpdate;

use super::cover::CoverImage;

/// What a tag block yielded. Empty strings are already dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagData {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub picture: Option<CoverImage>,
}

impl From<TagData> for MetadataUpdate {
    fn from(tags: TagData) -> Self {
        Self {
            title: tags.title,
            artist: tags.artist,
            cover: tags.picture,
        }
    }
}

/// Parses embedded tags out of a file's bytes.
pub trait TagReader: Send + Sync {
    /// Resolve the bytes behind `file`. This is the await point of a track's
    /// enrichment; the default defers to [`FileRef::read`].
    fn fetch(&self, file: &FileRef) -> impl Future<Output = io::Result<Arc<[u8]>>> + Send {
        file.read()
    }

    fn read(&self, bytes: &[u8]) -> Result<TagData, MetadataError>;
}

/// Tag reader backed by lofty (ID3v2, ID3v1, APE and friends).
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyTagReader;

impl LoftyTagReader {
    pub fn new() -> Self {
        Self
    }

    fn extract(tag: &Tag) -> TagData {
        let picture = tag.pictures().first().map(|p| {
            let mime = p
                .mime_type()
                .map(|m| m.as_str())
                .filter(|m| m.starts_with("image/"))
                .unwrap_or("image/jpeg");
            CoverImage::new(mime, p.data().to_vec())
        });

        TagData {
            title: tag.title().as_deref().and_then(clean),
            artist: tag.artist().as_deref().and_then(clean),
            picture,
        }
    }
}

fn clean(value: &str) -> Option<String> {
    let v = value.trim();
    (!v.is_empty()).then(|| v.to_string())
}

impl TagReader for LoftyTagReader {
    fn read(&self, bytes: &[u8]) -> Result<TagData, MetadataError> {
        let tagged = Probe::new(Cursor::new(bytes))
            .options(ParseOptions::new().read_properties(false))
            .guess_file_type()?
            .read()?;

        let tag = tagged
            .primary_tag()
            .or_else(|| tagged.first_tag())
            .ok_or(MetadataError::NoTags)?;

        Ok(Self::extract(tag))
    }
}
