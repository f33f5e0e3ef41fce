//! Metadata enrichment: reading title, artist and cover art from tags and
//! writing them back into the registry.

mod cover;
mod loader;
mod reader;

pub use cover::{CoverImage, Fallback};
pub use loader::{CancelToken, EnrichReport, MetadataLoader};
pub use reader::{LoftyTagReader, TagData, TagReader};
