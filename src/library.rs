//! Folder source: turns a user selection into the list of playable files.
//!
//! A selection is either a directory (walked recursively) or a manual
//! multi-file pick used when directory access is unavailable.

mod model;
mod scan;
mod selection;

pub use model::{DiscoveredFile, FileRef};
pub use selection::{Discovery, Selection, discover};
