//! Configuration loader and schema types.
//!
//! This module exposes the settings schema (library scanning, metadata
//! batching, playback defaults, logging) and helpers to load it from disk.

mod load;
mod schema;

pub use load::config_dir;
pub use schema::*;
