//! tapedeck: the library core of a local-folder MP3 player.
//!
//! A folder selection is walked into a [`registry::Registry`] of tracks, a
//! [`metadata::MetadataLoader`] fills in tags and cover art in batches, and a
//! [`playback::PlaybackOrder`] decides what plays next. [`app::Session`] ties
//! them together for whatever shell renders the playlist.

pub mod app;
pub mod config;
pub mod error;
pub mod library;
pub mod metadata;
pub mod playback;
pub mod prefs;
pub mod registry;
