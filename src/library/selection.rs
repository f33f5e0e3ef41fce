use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::LibrarySettings;

use super::model::{DiscoveredFile, FileRef};
use super::scan::{display_name, is_audio_file, scan};

/// What the user picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A directory, walked recursively.
    Directory(PathBuf),
    /// Manual multi-file pick, used when directory access is unavailable.
    Files(Vec<PathBuf>),
    /// The user dismissed the picker.
    Cancelled,
}

/// Result of turning a [`Selection`] into files.
#[derive(Debug)]
pub enum Discovery {
    Cancelled,
    /// The directory could not be listed (missing, not a directory, no permission).
    Denied(String),
    Found(Vec<DiscoveredFile>),
}

/// Resolve `selection` into the playable files it refers to.
///
/// Cancellation and denial are ordinary outcomes; callers keep whatever
/// they had loaded before.
pub fn discover(selection: &Selection, settings: &LibrarySettings) -> Discovery {
    match selection {
        Selection::Cancelled => Discovery::Cancelled,
        Selection::Directory(dir) => match scan(dir, settings) {
            Ok(files) => Discovery::Found(files),
            Err(e) => {
                tracing::info!("Cannot read {}: {}", dir.display(), e);
                Discovery::Denied(e.to_string())
            }
        },
        Selection::Files(paths) => Discovery::Found(load_picked_files(paths, settings)),
    }
}

fn load_picked_files(paths: &[PathBuf], settings: &LibrarySettings) -> Vec<DiscoveredFile> {
    paths
        .iter()
        .filter(|p| is_audio_file(p, settings))
        .filter_map(|p| match fs::read(p) {
            Ok(bytes) => Some(DiscoveredFile {
                display_name: display_name(p),
                file: FileRef::Memory {
                    name: p.display().to_string(),
                    bytes: Arc::from(bytes),
                },
            }),
            Err(e) => {
                tracing::warn!("Skipping {}: {}", p.display(), e);
                None
            }
        })
        .collect()
}
