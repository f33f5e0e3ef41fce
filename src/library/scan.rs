use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::{DiscoveredFile, FileRef};

/// Whether `path` carries one of the configured playable extensions.
/// Comparison is case-insensitive and tolerates a leading dot in the setting.
pub fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            settings
                .extensions
                .iter()
                .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
                .any(|e| !e.is_empty() && e == ext)
        })
        .unwrap_or(false)
}

/// File name with the playable extension stripped.
pub fn display_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "UNKNOWN".to_string())
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Walk `dir` recursively and return every playable file beneath it, in
/// file-name order per directory.
///
/// Fails only when the root itself cannot be listed; unreadable entries
/// further down are skipped.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> std::io::Result<Vec<DiscoveredFile>> {
    fs::read_dir(dir)?;

    let mut walker = WalkDir::new(dir)
        .follow_links(settings.follow_links)
        .sort_by_file_name();
    if let Some(d) = settings.max_depth {
        walker = walker.max_depth(d);
    }

    let mut files = Vec::new();
    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        let path = entry.path();
        if entry.file_type().is_file() && is_audio_file(path, settings) {
            files.push(DiscoveredFile {
                display_name: display_name(path),
                file: FileRef::Path(path.to_path_buf()),
            });
        }
    }

    Ok(files)
}
