use std::sync::{Arc, Mutex, MutexGuard};

use crate::library::{DiscoveredFile, FileRef};
use crate::metadata::CoverImage;

pub type TrackId = usize;

/// Counter identifying one folder load.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

impl Generation {
    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Progress of metadata enrichment for a track. Both outcomes are terminal.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum MetadataStatus {
    #[default]
    Pending,
    Enriched,
    Unresolved,
}

#[derive(Debug, Clone)]
pub struct Track {
    pub id: TrackId,
    pub display_name: String,
    pub file: FileRef,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub cover: Option<CoverImage>,
    pub status: MetadataStatus,
}

impl Track {
    /// Title from tags, else the file name.
    pub fn title_or_name(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.display_name)
    }

    /// `Artist - Title` when an artist is known, else the title.
    pub fn label(&self) -> String {
        match self.artist.as_deref().map(str::trim) {
            Some(a) if !a.is_empty() => format!("{} - {}", a, self.title_or_name()),
            _ => self.title_or_name().to_string(),
        }
    }
}

/// Fields resolved by the metadata loader. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct MetadataUpdate {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub cover: Option<CoverImage>,
}

#[derive(Debug, Default)]
pub struct Registry {
    generation: Generation,
    tracks: Vec<Track>,
}

/// Registry shared between the session and in-flight enrichment.
pub type RegistryHandle = Arc<Mutex<Registry>>;

/// Lock the registry. Never held across an await point, so a poisoned lock
/// still holds consistent data.
pub fn lock(handle: &RegistryHandle) -> MutexGuard<'_, Registry> {
    handle.lock().unwrap_or_else(|e| e.into_inner())
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a fresh registry in a shareable handle.
    pub fn handle() -> RegistryHandle {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Replace every track with `files`, assigning dense ids in input order,
    /// and start a new generation.
    pub fn replace_all(&mut self, files: Vec<DiscoveredFile>) -> Generation {
        self.generation = self.generation.next();
        self.tracks = files
            .into_iter()
            .enumerate()
            .map(|(id, f)| Track {
                id,
                display_name: f.display_name,
                file: f.file,
                title: None,
                artist: None,
                cover: None,
                status: MetadataStatus::Pending,
            })
            .collect();
        self.generation
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn get(&self, id: TrackId) -> Option<&Track> {
        self.tracks.get(id)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Ids and byte handles of tracks whose metadata has not been attempted.
    pub fn pending(&self) -> Vec<(TrackId, FileRef)> {
        self.tracks
            .iter()
            .filter(|t| t.status == MetadataStatus::Pending)
            .map(|t| (t.id, t.file.clone()))
            .collect()
    }

    fn current_mut(&mut self, generation: Generation, id: TrackId) -> Option<&mut Track> {
        if generation != self.generation {
            return None;
        }
        self.tracks.get_mut(id)
    }

    /// Merge `update` into track `id`. Fields already set are never
    /// overwritten. Returns `false` (and changes nothing) when the generation
    /// is stale, the id is unknown or the track is already unresolved.
    pub fn update_metadata(
        &mut self,
        generation: Generation,
        id: TrackId,
        update: MetadataUpdate,
    ) -> bool {
        let Some(track) = self.current_mut(generation, id) else {
            return false;
        };
        if track.status == MetadataStatus::Unresolved {
            return false;
        }

        if track.title.is_none() {
            track.title = update.title;
        }
        if track.artist.is_none() {
            track.artist = update.artist;
        }
        if track.cover.is_none() {
            track.cover = update.cover;
        }
        track.status = MetadataStatus::Enriched;
        true
    }

    /// Record that metadata for `id` could not be read.
    pub fn mark_unresolved(&mut self, generation: Generation, id: TrackId) -> bool {
        match self.current_mut(generation, id) {
            Some(track) if track.status == MetadataStatus::Pending => {
                track.status = MetadataStatus::Unresolved;
                true
            }
            _ => false,
        }
    }
}
