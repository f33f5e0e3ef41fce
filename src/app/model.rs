//! Session state: the current registry generation, its playback order and
//! the position within it.

use std::future::Future;
use std::sync::Arc;

use crate::config::{LibrarySettings, Settings};
use crate::library::{Discovery, Selection, discover};
use crate::metadata::{CancelToken, EnrichReport, LoftyTagReader, MetadataLoader, TagReader};
use crate::playback::{PlaybackOrder, next_in, previous_in};
use crate::registry::{Generation, Registry, RegistryHandle, Track, lock};

/// What happened to a folder selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The user backed out; nothing changed.
    Cancelled,
    /// The folder could not be read; nothing changed.
    Denied(String),
    /// The folder holds no playable files. The registry is now empty.
    Empty,
    Loaded { tracks: usize, generation: Generation },
}

/// One running player's library state.
pub struct Session<R = LoftyTagReader> {
    library: LibrarySettings,
    registry: RegistryHandle,
    loader: Arc<MetadataLoader<R>>,
    cancel: CancelToken,

    orderer: PlaybackOrder,
    order: Vec<usize>,
    shuffle: bool,
    current: Option<usize>,

    last_selection: Option<Selection>,
}

impl Session<LoftyTagReader> {
    /// Create a session configured from `settings`.
    pub fn new(settings: &Settings) -> Self {
        let mut session = Self::with_loader(
            settings.library.clone(),
            MetadataLoader::new(settings.metadata.batch_size),
            PlaybackOrder::new(),
        );
        session.shuffle = settings.playback.shuffle;
        session
    }
}

impl<R: TagReader + 'static> Session<R> {
    pub fn with_loader(
        library: LibrarySettings,
        loader: MetadataLoader<R>,
        orderer: PlaybackOrder,
    ) -> Self {
        Self {
            library,
            registry: Registry::handle(),
            loader: Arc::new(loader),
            cancel: CancelToken::new(),
            orderer,
            order: Vec::new(),
            shuffle: false,
            current: None,
            last_selection: None,
        }
    }

    /// Load a new selection. On success the previous generation is
    /// replaced wholesale and its enrichment task is told to stop.
    pub fn load(&mut self, selection: Selection) -> LoadOutcome {
        let files = match discover(&selection, &self.library) {
            Discovery::Cancelled => return LoadOutcome::Cancelled,
            Discovery::Denied(reason) => return LoadOutcome::Denied(reason),
            Discovery::Found(files) => files,
        };

        self.cancel.cancel();
        self.cancel = CancelToken::new();

        let count = files.len();
        let generation = lock(&self.registry).replace_all(files);
        self.order = self.orderer.rebuild(count, self.shuffle);
        self.current = None;
        self.last_selection = Some(selection);

        if count == 0 {
            tracing::info!("No playable files found");
            LoadOutcome::Empty
        } else {
            tracing::info!("Loaded {} track(s)", count);
            LoadOutcome::Loaded {
                tracks: count,
                generation,
            }
        }
    }

    /// Load the last successful selection again.
    pub fn refresh(&mut self) -> LoadOutcome {
        match self.last_selection.clone() {
            Some(selection) => self.load(selection),
            None => LoadOutcome::Cancelled,
        }
    }

    /// Background task enriching the current generation. Loading another
    /// selection stops it at the next batch boundary.
    pub fn enrichment(&self) -> impl Future<Output = EnrichReport> + Send + 'static {
        let loader = Arc::clone(&self.loader);
        let registry = Arc::clone(&self.registry);
        let cancel = self.cancel.clone();
        let generation = lock(&self.registry).generation();
        async move {
            loader
                .enrich_generation(&registry, generation, &cancel)
                .await
        }
    }

    /// Shared registry, for readers that render it.
    pub fn registry(&self) -> RegistryHandle {
        Arc::clone(&self.registry)
    }

    pub fn track(&self, index: usize) -> Option<Track> {
        lock(&self.registry).get(index).cloned()
    }

    pub fn len(&self) -> usize {
        lock(&self.registry).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    /// Flip shuffle and recompute the order from scratch.
    pub fn toggle_shuffle(&mut self) {
        self.shuffle = !self.shuffle;
        let count = self.len();
        self.order = self.orderer.rebuild(count, self.shuffle);
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Make `index` the current track. Returns `false` for an unknown index.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.len() {
            self.current = Some(index);
            true
        } else {
            false
        }
    }

    /// Advance through the playback order, wrapping to the start.
    pub fn next(&mut self) -> Option<usize> {
        let next = match self.current {
            Some(c) => next_in(&self.order, c),
            None => self.order.first().copied(),
        };
        if next.is_some() {
            self.current = next;
        }
        next
    }

    /// Step back through the playback order, wrapping to the end.
    pub fn previous(&mut self) -> Option<usize> {
        let prev = match self.current {
            Some(c) => previous_in(&self.order, c),
            None => self.order.last().copied(),
        };
        if prev.is_some() {
            self.current = prev;
        }
        prev
    }

    /// Indices in playback order whose title, artist or file name contains
    /// `query` (case-insensitive). A blank query matches everything.
    pub fn search(&self, query: &str) -> Vec<usize> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.order.clone();
        }

        let registry = lock(&self.registry);
        self.order
            .iter()
            .copied()
            .filter(|&i| {
                registry.get(i).is_some_and(|t| {
                    [Some(&t.display_name), t.title.as_ref(), t.artist.as_ref()]
                        .into_iter()
                        .flatten()
                        .any(|field| field.to_lowercase().contains(&query))
                })
            })
            .collect()
    }
}
