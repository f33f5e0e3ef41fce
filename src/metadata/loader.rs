use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use futures_util::future::join_all;

use crate::library::FileRef;
use crate::registry::{Generation, RegistryHandle, TrackId, lock};

use super::reader::{LoftyTagReader, TagReader};

/// Cooperative stop flag for an enrichment task. Checked before each batch.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Summary of one enrichment run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichReport {
    /// Size of every batch that was started, in order.
    pub batch_sizes: Vec<usize>,
    pub enriched: usize,
    pub unresolved: usize,
    /// Set when the token was cancelled or the registry moved to a newer
    /// generation before all batches ran.
    pub stopped_early: bool,
}

enum Outcome {
    Enriched,
    Unresolved,
    Stale,
}

/// Reads tags for every pending track of a registry generation.
///
/// Tracks are processed in batches of `batch_size`: reads within a batch are
/// in flight together, batches run one after another.
pub struct MetadataLoader<R = LoftyTagReader> {
    reader: R,
    batch_size: usize,
}

impl MetadataLoader<LoftyTagReader> {
    pub fn new(batch_size: usize) -> Self {
        Self::with_reader(LoftyTagReader::new(), batch_size)
    }
}

impl<R: TagReader> MetadataLoader<R> {
    pub fn with_reader(reader: R, batch_size: usize) -> Self {
        Self {
            reader,
            batch_size: batch_size.max(1),
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Enrich every pending track in `registry`'s current generation.
    ///
    /// Never fails: a track whose bytes or tags cannot be read is marked
    /// unresolved and its siblings carry on.
    pub async fn enrich(&self, registry: &RegistryHandle, cancel: &CancelToken) -> EnrichReport {
        let generation = lock(registry).generation();
        self.enrich_generation(registry, generation, cancel).await
    }

    /// Like [`MetadataLoader::enrich`], but only for `generation`. Does
    /// nothing when the registry has already moved past it.
    pub async fn enrich_generation(
        &self,
        registry: &RegistryHandle,
        generation: Generation,
        cancel: &CancelToken,
    ) -> EnrichReport {
        let mut report = EnrichReport::default();
        let jobs = {
            let r = lock(registry);
            (r.generation() == generation).then(|| r.pending())
        };
        let Some(jobs) = jobs else {
            tracing::debug!("Skipping enrichment for a superseded folder load");
            report.stopped_early = true;
            return report;
        };

        for batch in jobs.chunks(self.batch_size) {
            let superseded = lock(registry).generation() != generation;
            if cancel.is_cancelled() || superseded {
                report.stopped_early = true;
                break;
            }

            report.batch_sizes.push(batch.len());
            let outcomes = join_all(
                batch
                    .iter()
                    .map(|(id, file)| self.enrich_one(registry, generation, *id, file)),
            )
            .await;

            for outcome in outcomes {
                match outcome {
                    Outcome::Enriched => report.enriched += 1,
                    Outcome::Unresolved => report.unresolved += 1,
                    Outcome::Stale => {}
                }
            }
        }

        if report.stopped_early {
            tracing::info!(
                "Metadata enrichment stopped after {} batch(es)",
                report.batch_sizes.len()
            );
        } else {
            tracing::info!(
                "Metadata enrichment done: {} enriched, {} without metadata",
                report.enriched,
                report.unresolved
            );
        }
        report
    }

    async fn enrich_one(
        &self,
        registry: &RegistryHandle,
        generation: Generation,
        id: TrackId,
        file: &FileRef,
    ) -> Outcome {
        let parsed = match self.reader.fetch(file).await {
            Ok(bytes) => self.reader.read(&bytes),
            Err(e) => Err(e.into()),
        };

        let mut r = lock(registry);
        match parsed {
            Ok(tags) => {
                if r.update_metadata(generation, id, tags.into()) {
                    Outcome::Enriched
                } else {
                    Outcome::Stale
                }
            }
            Err(e) => {
                tracing::debug!("No metadata for {}: {}", file.describe(), e);
                if r.mark_unresolved(generation, id) {
                    Outcome::Unresolved
                } else {
                    Outcome::Stale
                }
            }
        }
    }
}
