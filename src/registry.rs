//! Track registry: the current generation of tracks and their metadata.
//!
//! The registry is rebuilt wholesale on every folder load. Each rebuild bumps
//! the generation counter; metadata updates carry the generation they were
//! captured for and are dropped when it no longer matches.

mod model;

pub use model::*;
