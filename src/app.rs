//! Application module: the session object owned by whatever shell drives
//! playback.
//!
//! `Session` lives in `app::model` and holds the track registry, the
//! playback order and the current position.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
