//! Linear and shuffled playback orders over registry indices.
//!
//! An order is a plain permutation. It does not know which track is
//! playing; the caller keeps that position and steps through the order with
//! [`next_in`] / [`previous_in`].

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

pub struct PlaybackOrder {
    rng: StdRng,
}

impl Default for PlaybackOrder {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackOrder {
    /// Order generator seeded from the thread-local RNG.
    pub fn new() -> Self {
        Self::seeded(rand::random())
    }

    /// Reproducible order generator.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Compute a fresh order for `count` tracks.
    ///
    /// Without shuffle this is `0..count`. With shuffle it is a uniformly
    /// random permutation: Fisher-Yates, swapping position `i` with a uniform
    /// pick from `0..=i` for `i` from the last index down to 1.
    pub fn rebuild(&mut self, count: usize, shuffle: bool) -> Vec<usize> {
        let mut order: Vec<usize> = (0..count).collect();
        if shuffle {
            for i in (1..count).rev() {
                let j = self.rng.random_range(0..=i);
                order.swap(i, j);
            }
        }
        order
    }
}

/// Entry after `current` in `order`, wrapping to the start.
/// An index missing from the order restarts at the first entry.
pub fn next_in(order: &[usize], current: usize) -> Option<usize> {
    if order.is_empty() {
        return None;
    }

    match order.iter().position(|&i| i == current) {
        Some(p) => Some(order[(p + 1) % order.len()]),
        None => Some(order[0]),
    }
}

/// Entry before `current` in `order`, wrapping to the end.
/// An index missing from the order restarts at the last entry.
pub fn previous_in(order: &[usize], current: usize) -> Option<usize> {
    if order.is_empty() {
        return None;
    }

    match order.iter().position(|&i| i == current) {
        Some(0) | None => Some(order[order.len() - 1]),
        Some(p) => Some(order[p - 1]),
    }
}
