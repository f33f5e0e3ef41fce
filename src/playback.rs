mod order;

pub use order::{PlaybackOrder, next_in, previous_in};

#[cfg(test)]
mod tests;
