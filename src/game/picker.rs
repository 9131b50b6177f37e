//! Target word selection
//!
//! Defines the `WordPicker` trait and concrete implementations.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// A source of target word indices
pub trait WordPicker {
    /// Pick an index in `0..len`
    ///
    /// `len` is always at least 1. Implementations returning an index past the
    /// end are reduced modulo `len` by the caller.
    fn pick(&mut self, len: usize) -> usize;
}

impl<P: WordPicker + ?Sized> WordPicker for &mut P {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

impl<P: WordPicker + ?Sized> WordPicker for Box<P> {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Uniform random selection
pub struct RngPicker<R: Rng> {
    rng: R,
}

impl<R: Rng> RngPicker<R> {
    /// Wrap an existing random number generator
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngPicker<ThreadRng> {
    /// Picker backed by the thread-local generator
    #[must_use]
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl RngPicker<StdRng> {
    /// Reproducible picker: the same seed yields the same sequence of targets
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> WordPicker for RngPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Replays a fixed sequence of indices, wrapping around at the end
///
/// An empty sequence always picks index 0.
#[derive(Debug, Clone, Default)]
pub struct FixedPicker {
    indices: Vec<usize>,
    next: usize,
}

impl FixedPicker {
    #[must_use]
    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self {
            indices: indices.into(),
            next: 0,
        }
    }

    /// Always pick the same index
    #[must_use]
    pub fn always(index: usize) -> Self {
        Self::new(vec![index])
    }
}

impl WordPicker for FixedPicker {
    fn pick(&mut self, _len: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let index = self.indices[self.next % self.indices.len()];
        self.next += 1;
        index
    }
}
