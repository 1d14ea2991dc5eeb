//! This module contains the number generation role of the game: the trait that abstracts where the
//! secret number comes from, and the production implementation backed by a pseudo-random source.
//!
//! The game loop only ever sees the trait, so tests can substitute a generator that returns a
//! preprogrammed sequence instead of a random one.

use fastrand::Rng;

/// This trait abstracts the source of the secret number. The production implementation draws from
/// a random number generator, while tests provide deterministic substitutes.
pub(crate) trait NumberGenerator {
    /// This function produces a uniformly distributed integer in the inclusive range
    /// `[min, max]`.
    fn generate(&mut self, min: i32, max: i32) -> i32;
}

/// This struct is the production number generator. It owns its rng instance so the thread-local
/// generator doesn't have to be consulted on every call.
pub(crate) struct RandomNumberGenerator {
    /// This field holds the pseudo-random source the secret numbers are drawn from.
    rng: Rng,
}

impl RandomNumberGenerator {
    /// This function creates a generator with a freshly seeded rng instance.
    pub(crate) fn new() -> Self {
        Self { rng: Rng::new() }
    }
}

impl NumberGenerator for RandomNumberGenerator {
    fn generate(&mut self, min: i32, max: i32) -> i32 {
        self.rng.i32(min..=max)
    }
}

/// This struct is a deterministic generator for tests. It hands out the values it was constructed
/// with, in order, ignoring the requested range.
#[cfg(test)]
pub(crate) struct SequenceGenerator {
    /// This field holds the preprogrammed values still to be returned, in reverse order so the
    /// next one can be popped off the end.
    values: Vec<i32>,
}

#[cfg(test)]
impl SequenceGenerator {
    /// This function creates a generator that will return the given values in the given order.
    pub(crate) fn new(values: &[i32]) -> Self {
        let mut values = values.to_vec();
        values.reverse();
        Self { values }
    }
}

#[cfg(test)]
impl NumberGenerator for SequenceGenerator {
    fn generate(&mut self, _min: i32, _max: i32) -> i32 {
        // an exhausted sequence is a broken test, not a runtime condition
        self.values.pop().unwrap()
    }
}
