//! Randomness used for certificate id suffixes.

use rand::Rng;

/// A source of uniformly distributed integers.
pub trait RandomSource {
    /// A value in the inclusive range `[low, high]`.
    fn next_in_range(&mut self, low: u32, high: u32) -> u32;
}

/// Thread-local RNG backed source.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        rand::thread_rng().gen_range(low..=high)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        (**self).next_in_range(low, high)
    }
}
