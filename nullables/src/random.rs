//! Nullable random: deterministic number generation.

use certify_types::RandomSource;

/// A deterministic random source for testing.
///
/// Returns pre-configured values in order, cycling when exhausted. Values
/// are clamped into the requested range.
pub struct NullRandom {
    outputs: Vec<u32>,
    index: usize,
}

impl NullRandom {
    /// Create with a sequence of deterministic values.
    pub fn new(outputs: Vec<u32>) -> Self {
        assert!(!outputs.is_empty(), "NullRandom needs at least one value");
        Self { outputs, index: 0 }
    }

    /// Create with a single value that will be returned for every call.
    pub fn constant(value: u32) -> Self {
        Self::new(vec![value])
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.index
    }
}

impl RandomSource for NullRandom {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        let value = self.outputs[self.index % self.outputs.len()];
        self.index += 1;
        value.clamp(low, high)
    }
}
