//! Simulated lookup latency.
//!
//! The delay is a UX affordance only; tests use [`NoDelay`].

use std::time::Duration;

/// How long a lookup waits before resolving.
pub trait LookupDelay {
    fn duration(&self) -> Duration;
}

/// Resolve immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay;

impl LookupDelay for NoDelay {
    fn duration(&self) -> Duration {
        Duration::ZERO
    }
}

/// Wait a fixed amount of time.
#[derive(Clone, Copy, Debug)]
pub struct FixedDelay(pub Duration);

impl FixedDelay {
    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }
}

impl LookupDelay for FixedDelay {
    fn duration(&self) -> Duration {
        self.0
    }
}
