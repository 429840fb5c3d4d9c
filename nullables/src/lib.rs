//! Nullable infrastructure for deterministic testing.
//!
//! Every outside dependency of the core (clock, randomness, QR scanner, QR
//! decoder, document exporter) sits behind a trait in `certify-types`. This
//! crate provides test-friendly implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Record what they were asked to do
//!
//! Usage: swap real implementations for nullables in tests.

pub mod clock;
pub mod exporter;
pub mod random;
pub mod scanner;

pub use clock::NullClock;
pub use exporter::NullExporter;
pub use random::NullRandom;
pub use scanner::{NullDecoder, NullScanner};
