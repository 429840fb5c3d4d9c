//! Certificate verification.
//!
//! A lookup (typed identifier or decoded QR payload) enters the
//! [`VerificationEngine`], which resolves it against the certificate store and
//! appends exactly one audit entry per completed attempt. The
//! [`LookupDesk`] wraps the engine with the interactive concerns of a lookup
//! page: one lookup in flight at a time and an injectable artificial delay.
//! The [`ScanController`] keeps at most one live QR scan session running.

pub mod delay;
pub mod desk;
pub mod engine;
pub mod error;
pub mod scan;

pub use delay::{FixedDelay, LookupDelay, NoDelay};
pub use desk::{LookupDesk, PendingLookup};
pub use engine::VerificationEngine;
pub use error::VerificationError;
pub use scan::ScanController;
