//! In-process storage backend.
//!
//! Implements the traits from `certify-store` over plain vectors. Nothing is
//! persisted; a restart starts from the seed data again.

pub mod audit;
pub mod ids;
pub mod records;

pub use audit::MemoryAuditLog;
pub use ids::IdGenerator;
pub use records::RecordStore;
