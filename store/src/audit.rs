//! Audit log storage trait.

use certify_types::{NewLogEntry, VerificationLog};

/// Append-only storage for verification attempts.
///
/// Entries are never updated or removed.
pub trait AuditLogStore {
    /// Assign a fresh id and the current timestamp, then add the entry at the tail.
    fn append(&mut self, entry: NewLogEntry) -> VerificationLog;

    /// Entries in insertion order.
    fn list(&self) -> Vec<VerificationLog>;

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
