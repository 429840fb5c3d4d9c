//! Append-only in-memory audit log.

use std::rc::Rc;

use certify_store::AuditLogStore;
use certify_types::{Clock, LogId, NewLogEntry, VerificationLog};

/// Verification attempts in the order they happened.
pub struct MemoryAuditLog {
    clock: Rc<dyn Clock>,
    entries: Vec<VerificationLog>,
    sequence: u64,
}

impl MemoryAuditLog {
    pub fn new(clock: Rc<dyn Clock>) -> Self {
        Self {
            clock,
            entries: Vec::new(),
            sequence: 0,
        }
    }

    /// Borrow the entries without cloning.
    pub fn entries(&self) -> &[VerificationLog] {
        &self.entries
    }
}

impl AuditLogStore for MemoryAuditLog {
    fn append(&mut self, entry: NewLogEntry) -> VerificationLog {
        let timestamp = self.clock.now();
        self.sequence += 1;
        let log = VerificationLog {
            id: LogId::generate(timestamp.timestamp_millis(), self.sequence),
            certificate_id: entry.certificate_id,
            timestamp,
            status: entry.status,
            ip_address: entry.ip_address,
        };
        self.entries.push(log.clone());
        log
    }

    fn list(&self) -> Vec<VerificationLog> {
        self.entries.clone()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
