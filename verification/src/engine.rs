//! Verification engine: resolves a candidate id and records the attempt.

use certify_store::{AuditLogStore, CertificateStore};
use certify_types::{Certificate, NewLogEntry, VerificationStatus};
use tracing::{info, warn};

use crate::error::VerificationError;

/// Resolves candidate identifiers against the certificate store.
///
/// Every completed attempt appends exactly one entry to the audit log.
/// Empty input is rejected before the store is consulted and leaves no trace.
#[derive(Clone, Debug)]
pub struct VerificationEngine {
    /// Address recorded on audit entries.
    client_address: String,
}

impl VerificationEngine {
    pub fn new(client_address: impl Into<String>) -> Self {
        Self {
            client_address: client_address.into(),
        }
    }

    pub fn client_address(&self) -> &str {
        &self.client_address
    }

    /// Reject blank input without touching the store.
    pub fn validate(raw: &str) -> Result<&str, VerificationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(VerificationError::Required);
        }
        Ok(trimmed)
    }

    /// Look up `raw` and log the attempt.
    ///
    /// On a match the audit entry carries the stored (canonical) id; on a miss
    /// it carries the trimmed input as submitted.
    pub fn verify<S, L>(
        &self,
        store: &S,
        log: &mut L,
        raw: &str,
    ) -> Result<Certificate, VerificationError>
    where
        S: CertificateStore + ?Sized,
        L: AuditLogStore + ?Sized,
    {
        let candidate = Self::validate(raw)?;

        match store.get_certificate(candidate) {
            Some(certificate) => {
                log.append(NewLogEntry {
                    certificate_id: certificate.id.to_string(),
                    status: VerificationStatus::Success,
                    ip_address: self.client_address.clone(),
                });
                info!(certificate_id = %certificate.id, status = "SUCCESS", "certificate verified");
                Ok(certificate)
            }
            None => {
                log.append(NewLogEntry {
                    certificate_id: candidate.to_string(),
                    status: VerificationStatus::Failed,
                    ip_address: self.client_address.clone(),
                });
                warn!(certificate_id = %candidate, status = "FAILED", "certificate not found");
                Err(VerificationError::NotFound {
                    candidate: candidate.to_string(),
                })
            }
        }
    }
}
