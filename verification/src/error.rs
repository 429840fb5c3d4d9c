use certify_types::ExternalToolError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VerificationError {
    #[error("a certificate id is required")]
    Required,

    #[error("no certificate matches {candidate:?}")]
    NotFound { candidate: String },

    #[error("a lookup is already in progress")]
    LookupInFlight,

    #[error("QR scan failed: {0}")]
    Scan(#[from] ExternalToolError),
}
