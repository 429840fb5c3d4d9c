//! Verification audit records.

use crate::LogId;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one verification attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    Success,
    Failed,
}

impl VerificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Failed => "FAILED",
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One immutable audit record. Created exactly once per completed attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationLog {
    pub id: LogId,
    /// Canonical certificate id on success; the trimmed candidate verbatim on failure.
    pub certificate_id: String,
    pub timestamp: DateTime<Utc>,
    pub status: VerificationStatus,
    pub ip_address: String,
}

impl VerificationLog {
    /// ISO-8601 rendering with millisecond precision, e.g. `2024-05-01T09:30:00.000Z`.
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// What a caller hands to the audit log; id and timestamp are assigned on append.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewLogEntry {
    pub certificate_id: String,
    pub status: VerificationStatus,
    pub ip_address: String,
}
