//! Identifier newtypes.
//!
//! Identifiers are opaque strings. The store generates them; callers only ever
//! compare, display, or embed them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a [`University`](crate::University), e.g. `u1718000000000`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UniversityId(String);

impl UniversityId {
    /// Prefix used for generated university ids.
    pub const PREFIX: &'static str = "u";

    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Build the id for a numeric generation token.
    pub fn from_token(token: u64) -> Self {
        Self(format!("{}{token}", Self::PREFIX))
    }

    /// The numeric token of a generated id, if this id has the generated shape.
    pub fn token(&self) -> Option<u64> {
        self.0.strip_prefix(Self::PREFIX)?.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UniversityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for UniversityId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for UniversityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Public lookup key of a [`Certificate`](crate::Certificate).
///
/// Generated ids have the shape `{MAJOR2}-{UNIVERSITY}-{YEAR}-{NNN}`, for example
/// `CO-MIT-2024-417`. The stored casing is canonical; lookups ignore case.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CertificateId(String);

impl CertificateId {
    /// Smallest random suffix of a generated id.
    pub const SUFFIX_MIN: u32 = 100;
    /// Largest random suffix of a generated id.
    pub const SUFFIX_MAX: u32 = 999;

    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Compose a generated id from its parts.
    ///
    /// The major contributes its first two characters, the university id is
    /// used whole; both are uppercased.
    pub fn compose(major: &str, university: &UniversityId, year: i32, suffix: u32) -> Self {
        let prefix: String = major.trim().chars().take(2).collect();
        Self(format!(
            "{}-{}-{year:04}-{suffix:03}",
            prefix.to_uppercase(),
            university.as_str().to_uppercase(),
        ))
    }

    /// Case-insensitive, whitespace-trimmed comparison against a candidate.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.to_lowercase() == candidate.trim().to_lowercase()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CertificateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for CertificateId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CertificateId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Identifier of a [`VerificationLog`](crate::VerificationLog) entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogId(String);

impl LogId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Build a log id from the append moment and a per-log sequence number.
    pub fn generate(unix_millis: i64, sequence: u64) -> Self {
        Self(format!("log-{unix_millis}-{sequence}"))
    }

    /// First `len` characters followed by `...`, as shown in log tables.
    pub fn abbreviated(&self, len: usize) -> String {
        let head: String = self.0.chars().take(len).collect();
        format!("{head}...")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_follows_documented_shape() {
        let id = CertificateId::compose("Computer Science", &UniversityId::new("mit"), 2024, 417);
        assert_eq!(id.as_str(), "CO-MIT-2024-417");
    }

    #[test]
    fn compose_keeps_single_character_major() {
        let id = CertificateId::compose("x", &UniversityId::new("u1"), 2025, 100);
        assert_eq!(id.as_str(), "X-U1-2025-100");
    }

    #[test]
    fn matches_ignores_case_and_surrounding_whitespace() {
        let id = CertificateId::new("CS-MIT-2023-123");
        assert!(id.matches("cs-mit-2023-123"));
        assert!(id.matches("  CS-mit-2023-123\n"));
        assert!(!id.matches("CS-MIT-2023-12"));
        assert!(!id.matches("CS MIT 2023 123"));
    }

    #[test]
    fn university_token_round_trips() {
        let id = UniversityId::from_token(1_718_000_000_000);
        assert_eq!(id.as_str(), "u1718000000000");
        assert_eq!(id.token(), Some(1_718_000_000_000));
        assert_eq!(UniversityId::new("mit").token(), None);
    }

    #[test]
    fn log_id_abbreviation() {
        let id = LogId::generate(1_700_000_000_000, 3);
        assert_eq!(id.as_str(), "log-1700000000000-3");
        assert_eq!(id.abbreviated(8), "log-1700...");
    }
}
