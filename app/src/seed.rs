//! Seed records loaded at startup.

use serde::{Deserialize, Serialize};
use std::path::Path;

use certify_store_memory::RecordStore;
use certify_types::{Certificate, University};
use tracing::info;

use crate::AppError;

const BUILTIN_SEED: &str = include_str!("../seed.toml");

/// Universities and certificates with fixed identities.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub universities: Vec<University>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
}

impl SeedData {
    /// The records compiled into the binary.
    pub fn builtin() -> Result<Self, AppError> {
        Self::from_toml_str(BUILTIN_SEED)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, AppError> {
        toml::from_str(s).map_err(|e| AppError::Seed(e.to_string()))
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Seed(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Load `path` if given, the built-in records otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(path) => Self::from_toml_file(path),
            None => Self::builtin(),
        }
    }

    /// Insert every record into `store`. Universities go first so that
    /// certificates can reference them.
    pub fn apply(self, store: &mut RecordStore) -> Result<(), AppError> {
        let (universities, certificates) = (self.universities.len(), self.certificates.len());
        for university in self.universities {
            store.seed_university(university)?;
        }
        for certificate in self.certificates {
            store.seed_certificate(certificate)?;
        }
        info!(universities, certificates, "seed data loaded");
        Ok(())
    }
}
