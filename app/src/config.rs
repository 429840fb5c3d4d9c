//! Application configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::locale::Locale;
use crate::logging::LogFormat;
use crate::AppError;

/// Configuration for a certificate verification instance.
///
/// Can be loaded from a TOML file via [`AppConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Administrator username accepted by the static authenticator.
    #[serde(default = "default_admin_username")]
    pub admin_username: String,

    /// Administrator password accepted by the static authenticator.
    #[serde(default = "default_admin_password")]
    pub admin_password: String,

    /// Simulated lookup latency in milliseconds. `0` resolves immediately.
    #[serde(default = "default_lookup_delay_ms")]
    pub lookup_delay_ms: u64,

    /// QR image service; the certificate id is appended.
    #[serde(default = "default_qr_service_url")]
    pub qr_service_url: String,

    /// Address recorded on audit entries for local lookups.
    #[serde(default = "default_client_address")]
    pub client_address: String,

    /// Initial display language.
    #[serde(default)]
    pub locale: Locale,

    /// Seed file to load instead of the built-in records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_file: Option<PathBuf>,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_admin_username() -> String {
    certify_admin::StaticAuthenticator::DEFAULT_USERNAME.to_string()
}

fn default_admin_password() -> String {
    certify_admin::StaticAuthenticator::DEFAULT_PASSWORD.to_string()
}

fn default_lookup_delay_ms() -> u64 {
    1500
}

fn default_qr_service_url() -> String {
    certify_store_memory::ids::DEFAULT_QR_SERVICE_URL.to_string()
}

fn default_client_address() -> String {
    "192.168.1.1".to_string()
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, AppError> {
        toml::from_str(s).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, AppError> {
        toml::to_string_pretty(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// The configured log format; anything but "json" is human-readable.
    pub fn log_format(&self) -> LogFormat {
        if self.log_format.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Human
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            admin_username: default_admin_username(),
            admin_password: default_admin_password(),
            lookup_delay_ms: default_lookup_delay_ms(),
            qr_service_url: default_qr_service_url(),
            client_address: default_client_address(),
            locale: Locale::default(),
            seed_file: None,
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}
