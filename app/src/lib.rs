//! Certificate verification application.
//!
//! Wires the record store, audit log, verification desk, QR scanning and the
//! administrator session into one [`App`], and provides what a front end
//! needs around it: configuration, logging, seed data, the dashboard, the
//! certificate details view, document export and display locales.

pub mod app;
pub mod config;
pub mod dashboard;
pub mod details;
pub mod error;
pub mod export;
pub mod locale;
pub mod logging;
pub mod seed;

pub use app::App;
pub use config::AppConfig;
pub use dashboard::{CertificateRow, Dashboard, LogRow, Stats};
pub use details::CertificateView;
pub use error::AppError;
pub use export::{ExportError, ExportSlot};
pub use locale::{Locale, Text, TextDirection};
pub use logging::{init_logging, LogFormat};
pub use seed::SeedData;
