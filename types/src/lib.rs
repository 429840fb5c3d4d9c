//! Fundamental types for the certificate verification service.
//!
//! This crate defines the records shared across every other crate in the workspace:
//! universities, certificates, verification log entries and their identifiers,
//! the clock/randomness seams that id generation depends on, and the interfaces
//! of the external tools (QR scanning, document export) the core talks to.

pub mod capability;
pub mod certificate;
pub mod error;
pub mod ids;
pub mod log;
pub mod random;
pub mod time;
pub mod university;

pub use capability::{
    DocumentExporter, ExportRequest, ExportedDocument, Placement, QrDecoder, QrScanner,
    RenderedImage, ScanHandle,
};
pub use certificate::{Certificate, NewCertificate};
pub use error::ExternalToolError;
pub use ids::{CertificateId, LogId, UniversityId};
pub use log::{NewLogEntry, VerificationLog, VerificationStatus};
pub use random::{RandomSource, ThreadRandom};
pub use time::{Clock, SystemClock};
pub use university::{NewUniversity, University};
