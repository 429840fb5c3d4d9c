//! Abstract storage traits for the certificate verification service.
//!
//! The in-process backend (`certify-store-memory`) implements these traits.
//! The verification engine and the admin coordinator depend only on the traits.

pub mod audit;
pub mod certificate;
pub mod error;
pub mod university;

pub use audit::AuditLogStore;
pub use certificate::CertificateStore;
pub use error::StoreError;
pub use university::UniversityStore;
