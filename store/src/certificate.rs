//! Certificate storage trait.

use crate::StoreError;
use certify_types::{Certificate, CertificateId, NewCertificate};

/// Trait for certificate storage operations.
pub trait CertificateStore {
    /// All certificates in insertion order.
    fn list_certificates(&self) -> Vec<Certificate>;

    /// Case-insensitive exact match on the id after trimming whitespace.
    fn get_certificate(&self, candidate: &str) -> Option<Certificate>;

    /// Issue a certificate: generates the id, issue date and QR url.
    ///
    /// The referenced university must exist at this moment.
    fn add_certificate(&mut self, data: NewCertificate) -> Result<Certificate, StoreError>;

    /// Replace every field of the certificate whose id matches, keeping the
    /// stored id. Ids match as in [`get_certificate`](Self::get_certificate).
    ///
    /// The university reference is not re-checked.
    fn update_certificate(&mut self, certificate: Certificate) -> Result<(), StoreError>;

    /// Ids match as in [`get_certificate`](Self::get_certificate).
    fn delete_certificate(&mut self, id: &CertificateId) -> Result<(), StoreError>;

    fn certificate_count(&self) -> usize {
        self.list_certificates().len()
    }
}
