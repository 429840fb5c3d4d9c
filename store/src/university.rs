//! University storage trait.

use crate::StoreError;
use certify_types::{CertificateId, NewUniversity, University, UniversityId};

/// Trait for university storage operations.
pub trait UniversityStore {
    /// All universities in insertion order.
    fn list_universities(&self) -> Vec<University>;

    fn get_university(&self, id: &UniversityId) -> Option<University>;

    /// Store a new university under a freshly generated id.
    fn add_university(&mut self, data: NewUniversity) -> Result<University, StoreError>;

    /// Replace the university with the same id.
    fn update_university(&mut self, university: University) -> Result<(), StoreError>;

    /// Remove a university and every certificate that references it.
    ///
    /// Returns the ids of the certificates removed by the cascade.
    fn delete_university(&mut self, id: &UniversityId) -> Result<Vec<CertificateId>, StoreError>;

    fn university_count(&self) -> usize {
        self.list_universities().len()
    }
}
