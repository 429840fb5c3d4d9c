//! Validated mutations of the record store.
//!
//! Adds and updates validate the submitted draft before anything is written.
//! Deletes need confirmation; deleting a university removes its certificates
//! without a second confirmation.

use certify_store::{CertificateStore, StoreError, UniversityStore};
use certify_types::{Certificate, CertificateId, University, UniversityId};
use tracing::info;

use crate::confirm::{Confirm, DestructiveAction};
use crate::drafts::{CertificateDraft, UniversityDraft};
use crate::error::AdminError;

/// Result of a confirmed-or-not delete.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The caller declined; nothing changed.
    Cancelled,
    /// The record is gone, along with any certificates removed by cascade.
    Deleted { cascaded: Vec<CertificateId> },
}

impl DeleteOutcome {
    pub fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted { .. })
    }
}

/// Applies administrator edits to a store it borrows for the duration of
/// the operation.
pub struct CrudCoordinator<'a, S: ?Sized> {
    store: &'a mut S,
}

impl<'a, S> CrudCoordinator<'a, S>
where
    S: UniversityStore + CertificateStore + ?Sized,
{
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    pub fn add_university(&mut self, draft: &UniversityDraft) -> Result<University, AdminError> {
        let new = draft.validate()?;
        let university = self.store.add_university(new)?;
        info!(university_id = %university.id, name = %university.name, "university added");
        Ok(university)
    }

    /// Replace name and country of an existing university.
    pub fn update_university(
        &mut self,
        id: &UniversityId,
        draft: &UniversityDraft,
    ) -> Result<University, AdminError> {
        let new = draft.validate()?;
        let university = new.into_university(id.clone());
        self.store.update_university(university.clone())?;
        info!(university_id = %id, "university updated");
        Ok(university)
    }

    /// Delete a university and, unconditionally, every certificate it issued.
    pub fn delete_university(
        &mut self,
        id: &UniversityId,
        confirm: &mut dyn Confirm,
    ) -> Result<DeleteOutcome, AdminError> {
        if !confirm.confirm(&DestructiveAction::DeleteUniversity(id.clone())) {
            return Ok(DeleteOutcome::Cancelled);
        }
        let cascaded = self.store.delete_university(id)?;
        info!(university_id = %id, cascaded = cascaded.len(), "university deleted");
        Ok(DeleteOutcome::Deleted { cascaded })
    }

    /// Issue a certificate. The referenced university must exist now.
    pub fn add_certificate(&mut self, draft: &CertificateDraft) -> Result<Certificate, AdminError> {
        let new = draft.validate()?;
        let certificate = self.store.add_certificate(new)?;
        info!(certificate_id = %certificate.id, "certificate added");
        Ok(certificate)
    }

    /// Replace the editable fields of a certificate.
    ///
    /// The id, issue date and QR url are kept. The university reference is
    /// taken as submitted and not checked against the store.
    pub fn update_certificate(
        &mut self,
        id: &CertificateId,
        draft: &CertificateDraft,
    ) -> Result<Certificate, AdminError> {
        let new = draft.validate()?;
        let existing = self
            .store
            .get_certificate(id.as_str())
            .ok_or_else(|| AdminError::Store(StoreError::NotFound(id.to_string())))?;
        let updated = new.into_certificate(existing.id, existing.issue_date, existing.qr_code_url);
        self.store.update_certificate(updated.clone())?;
        info!(certificate_id = %updated.id, "certificate updated");
        Ok(updated)
    }

    pub fn delete_certificate(
        &mut self,
        id: &CertificateId,
        confirm: &mut dyn Confirm,
    ) -> Result<DeleteOutcome, AdminError> {
        if !confirm.confirm(&DestructiveAction::DeleteCertificate(id.clone())) {
            return Ok(DeleteOutcome::Cancelled);
        }
        self.store.delete_certificate(id)?;
        info!(certificate_id = %id, "certificate deleted");
        Ok(DeleteOutcome::Deleted {
            cascaded: Vec::new(),
        })
    }
}
