//! In-memory university and certificate collections.

use certify_store::{CertificateStore, StoreError, UniversityStore};
use certify_types::{
    Certificate, CertificateId, NewCertificate, NewUniversity, University, UniversityId,
};
use tracing::debug;

use crate::IdGenerator;

/// Universities and certificates in insertion order, plus the rules for
/// generating their identities.
pub struct RecordStore {
    universities: Vec<University>,
    certificates: Vec<Certificate>,
    ids: IdGenerator,
}

impl RecordStore {
    pub fn new(ids: IdGenerator) -> Self {
        Self {
            universities: Vec::new(),
            certificates: Vec::new(),
            ids,
        }
    }

    /// Insert a university with a pre-assigned id (seed data).
    pub fn seed_university(&mut self, university: University) -> Result<(), StoreError> {
        if self.position_of_university(&university.id).is_some() {
            return Err(StoreError::Duplicate(university.id.to_string()));
        }
        self.ids.observe_university(&university.id);
        self.universities.push(university);
        Ok(())
    }

    /// Insert a fully formed certificate (seed data).
    ///
    /// The id must be free and the university must exist.
    pub fn seed_certificate(&mut self, certificate: Certificate) -> Result<(), StoreError> {
        if self.position_of_certificate(certificate.id.as_str()).is_some() {
            return Err(StoreError::Duplicate(certificate.id.to_string()));
        }
        self.require_university(&certificate.university_id)?;
        self.certificates.push(certificate);
        Ok(())
    }

    fn position_of_university(&self, id: &UniversityId) -> Option<usize> {
        self.universities.iter().position(|u| &u.id == id)
    }

    fn position_of_certificate(&self, candidate: &str) -> Option<usize> {
        self.certificates.iter().position(|c| c.id.matches(candidate))
    }

    fn require_university(&self, id: &UniversityId) -> Result<(), StoreError> {
        match self.position_of_university(id) {
            Some(_) => Ok(()),
            None => Err(StoreError::UnknownUniversity(id.to_string())),
        }
    }
}

impl UniversityStore for RecordStore {
    fn list_universities(&self) -> Vec<University> {
        self.universities.clone()
    }

    fn get_university(&self, id: &UniversityId) -> Option<University> {
        self.position_of_university(id)
            .map(|i| self.universities[i].clone())
    }

    fn add_university(&mut self, data: NewUniversity) -> Result<University, StoreError> {
        let mut id = self.ids.next_university_id();
        while self.position_of_university(&id).is_some() {
            id = self.ids.next_university_id();
        }
        let university = data.into_university(id);
        debug!(university_id = %university.id, "university stored");
        self.universities.push(university.clone());
        Ok(university)
    }

    fn update_university(&mut self, university: University) -> Result<(), StoreError> {
        let i = self
            .position_of_university(&university.id)
            .ok_or_else(|| StoreError::NotFound(university.id.to_string()))?;
        self.universities[i] = university;
        Ok(())
    }

    fn delete_university(&mut self, id: &UniversityId) -> Result<Vec<CertificateId>, StoreError> {
        let i = self
            .position_of_university(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        self.universities.remove(i);

        let mut cascaded = Vec::new();
        self.certificates.retain(|c| {
            if &c.university_id == id {
                cascaded.push(c.id.clone());
                false
            } else {
                true
            }
        });
        debug!(university_id = %id, cascaded = cascaded.len(), "university removed");
        Ok(cascaded)
    }

    fn university_count(&self) -> usize {
        self.universities.len()
    }
}

impl CertificateStore for RecordStore {
    fn list_certificates(&self) -> Vec<Certificate> {
        self.certificates.clone()
    }

    fn get_certificate(&self, candidate: &str) -> Option<Certificate> {
        self.position_of_certificate(candidate)
            .map(|i| self.certificates[i].clone())
    }

    fn add_certificate(&mut self, data: NewCertificate) -> Result<Certificate, StoreError> {
        self.require_university(&data.university_id)?;

        let certificates = &self.certificates;
        let id = self
            .ids
            .next_certificate_id(&data.major, &data.university_id, |candidate| {
                certificates.iter().any(|c| c.id.matches(candidate.as_str()))
            })
            .ok_or_else(|| {
                StoreError::IdSpaceExhausted(format!(
                    "{}-{}",
                    data.major.trim().chars().take(2).collect::<String>().to_uppercase(),
                    data.university_id.as_str().to_uppercase()
                ))
            })?;

        let issue_date = self.ids.issue_date();
        let qr_code_url = self.ids.qr_code_url(&id);
        let certificate = data.into_certificate(id, issue_date, qr_code_url);
        debug!(certificate_id = %certificate.id, "certificate stored");
        self.certificates.push(certificate.clone());
        Ok(certificate)
    }

    fn update_certificate(&mut self, mut certificate: Certificate) -> Result<(), StoreError> {
        let i = self
            .position_of_certificate(certificate.id.as_str())
            .ok_or_else(|| StoreError::NotFound(certificate.id.to_string()))?;
        certificate.id = self.certificates[i].id.clone();
        self.certificates[i] = certificate;
        Ok(())
    }

    fn delete_certificate(&mut self, id: &CertificateId) -> Result<(), StoreError> {
        let i = self
            .position_of_certificate(id.as_str())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        self.certificates.remove(i);
        Ok(())
    }

    fn certificate_count(&self) -> usize {
        self.certificates.len()
    }
}
