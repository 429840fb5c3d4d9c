//! Form drafts and their validation.
//!
//! Drafts hold exactly what an administrator typed. Validation is stateless:
//! every field must be non-blank and dates must parse. Validated values are
//! trimmed. Whether the referenced
//! university exists is the store's concern.

use certify_types::{Certificate, NewCertificate, NewUniversity, University, UniversityId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AdminError;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniversityDraft {
    pub name: String,
    pub country: String,
}

impl UniversityDraft {
    /// Pre-fill a draft for editing.
    pub fn from_university(university: &University) -> Self {
        Self {
            name: university.name.clone(),
            country: university.country.clone(),
        }
    }

    pub fn validate(&self) -> Result<NewUniversity, AdminError> {
        require(&[("name", &self.name), ("country", &self.country)])?;
        Ok(NewUniversity {
            name: self.name.trim().to_string(),
            country: self.country.trim().to_string(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateDraft {
    pub student_name: String,
    pub university_id: String,
    pub degree: String,
    pub major: String,
    /// `YYYY-MM-DD`.
    pub graduation_date: String,
}

impl CertificateDraft {
    /// Pre-fill a draft for editing.
    pub fn from_certificate(certificate: &Certificate) -> Self {
        Self {
            student_name: certificate.student_name.clone(),
            university_id: certificate.university_id.to_string(),
            degree: certificate.degree.clone(),
            major: certificate.major.clone(),
            graduation_date: certificate.graduation_date.format(DATE_FORMAT).to_string(),
        }
    }

    pub fn validate(&self) -> Result<NewCertificate, AdminError> {
        require(&[
            ("studentName", &self.student_name),
            ("universityId", &self.university_id),
            ("degree", &self.degree),
            ("major", &self.major),
            ("graduationDate", &self.graduation_date),
        ])?;
        let graduation_date = NaiveDate::parse_from_str(self.graduation_date.trim(), DATE_FORMAT)
            .map_err(|_| AdminError::InvalidDate {
                field: "graduationDate",
                value: self.graduation_date.clone(),
            })?;
        Ok(NewCertificate {
            student_name: self.student_name.trim().to_string(),
            university_id: UniversityId::new(self.university_id.trim()),
            degree: self.degree.trim().to_string(),
            major: self.major.trim().to_string(),
            graduation_date,
        })
    }
}

/// Fail with every blank field listed, in form order.
fn require(fields: &[(&'static str, &String)]) -> Result<(), AdminError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AdminError::MissingFields { fields: missing })
    }
}
