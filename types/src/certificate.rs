//! Academic certificate records.

use crate::{CertificateId, UniversityId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An academic credential, verifiable by its id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    /// Public lookup key; immutable once issued.
    pub id: CertificateId,
    pub student_name: String,
    /// Issuing university. Checked only when the certificate is created.
    pub university_id: UniversityId,
    pub degree: String,
    pub major: String,
    pub graduation_date: NaiveDate,
    /// Calendar date the record was created; never supplied by an administrator.
    pub issue_date: NaiveDate,
    /// QR image URL with the id embedded.
    pub qr_code_url: String,
}

/// Fields supplied by an administrator when adding a certificate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCertificate {
    pub student_name: String,
    pub university_id: UniversityId,
    pub degree: String,
    pub major: String,
    pub graduation_date: NaiveDate,
}

impl NewCertificate {
    /// Complete the record with the store-generated parts.
    pub fn into_certificate(
        self,
        id: CertificateId,
        issue_date: NaiveDate,
        qr_code_url: String,
    ) -> Certificate {
        Certificate {
            id,
            student_name: self.student_name,
            university_id: self.university_id,
            degree: self.degree,
            major: self.major,
            graduation_date: self.graduation_date,
            issue_date,
            qr_code_url,
        }
    }
}
