//! Issuing institutions.

use crate::UniversityId;
use serde::{Deserialize, Serialize};

/// An institution that issues certificates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct University {
    pub id: UniversityId,
    pub name: String,
    pub country: String,
}

/// Fields supplied by an administrator when adding a university.
/// The id is assigned by the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUniversity {
    pub name: String,
    pub country: String,
}

impl NewUniversity {
    /// Attach a generated id.
    pub fn into_university(self, id: UniversityId) -> University {
        University {
            id,
            name: self.name,
            country: self.country,
        }
    }
}
