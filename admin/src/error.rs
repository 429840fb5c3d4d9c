use certify_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdminError {
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("administrator login required")]
    NotLoggedIn,

    #[error("missing required fields: {}", fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },

    #[error("invalid date for {field}: {value:?} (expected YYYY-MM-DD)")]
    InvalidDate { field: &'static str, value: String },

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
