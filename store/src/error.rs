use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("key not found: {0}")]
    NotFound(String),

    #[error("duplicate key: {0}")]
    Duplicate(String),

    #[error("university {0} does not exist")]
    UnknownUniversity(String),

    #[error("no free certificate id left for prefix {0}")]
    IdSpaceExhausted(String),
}
