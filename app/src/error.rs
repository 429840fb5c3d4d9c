use thiserror::Error;

use crate::export::ExportError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("verification error: {0}")]
    Verification(#[from] certify_verification::VerificationError),

    #[error("admin error: {0}")]
    Admin(#[from] certify_admin::AdminError),

    #[error("store error: {0}")]
    Store(#[from] certify_store::StoreError),

    #[error("export error: {0}")]
    Export(#[from] ExportError),

    #[error("config error: {0}")]
    Config(String),

    #[error("seed data error: {0}")]
    Seed(String),
}
