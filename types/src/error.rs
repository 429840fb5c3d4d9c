//! Errors raised by external tools (scanner, decoder, exporter).

use thiserror::Error;

/// Failure of an outside capability. Always recoverable: core state is
/// untouched and the user may retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExternalToolError {
    #[error("capability unavailable: {0}")]
    Unavailable(String),

    #[error("unable to start camera: {0}")]
    Camera(String),

    #[error("no QR code could be decoded: {0}")]
    Decode(String),

    #[error("document export failed: {0}")]
    Export(String),
}
