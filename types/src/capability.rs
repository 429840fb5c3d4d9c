//! External capabilities the core consumes but does not implement.
//!
//! QR decoding/scanning and document export are provided by outside tools.
//! The core only sees their results (a decoded string, an exported file) or
//! hands them inputs (the records to render).

use crate::error::ExternalToolError;
use crate::{Certificate, University};

/// Handle of a running live-camera scan session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScanHandle(pub u64);

/// A live QR scanner (camera stream).
///
/// Decoded payloads are delivered to the caller out of band; the core only
/// starts and stops sessions.
pub trait QrScanner {
    fn start(&mut self) -> Result<ScanHandle, ExternalToolError>;

    fn stop(&mut self, handle: ScanHandle) -> Result<(), ExternalToolError>;
}

/// Decodes a QR code contained in an uploaded image.
pub trait QrDecoder {
    fn decode(&self, image: &[u8]) -> Result<String, ExternalToolError>;
}

/// Rasterized rendering of a verified certificate.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedImage {
    pub width: f64,
    pub height: f64,
    pub png: Vec<u8>,
}

/// Where the image lands on the output page, in page units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Everything an exporter needs to produce the downloadable document.
#[derive(Clone, Debug)]
pub struct ExportRequest<'a> {
    pub certificate: &'a Certificate,
    pub university: &'a University,
    pub image: &'a RenderedImage,
    pub placement: Placement,
    pub file_name: String,
}

/// A finished document ready for download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Turns a rendered certificate into a fixed-page-size document.
pub trait DocumentExporter {
    fn export(&self, request: &ExportRequest<'_>) -> Result<ExportedDocument, ExternalToolError>;
}
