//! Nullable document exporter: records export requests instead of rendering.

use certify_types::{
    DocumentExporter, ExportRequest, ExportedDocument, ExternalToolError, Placement,
};
use std::cell::RefCell;

/// One recorded export call.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportCall {
    pub certificate_id: String,
    pub university_name: String,
    pub file_name: String,
    pub placement: Placement,
}

/// An exporter that produces a tiny placeholder document and remembers
/// what it was asked to export.
#[derive(Default)]
pub struct NullExporter {
    calls: RefCell<Vec<ExportCall>>,
    fail: Option<String>,
}

impl NullExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail: Some(reason.into()),
        }
    }

    /// All export calls so far (for assertions).
    pub fn calls(&self) -> Vec<ExportCall> {
        self.calls.borrow().clone()
    }
}

impl DocumentExporter for NullExporter {
    fn export(&self, request: &ExportRequest<'_>) -> Result<ExportedDocument, ExternalToolError> {
        self.calls.borrow_mut().push(ExportCall {
            certificate_id: request.certificate.id.to_string(),
            university_name: request.university.name.clone(),
            file_name: request.file_name.clone(),
            placement: request.placement,
        });
        if let Some(reason) = &self.fail {
            return Err(ExternalToolError::Export(reason.clone()));
        }
        Ok(ExportedDocument {
            file_name: request.file_name.clone(),
            bytes: b"%PDF-null".to_vec(),
        })
    }
}
