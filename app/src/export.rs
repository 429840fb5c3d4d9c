//! Downloadable document export of a verified certificate.
//!
//! The rendered certificate image is placed on a single A4 portrait page
//! (in px units) and handed to a [`DocumentExporter`]. One export at a time.

use std::cell::Cell;

use certify_types::{
    CertificateId, DocumentExporter, ExportRequest, ExportedDocument, ExternalToolError,
    Placement, RenderedImage,
};
use thiserror::Error;
use tracing::{info, warn};

use crate::details::CertificateView;

/// A4 portrait width in px.
pub const A4_WIDTH_PX: f64 = 446.46;
/// A4 portrait height in px.
pub const A4_HEIGHT_PX: f64 = 631.4175;
/// Total horizontal (or vertical) margin taken off the fitted image.
pub const PAGE_MARGIN_PX: f64 = 20.0;
/// Distance from the top edge of the page to the image.
pub const TOP_OFFSET_PX: f64 = 10.0;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ExportError {
    #[error("an export is already in progress")]
    InProgress,

    #[error("no verified certificate to export")]
    NothingSelected,

    #[error("rendered image has no area ({width}x{height})")]
    EmptyImage { width: f64, height: f64 },

    #[error("exporter failed: {0}")]
    Tool(#[from] ExternalToolError),
}

/// `Certificate-{id}.pdf`.
pub fn file_name(id: &CertificateId) -> String {
    format!("Certificate-{id}.pdf")
}

/// Fit an image onto the page, preserving its aspect ratio.
///
/// The image takes the page width minus the margin; if that makes it taller
/// than the page, it takes the page height minus the margin instead. It is
/// centred horizontally and placed [`TOP_OFFSET_PX`] from the top.
pub fn fit_to_page(image_width: f64, image_height: f64) -> Result<Placement, ExportError> {
    if !(image_width > 0.0 && image_height > 0.0) {
        return Err(ExportError::EmptyImage {
            width: image_width,
            height: image_height,
        });
    }
    let ratio = image_width / image_height;
    let mut width = A4_WIDTH_PX - PAGE_MARGIN_PX;
    let mut height = width / ratio;
    if height > A4_HEIGHT_PX {
        height = A4_HEIGHT_PX - PAGE_MARGIN_PX;
        width = height * ratio;
    }
    Ok(Placement {
        x: (A4_WIDTH_PX - width) / 2.0,
        y: TOP_OFFSET_PX,
        width,
        height,
    })
}

/// Guards against overlapping exports.
#[derive(Debug, Default)]
pub struct ExportSlot {
    busy: Cell<bool>,
}

/// Held while an export runs; frees the slot when dropped.
#[must_use]
pub struct ExportTicket<'a> {
    slot: &'a ExportSlot,
}

impl ExportSlot {
    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    pub fn acquire(&self) -> Result<ExportTicket<'_>, ExportError> {
        if self.busy.replace(true) {
            return Err(ExportError::InProgress);
        }
        Ok(ExportTicket { slot: self })
    }
}

impl Drop for ExportTicket<'_> {
    fn drop(&mut self) {
        self.slot.busy.set(false);
    }
}

/// Export `view` using `image` as its rendering.
pub fn export_certificate(
    slot: &ExportSlot,
    exporter: &dyn DocumentExporter,
    view: &CertificateView,
    image: &RenderedImage,
) -> Result<ExportedDocument, ExportError> {
    let _ticket = slot.acquire()?;
    let placement = fit_to_page(image.width, image.height)?;
    let request = ExportRequest {
        certificate: &view.certificate,
        university: &view.university,
        image,
        placement,
        file_name: file_name(&view.certificate.id),
    };
    match exporter.export(&request) {
        Ok(document) => {
            info!(
                certificate_id = %view.certificate.id,
                file = %document.file_name,
                "certificate exported"
            );
            Ok(document)
        }
        Err(e) => {
            warn!(certificate_id = %view.certificate.id, error = %e, "certificate export failed");
            Err(e.into())
        }
    }
}
