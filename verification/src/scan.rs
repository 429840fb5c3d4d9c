//! QR scan session control.
//!
//! At most one live scan session runs at a time. Starting a new session stops
//! the previous one first, and the controller stops its session explicitly
//! when dropped.

use certify_types::{QrDecoder, QrScanner, ScanHandle};
use tracing::{debug, warn};

use crate::error::VerificationError;

/// Owns the camera scanner and the handle of the running session, if any.
pub struct ScanController {
    scanner: Box<dyn QrScanner>,
    active: Option<ScanHandle>,
}

impl ScanController {
    pub fn new(scanner: Box<dyn QrScanner>) -> Self {
        Self {
            scanner,
            active: None,
        }
    }

    pub fn is_scanning(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<ScanHandle> {
        self.active
    }

    /// Start a live session, stopping any previous one first.
    ///
    /// A camera failure leaves the controller idle.
    pub fn start(&mut self) -> Result<ScanHandle, VerificationError> {
        self.stop();
        let handle = self.scanner.start()?;
        debug!(session = handle.0, "scan session started");
        self.active = Some(handle);
        Ok(handle)
    }

    /// Stop the running session, if any. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if let Some(handle) = self.active.take() {
            if let Err(e) = self.scanner.stop(handle) {
                warn!(session = handle.0, error = %e, "failed to stop scan session");
            } else {
                debug!(session = handle.0, "scan session stopped");
            }
        }
    }

    /// A session emitted a decoded payload.
    ///
    /// Ends the session and returns the payload as a lookup candidate. Payloads
    /// from sessions that are no longer active are ignored.
    pub fn on_decoded(&mut self, handle: ScanHandle, payload: &str) -> Option<String> {
        if self.active != Some(handle) {
            debug!(session = handle.0, "ignoring payload from stale scan session");
            return None;
        }
        self.stop();
        Some(payload.to_string())
    }

    /// Decode an uploaded image into a lookup candidate.
    pub fn decode_file(
        decoder: &dyn QrDecoder,
        image: &[u8],
    ) -> Result<String, VerificationError> {
        decoder.decode(image).map_err(|e| {
            warn!(error = %e, "QR image could not be decoded");
            VerificationError::Scan(e)
        })
    }
}

impl Drop for ScanController {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use certify_nullables::{NullDecoder, NullScanner};
    use certify_types::ExternalToolError;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Lets the test inspect the scanner after handing it to the controller.
    struct Shared(Rc<RefCell<NullScanner>>);

    impl QrScanner for Shared {
        fn start(&mut self) -> Result<ScanHandle, ExternalToolError> {
            self.0.borrow_mut().start()
        }

        fn stop(&mut self, handle: ScanHandle) -> Result<(), ExternalToolError> {
            self.0.borrow_mut().stop(handle)
        }
    }

    fn controller() -> (ScanController, Rc<RefCell<NullScanner>>) {
        let scanner = Rc::new(RefCell::new(NullScanner::new()));
        (
            ScanController::new(Box::new(Shared(scanner.clone()))),
            scanner,
        )
    }

    #[test]
    fn starting_again_stops_previous_session() {
        let (mut scans, scanner) = controller();
        let first = scans.start().unwrap();
        let second = scans.start().unwrap();
        assert_ne!(first, second);
        assert_eq!(scanner.borrow().running(), 1);
        assert_eq!(scanner.borrow().stopped(), &[first]);
        assert_eq!(scans.active(), Some(second));
    }

    #[test]
    fn decoded_payload_ends_session() {
        let (mut scans, scanner) = controller();
        let handle = scans.start().unwrap();
        assert_eq!(
            scans.on_decoded(handle, "CS-MIT-2023-123"),
            Some("CS-MIT-2023-123".to_string())
        );
        assert!(!scans.is_scanning());
        assert_eq!(scanner.borrow().running(), 0);
    }

    #[test]
    fn stale_payload_is_ignored() {
        let (mut scans, _) = controller();
        let old = scans.start().unwrap();
        let _current = scans.start().unwrap();
        assert_eq!(scans.on_decoded(old, "late"), None);
        assert!(scans.is_scanning());
    }

    #[test]
    fn drop_stops_running_session() {
        let (mut scans, scanner) = controller();
        scans.start().unwrap();
        drop(scans);
        assert_eq!(scanner.borrow().running(), 0);
    }

    #[test]
    fn camera_failure_is_recoverable() {
        let mut scans = ScanController::new(Box::new(NullScanner::failing("denied")));
        assert!(matches!(
            scans.start(),
            Err(VerificationError::Scan(ExternalToolError::Camera(_)))
        ));
        assert!(!scans.is_scanning());
    }

    #[test]
    fn file_decoding_maps_errors() {
        assert_eq!(
            ScanController::decode_file(&NullDecoder::returning("ID"), b"img").unwrap(),
            "ID"
        );
        assert!(matches!(
            ScanController::decode_file(&NullDecoder::failing("blurry"), b"img"),
            Err(VerificationError::Scan(ExternalToolError::Decode(_)))
        ));
    }
}
