//! Nullable QR scanner and decoder.

use certify_types::{ExternalToolError, QrDecoder, QrScanner, ScanHandle};
use std::collections::HashSet;

/// A camera scanner that hands out sequential handles and records which
/// sessions are running.
#[derive(Default)]
pub struct NullScanner {
    next: u64,
    running: HashSet<ScanHandle>,
    stopped: Vec<ScanHandle>,
    fail_start: Option<String>,
}

impl NullScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// A scanner whose camera cannot be opened.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            fail_start: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Sessions currently running.
    pub fn running(&self) -> usize {
        self.running.len()
    }

    /// Sessions stopped so far, in order.
    pub fn stopped(&self) -> &[ScanHandle] {
        &self.stopped
    }
}

impl QrScanner for NullScanner {
    fn start(&mut self) -> Result<ScanHandle, ExternalToolError> {
        if let Some(reason) = &self.fail_start {
            return Err(ExternalToolError::Camera(reason.clone()));
        }
        self.next += 1;
        let handle = ScanHandle(self.next);
        self.running.insert(handle);
        Ok(handle)
    }

    fn stop(&mut self, handle: ScanHandle) -> Result<(), ExternalToolError> {
        if self.running.remove(&handle) {
            self.stopped.push(handle);
        }
        Ok(())
    }
}

/// A decoder that returns a fixed payload, or a fixed failure.
pub struct NullDecoder {
    result: Result<String, ExternalToolError>,
}

impl NullDecoder {
    pub fn returning(payload: impl Into<String>) -> Self {
        Self {
            result: Ok(payload.into()),
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            result: Err(ExternalToolError::Decode(reason.into())),
        }
    }
}

impl QrDecoder for NullDecoder {
    fn decode(&self, _image: &[u8]) -> Result<String, ExternalToolError> {
        self.result.clone()
    }
}
