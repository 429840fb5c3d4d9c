//! Lookup desk: the interactive side of a verification request.
//!
//! A lookup is split into [`LookupDesk::begin`] and [`LookupDesk::resolve`] so
//! the host can keep handling other events while the artificial delay runs.
//! While one lookup is in flight, further submissions are refused. Dropping
//! the [`PendingLookup`] (or the `verify` future holding it) frees the desk.

use std::cell::Cell;
use std::rc::Rc;

use certify_store::{AuditLogStore, CertificateStore};
use certify_types::Certificate;
use tracing::debug;

use crate::delay::{LookupDelay, NoDelay};
use crate::engine::VerificationEngine;
use crate::error::VerificationError;

/// Ticket for a lookup that has been accepted but not yet resolved.
#[derive(Debug)]
#[must_use = "a pending lookup keeps the desk busy until it is resolved or dropped"]
pub struct PendingLookup {
    candidate: String,
    in_flight: Rc<Cell<bool>>,
}

impl PendingLookup {
    pub fn candidate(&self) -> &str {
        &self.candidate
    }
}

impl Drop for PendingLookup {
    fn drop(&mut self) {
        self.in_flight.set(false);
    }
}

/// Verification page state: in-flight flag, last submitted input, and the
/// certificate selected by the last successful lookup.
pub struct LookupDesk {
    engine: VerificationEngine,
    delay: Box<dyn LookupDelay>,
    in_flight: Rc<Cell<bool>>,
    last_input: String,
    selected: Option<Certificate>,
}

impl LookupDesk {
    pub fn new(engine: VerificationEngine, delay: Box<dyn LookupDelay>) -> Self {
        Self {
            engine,
            delay,
            in_flight: Rc::new(Cell::new(false)),
            last_input: String::new(),
            selected: None,
        }
    }

    /// A desk that resolves immediately.
    pub fn immediate(engine: VerificationEngine) -> Self {
        Self::new(engine, Box::new(NoDelay))
    }

    pub fn engine(&self) -> &VerificationEngine {
        &self.engine
    }

    /// Whether a lookup is in flight (re-submission disabled).
    pub fn is_busy(&self) -> bool {
        self.in_flight.get()
    }

    /// Input of the most recent accepted submission, as typed or decoded.
    pub fn last_input(&self) -> &str {
        &self.last_input
    }

    /// Certificate found by the most recent lookup; cleared by a miss.
    pub fn selected(&self) -> Option<&Certificate> {
        self.selected.as_ref()
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Accept a submission. Blank input fails locally; a second submission
    /// while one is in flight is refused.
    pub fn begin(&mut self, raw: &str) -> Result<PendingLookup, VerificationError> {
        if self.in_flight.get() {
            return Err(VerificationError::LookupInFlight);
        }
        VerificationEngine::validate(raw)?;
        self.in_flight.set(true);
        self.last_input = raw.to_string();
        debug!(input = %raw.trim(), "lookup accepted");
        Ok(PendingLookup {
            candidate: raw.to_string(),
            in_flight: Rc::clone(&self.in_flight),
        })
    }

    /// Complete a lookup accepted by [`begin`](Self::begin).
    pub fn resolve<S, L>(
        &mut self,
        pending: PendingLookup,
        store: &S,
        log: &mut L,
    ) -> Result<Certificate, VerificationError>
    where
        S: CertificateStore + ?Sized,
        L: AuditLogStore + ?Sized,
    {
        let result = self.engine.verify(store, log, &pending.candidate);
        drop(pending);
        self.selected = result.as_ref().ok().cloned();
        result
    }

    /// Submit, wait out the configured delay, then resolve.
    pub async fn verify<S, L>(
        &mut self,
        raw: &str,
        store: &S,
        log: &mut L,
    ) -> Result<Certificate, VerificationError>
    where
        S: CertificateStore + ?Sized,
        L: AuditLogStore + ?Sized,
    {
        let pending = self.begin(raw)?;
        let delay = self.delay.duration();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        self.resolve(pending, store, log)
    }
}
