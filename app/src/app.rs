//! Application state.
//!
//! [`App`] owns every collection and all session state, and is the single
//! place where mutations happen. Presentation layers hold an `App` and call
//! its operations; they never touch the stores directly.

use std::rc::Rc;

use certify_admin::{
    CertificateDraft, Confirm, CrudCoordinator, DeleteOutcome, SessionGuard, StaticAuthenticator,
    UniversityDraft,
};
use certify_store_memory::{IdGenerator, MemoryAuditLog, RecordStore};
use certify_types::{
    Certificate, CertificateId, Clock, DocumentExporter, ExportedDocument, ExternalToolError,
    QrDecoder, QrScanner, RandomSource, RenderedImage, ScanHandle, SystemClock, ThreadRandom,
    University, UniversityId,
};
use certify_verification::{
    FixedDelay, LookupDesk, PendingLookup, ScanController, VerificationEngine, VerificationError,
};

use crate::config::AppConfig;
use crate::dashboard::Dashboard;
use crate::details::CertificateView;
use crate::export::{self, ExportError, ExportSlot};
use crate::locale::Locale;
use crate::seed::SeedData;
use crate::AppError;

pub struct App {
    config: AppConfig,
    clock: Rc<dyn Clock>,
    records: RecordStore,
    audit: MemoryAuditLog,
    session: SessionGuard,
    desk: LookupDesk,
    scans: Option<ScanController>,
    locale: Locale,
    exports: ExportSlot,
}

impl App {
    /// Build an instance with the given time and randomness sources and load
    /// the configured seed data.
    pub fn new(
        config: AppConfig,
        clock: Rc<dyn Clock>,
        random: Box<dyn RandomSource>,
    ) -> Result<Self, AppError> {
        let mut records = RecordStore::new(IdGenerator::new(
            clock.clone(),
            random,
            config.qr_service_url.clone(),
        ));
        SeedData::load(config.seed_file.as_deref())?.apply(&mut records)?;

        let desk = LookupDesk::new(
            VerificationEngine::new(config.client_address.clone()),
            Box::new(FixedDelay::from_millis(config.lookup_delay_ms)),
        );
        let session = SessionGuard::new(Box::new(StaticAuthenticator::new(
            config.admin_username.clone(),
            config.admin_password.clone(),
        )));

        Ok(Self {
            audit: MemoryAuditLog::new(clock.clone()),
            locale: config.locale,
            config,
            clock,
            records,
            session,
            desk,
            scans: None,
            exports: ExportSlot::default(),
        })
    }

    /// Build an instance on the system clock and thread-local randomness.
    pub fn from_config(config: AppConfig) -> Result<Self, AppError> {
        Self::new(config, Rc::new(SystemClock), Box::new(ThreadRandom))
    }

    /// Attach a live QR scanner.
    pub fn with_scanner(mut self, scanner: Box<dyn QrScanner>) -> Self {
        self.scans = Some(ScanController::new(scanner));
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    pub fn audit(&self) -> &MemoryAuditLog {
        &self.audit
    }

    pub fn session(&self) -> &SessionGuard {
        &self.session
    }

    pub fn desk(&self) -> &LookupDesk {
        &self.desk
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Switch to the other language and return it.
    pub fn toggle_locale(&mut self) -> Locale {
        self.locale = self.locale.toggle();
        self.locale
    }

    // ── Verification ───────────────────────────────────────────────────

    /// Accept a lookup without resolving it yet.
    pub fn begin_lookup(&mut self, raw: &str) -> Result<PendingLookup, AppError> {
        Ok(self.desk.begin(raw)?)
    }

    pub fn resolve_lookup(&mut self, pending: PendingLookup) -> Result<Certificate, AppError> {
        Ok(self.desk.resolve(pending, &self.records, &mut self.audit)?)
    }

    /// Look up a typed or decoded id after the configured delay.
    pub async fn verify(&mut self, raw: &str) -> Result<Certificate, AppError> {
        Ok(self.desk.verify(raw, &self.records, &mut self.audit).await?)
    }

    pub fn is_scanning(&self) -> bool {
        self.scans.as_ref().is_some_and(ScanController::is_scanning)
    }

    /// Open a live scan session, replacing any running one.
    pub fn start_scan(&mut self) -> Result<ScanHandle, AppError> {
        let scans = self.scans.as_mut().ok_or_else(|| {
            VerificationError::Scan(ExternalToolError::Unavailable(
                "no QR scanner configured".into(),
            ))
        })?;
        Ok(scans.start()?)
    }

    pub fn stop_scan(&mut self) {
        if let Some(scans) = self.scans.as_mut() {
            scans.stop();
        }
    }

    /// A scan session decoded `payload`. Verifies it if the session is
    /// still the active one; stale payloads yield `Ok(None)`.
    pub async fn scan_decoded(
        &mut self,
        handle: ScanHandle,
        payload: &str,
    ) -> Result<Option<Certificate>, AppError> {
        let Some(candidate) = self
            .scans
            .as_mut()
            .and_then(|scans| scans.on_decoded(handle, payload))
        else {
            return Ok(None);
        };
        self.verify(&candidate).await.map(Some)
    }

    /// Decode an uploaded QR image and verify its payload.
    pub async fn verify_image(
        &mut self,
        decoder: &dyn QrDecoder,
        image: &[u8],
    ) -> Result<Certificate, AppError> {
        let candidate = ScanController::decode_file(decoder, image)?;
        self.verify(&candidate).await
    }

    /// The selected certificate with its university, or `None` ("not found").
    pub fn details(&self) -> Option<CertificateView> {
        CertificateView::resolve(self.desk.selected(), &self.records, self.clock.now())
    }

    /// Export the details view as a document.
    pub fn export_details(
        &self,
        exporter: &dyn DocumentExporter,
        image: &RenderedImage,
    ) -> Result<ExportedDocument, AppError> {
        let view = self.details().ok_or(ExportError::NothingSelected)?;
        Ok(export::export_certificate(&self.exports, exporter, &view, image)?)
    }

    // ── Administration ─────────────────────────────────────────────────

    pub fn login(&mut self, username: &str, password: &str) -> Result<(), AppError> {
        Ok(self.session.login(username, password)?)
    }

    pub fn logout(&mut self, confirm: &mut dyn Confirm) -> bool {
        let ended = self.session.logout(confirm);
        if ended {
            self.stop_scan();
        }
        ended
    }

    /// Dashboard snapshot for the logged-in administrator.
    pub fn dashboard(&self) -> Result<Dashboard, AppError> {
        let username = self.session.require_admin()?;
        Ok(Dashboard::build(username, &self.records, &self.audit))
    }

    fn crud(&mut self) -> Result<CrudCoordinator<'_, RecordStore>, AppError> {
        self.session.require_admin()?;
        Ok(CrudCoordinator::new(&mut self.records))
    }

    pub fn add_university(&mut self, draft: &UniversityDraft) -> Result<University, AppError> {
        Ok(self.crud()?.add_university(draft)?)
    }

    pub fn update_university(
        &mut self,
        id: &UniversityId,
        draft: &UniversityDraft,
    ) -> Result<University, AppError> {
        Ok(self.crud()?.update_university(id, draft)?)
    }

    pub fn delete_university(
        &mut self,
        id: &UniversityId,
        confirm: &mut dyn Confirm,
    ) -> Result<DeleteOutcome, AppError> {
        Ok(self.crud()?.delete_university(id, confirm)?)
    }

    pub fn add_certificate(&mut self, draft: &CertificateDraft) -> Result<Certificate, AppError> {
        Ok(self.crud()?.add_certificate(draft)?)
    }

    pub fn update_certificate(
        &mut self,
        id: &CertificateId,
        draft: &CertificateDraft,
    ) -> Result<Certificate, AppError> {
        Ok(self.crud()?.update_certificate(id, draft)?)
    }

    pub fn delete_certificate(
        &mut self,
        id: &CertificateId,
        confirm: &mut dyn Confirm,
    ) -> Result<DeleteOutcome, AppError> {
        Ok(self.crud()?.delete_certificate(id, confirm)?)
    }
}
