//! Identity generation rules for universities and certificates.

use std::rc::Rc;

use certify_types::{CertificateId, Clock, RandomSource, UniversityId};
use chrono::NaiveDate;

/// Default QR image service; the certificate id is appended verbatim.
pub const DEFAULT_QR_SERVICE_URL: &str =
    "https://api.qrserver.com/v1/create-qr-code/?size=150x150&data=";

/// Number of distinct certificate suffixes per `{MAJOR2}-{UNIVERSITY}-{YEAR}` prefix.
const SUFFIX_SPACE: u32 = CertificateId::SUFFIX_MAX - CertificateId::SUFFIX_MIN + 1;

/// Generates ids, issue dates and QR urls.
pub struct IdGenerator {
    clock: Rc<dyn Clock>,
    random: Box<dyn RandomSource>,
    qr_service_url: String,
    /// Last university token handed out; tokens are strictly increasing.
    last_university_token: u64,
}

impl IdGenerator {
    pub fn new(
        clock: Rc<dyn Clock>,
        random: Box<dyn RandomSource>,
        qr_service_url: impl Into<String>,
    ) -> Self {
        Self {
            clock,
            random,
            qr_service_url: qr_service_url.into(),
            last_university_token: 0,
        }
    }

    pub fn clock(&self) -> &Rc<dyn Clock> {
        &self.clock
    }

    /// Make sure future university tokens stay above an id that was inserted
    /// without going through the generator (seed data).
    pub fn observe_university(&mut self, id: &UniversityId) {
        if let Some(token) = id.token() {
            self.last_university_token = self.last_university_token.max(token);
        }
    }

    /// `u{unix-millis}`, bumped past the previous token when the clock has not
    /// moved forward.
    pub fn next_university_id(&mut self) -> UniversityId {
        let now = u64::try_from(self.clock.unix_millis()).unwrap_or(0);
        let token = now.max(self.last_university_token.saturating_add(1));
        self.last_university_token = token;
        UniversityId::from_token(token)
    }

    /// A free certificate id for `major`/`university` in the current year,
    /// i.e. one for which `is_taken` returns false.
    ///
    /// The random suffix is advanced (wrapping) until a free one is found.
    /// Returns `None` once all suffixes for the prefix are taken.
    pub fn next_certificate_id(
        &mut self,
        major: &str,
        university: &UniversityId,
        is_taken: impl Fn(&CertificateId) -> bool,
    ) -> Option<CertificateId> {
        let year = self.clock.year();
        let start = self
            .random
            .next_in_range(CertificateId::SUFFIX_MIN, CertificateId::SUFFIX_MAX)
            .clamp(CertificateId::SUFFIX_MIN, CertificateId::SUFFIX_MAX);
        (0..SUFFIX_SPACE)
            .map(|offset| {
                let suffix = CertificateId::SUFFIX_MIN
                    + (start - CertificateId::SUFFIX_MIN + offset) % SUFFIX_SPACE;
                CertificateId::compose(major, university, year, suffix)
            })
            .find(|candidate| !is_taken(candidate))
    }

    pub fn issue_date(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn qr_code_url(&self, id: &CertificateId) -> String {
        format!("{}{}", self.qr_service_url, id)
    }
}
