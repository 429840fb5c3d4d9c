//! Administrator dashboard: counters, record tables and the audit trail.

use certify_store::{AuditLogStore, CertificateStore, UniversityStore};
use certify_types::{CertificateId, University, VerificationLog, VerificationStatus};

use crate::locale::{Locale, Text};

/// Characters of the log id shown in the log table.
pub const LOG_ID_PREVIEW: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stats {
    pub total_certificates: usize,
    pub total_universities: usize,
    pub total_verifications: usize,
}

/// A certificate with its issuing university resolved for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertificateRow {
    pub id: CertificateId,
    pub student_name: String,
    /// `None` once the university has been deleted.
    pub university_name: Option<String>,
}

impl CertificateRow {
    pub fn university_label(&self, locale: Locale) -> &str {
        self.university_name
            .as_deref()
            .unwrap_or_else(|| locale.text(Text::UnknownUniversity))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogRow {
    pub short_id: String,
    pub certificate_id: String,
    pub timestamp: String,
    pub status: VerificationStatus,
    pub ip_address: String,
}

impl From<&VerificationLog> for LogRow {
    fn from(log: &VerificationLog) -> Self {
        Self {
            short_id: log.id.abbreviated(LOG_ID_PREVIEW),
            certificate_id: log.certificate_id.clone(),
            timestamp: log.timestamp_iso(),
            status: log.status,
            ip_address: log.ip_address.clone(),
        }
    }
}

/// Snapshot of everything the dashboard shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dashboard {
    pub username: String,
    pub stats: Stats,
    pub certificates: Vec<CertificateRow>,
    pub universities: Vec<University>,
    /// Most recent first.
    pub logs: Vec<LogRow>,
}

impl Dashboard {
    pub fn build<S, L>(username: &str, store: &S, log: &L) -> Self
    where
        S: UniversityStore + CertificateStore + ?Sized,
        L: AuditLogStore + ?Sized,
    {
        let universities = store.list_universities();
        let certificates = store
            .list_certificates()
            .into_iter()
            .map(|c| CertificateRow {
                university_name: universities
                    .iter()
                    .find(|u| u.id == c.university_id)
                    .map(|u| u.name.clone()),
                id: c.id,
                student_name: c.student_name,
            })
            .collect();
        let logs: Vec<LogRow> = log.list().iter().rev().map(LogRow::from).collect();

        Self {
            username: username.to_string(),
            stats: Stats {
                total_certificates: store.certificate_count(),
                total_universities: universities.len(),
                total_verifications: logs.len(),
            },
            certificates,
            universities,
            logs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use certify_nullables::{NullClock, NullRandom};
    use certify_store_memory::{IdGenerator, MemoryAuditLog, RecordStore};
    use certify_types::{Certificate, NewLogEntry};
    use chrono::NaiveDate;
    use std::rc::Rc;

    fn fixture() -> (RecordStore, MemoryAuditLog, Rc<NullClock>) {
        let clock = Rc::new(NullClock::at_millis(1_718_000_000_000));
        let mut store = RecordStore::new(IdGenerator::new(
            clock.clone(),
            Box::new(NullRandom::constant(100)),
            "https://qr.test/?data=",
        ));
        store
            .seed_university(University {
                id: "u1".into(),
                name: "Test University".into(),
                country: "Testland".into(),
            })
            .unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        store
            .seed_certificate(Certificate {
                id: "CS-U1-2024-100".into(),
                student_name: "Student".into(),
                university_id: "u1".into(),
                degree: "BSc".into(),
                major: "CS".into(),
                graduation_date: date,
                issue_date: date,
                qr_code_url: String::new(),
            })
            .unwrap();
        (store, MemoryAuditLog::new(clock.clone()), clock)
    }

    fn entry(id: &str, status: VerificationStatus) -> NewLogEntry {
        NewLogEntry {
            certificate_id: id.into(),
            status,
            ip_address: "192.168.1.1".into(),
        }
    }

    #[test]
    fn counts_match_collections() {
        let (store, mut log, _) = fixture();
        log.append(entry("CS-U1-2024-100", VerificationStatus::Success));
        log.append(entry("nope", VerificationStatus::Failed));
        let dash = Dashboard::build("admin", &store, &log);
        assert_eq!(
            dash.stats,
            Stats {
                total_certificates: 1,
                total_universities: 1,
                total_verifications: 2,
            }
        );
        assert_eq!(dash.username, "admin");
    }

    #[test]
    fn logs_are_newest_first_with_short_ids() {
        let (store, mut log, clock) = fixture();
        log.append(entry("first", VerificationStatus::Failed));
        clock.advance_millis(5);
        log.append(entry("second", VerificationStatus::Failed));
        let dash = Dashboard::build("admin", &store, &log);
        assert_eq!(dash.logs[0].certificate_id, "second");
        assert_eq!(dash.logs[1].certificate_id, "first");
        assert_eq!(dash.logs[0].short_id, "log-1718...");
        assert_eq!(dash.logs[0].timestamp, "2024-06-10T06:13:20.005Z");
    }

    #[test]
    fn orphaned_certificate_shows_unknown() {
        let row = CertificateRow {
            id: "CS-U2-2024-100".into(),
            student_name: "Student".into(),
            university_name: None,
        };
        assert_eq!(row.university_label(Locale::En), "Unknown");

        let (store, log, _) = fixture();
        let dash = Dashboard::build("admin", &store, &log);
        assert_eq!(dash.certificates[0].university_label(Locale::En), "Test University");
    }
}
