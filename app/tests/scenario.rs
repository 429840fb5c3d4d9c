//! End-to-end scenarios through the application state object.

use std::rc::Rc;

use certify_admin::{AdminError, CertificateDraft, Confirmation, DeleteOutcome, UniversityDraft};
use certify_app::{App, AppConfig, AppError, Locale, SeedData, TextDirection};
use certify_nullables::{NullClock, NullExporter, NullRandom};
use certify_store::{AuditLogStore, CertificateStore, UniversityStore};
use certify_types::{Clock, RenderedImage, VerificationStatus};
use certify_verification::VerificationError;

fn config_with_seed(seed_file: Option<std::path::PathBuf>) -> AppConfig {
    AppConfig {
        lookup_delay_ms: 0,
        seed_file,
        ..AppConfig::default()
    }
}

fn app_at(clock: Rc<NullClock>, config: AppConfig) -> App {
    App::new(config, clock, Box::new(NullRandom::new(vec![417, 233]))).unwrap()
}

#[tokio::test]
async fn administrator_lifecycle() {
    let clock = Rc::new(NullClock::at_date(2024, 3, 1));
    let mut app = app_at(clock.clone(), config_with_seed(None));
    let seeded_unis = app.records().university_count();
    let seeded_certs = app.records().certificate_count();

    app.login("admin", "password").unwrap();

    let uni = app
        .add_university(&UniversityDraft {
            name: "Test University".into(),
            country: "Testland".into(),
        })
        .unwrap();
    assert_eq!(app.records().university_count(), seeded_unis + 1);
    assert!(app
        .records()
        .list_universities()
        .iter()
        .filter(|u| u.id == uni.id)
        .count()
        == 1);

    let cert = app
        .add_certificate(&CertificateDraft {
            student_name: "Test Student".into(),
            university_id: uni.id.to_string(),
            degree: "Bachelor of Science".into(),
            major: "Computer Science".into(),
            graduation_date: "2024-02-20".into(),
        })
        .unwrap();
    assert_eq!(app.records().certificate_count(), seeded_certs + 1);
    assert!(cert.qr_code_url.contains(cert.id.as_str()));
    assert_eq!(cert.issue_date, clock.today());

    let found = app.verify(cert.id.as_str()).await.unwrap();
    assert_eq!(found, cert);

    let miss = app.verify("nonexistent-id").await.unwrap_err();
    assert!(matches!(
        miss,
        AppError::Verification(VerificationError::NotFound { .. })
    ));

    let logs = app.audit().list();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].status, VerificationStatus::Success);
    assert_eq!(logs[0].certificate_id, cert.id.as_str());
    assert_eq!(logs[1].status, VerificationStatus::Failed);
    assert_eq!(logs[1].certificate_id, "nonexistent-id");
    assert_eq!(logs[0].ip_address, "192.168.1.1");

    let outcome = app
        .delete_university(&uni.id, &mut Confirmation::Granted)
        .unwrap();
    assert_eq!(
        outcome,
        DeleteOutcome::Deleted {
            cascaded: vec![cert.id.clone()]
        }
    );
    assert!(app.records().get_university(&uni.id).is_none());
    assert!(app.records().get_certificate(cert.id.as_str()).is_none());
    assert_eq!(app.records().university_count(), seeded_unis);
    assert_eq!(app.records().certificate_count(), seeded_certs);
}

#[tokio::test]
async fn lookup_ignores_case_and_padding() {
    let mut app = app_at(Rc::new(NullClock::at_date(2024, 3, 1)), config_with_seed(None));
    let cert = app.verify("  cs-u1-2023-101\t").await.unwrap();
    assert_eq!(cert.id.as_str(), "CS-U1-2023-101");
    assert_eq!(app.audit().list()[0].certificate_id, "CS-U1-2023-101");
}

#[tokio::test]
async fn blank_lookup_leaves_no_trace() {
    let mut app = app_at(Rc::new(NullClock::at_date(2024, 3, 1)), config_with_seed(None));
    let before = app.records().list_certificates();
    let err = app.verify("   ").await.unwrap_err();
    assert!(matches!(
        err,
        AppError::Verification(VerificationError::Required)
    ));
    assert!(app.audit().is_empty());
    assert_eq!(app.records().list_certificates(), before);
    assert!(!app.desk().is_busy());
}

#[tokio::test]
async fn verified_certificate_can_be_viewed_and_exported() {
    let mut app = app_at(Rc::new(NullClock::at_date(2024, 3, 1)), config_with_seed(None));
    app.verify("PH-U2-2022-202").await.unwrap();

    let view = app.details().expect("selected certificate resolves");
    assert_eq!(view.university.name, "University of Oxford");
    assert!(view.disclaimer(app.locale()).contains("University of Oxford"));

    let exporter = NullExporter::new();
    let image = RenderedImage {
        width: 1200.0,
        height: 900.0,
        png: vec![1, 2, 3],
    };
    let doc = app.export_details(&exporter, &image).unwrap();
    assert_eq!(doc.file_name, "Certificate-PH-U2-2022-202.pdf");

    app.verify("no-such-certificate").await.unwrap_err();
    assert!(app.details().is_none());
}

#[test]
fn wrong_credentials_are_rejected() {
    let mut app = app_at(Rc::new(NullClock::at_date(2024, 3, 1)), config_with_seed(None));
    let err = app.login("admin", "hunter2").unwrap_err();
    assert!(matches!(err, AppError::Admin(AdminError::InvalidCredentials)));
    assert!(!app.session().is_logged_in());

    app.login("admin", "password").unwrap();
    assert_eq!(app.session().username(), Some("admin"));
    assert!(!app.logout(&mut Confirmation::Declined));
    assert!(app.logout(&mut Confirmation::Granted));
    assert!(!app.session().is_logged_in());
}

#[test]
fn dashboard_reflects_activity() {
    let mut app = app_at(Rc::new(NullClock::at_date(2024, 3, 1)), config_with_seed(None));
    let pending = app.begin_lookup("ME-U3-2024-303").unwrap();
    app.resolve_lookup(pending).unwrap();
    let pending = app.begin_lookup("missing").unwrap();
    app.resolve_lookup(pending).unwrap_err();

    app.login("admin", "password").unwrap();
    let dash = app.dashboard().unwrap();
    assert_eq!(dash.username, "admin");
    assert_eq!(dash.stats.total_verifications, 2);
    assert_eq!(dash.stats.total_certificates, app.records().certificate_count());
    assert_eq!(dash.logs[0].certificate_id, "missing");
    assert_eq!(dash.logs[0].status, VerificationStatus::Failed);
    assert!(dash.logs[0].short_id.ends_with("..."));
}

#[test]
fn locale_toggles_direction() {
    let mut app = app_at(Rc::new(NullClock::at_date(2024, 3, 1)), config_with_seed(None));
    assert_eq!(app.toggle_locale(), Locale::Ar);
    assert_eq!(app.locale().direction(), TextDirection::Rtl);
    assert_eq!(app.toggle_locale(), Locale::En);
}

#[test]
fn configured_seed_file_replaces_builtin_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seed.toml");
    let seed = SeedData {
        universities: SeedData::builtin().unwrap().universities[..1].to_vec(),
        certificates: Vec::new(),
    };
    std::fs::write(&path, toml::to_string(&seed).unwrap()).unwrap();

    let app = app_at(
        Rc::new(NullClock::at_date(2024, 3, 1)),
        config_with_seed(Some(path)),
    );
    assert_eq!(app.records().university_count(), 1);
    assert_eq!(app.records().certificate_count(), 0);
}

#[test]
fn missing_seed_file_fails_startup() {
    let result = App::new(
        config_with_seed(Some("/nonexistent/seed.toml".into())),
        Rc::new(NullClock::at_date(2024, 3, 1)),
        Box::new(NullRandom::constant(100)),
    );
    assert!(matches!(result, Err(AppError::Seed(_))));
}
