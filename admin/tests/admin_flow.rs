//! Session guard and CRUD coordinator used together, the way a host wires them.

use std::rc::Rc;

use certify_admin::{
    AdminError, CertificateDraft, Confirmation, CrudCoordinator, DeleteOutcome, DestructiveAction,
    SessionGuard, StaticAuthenticator, UniversityDraft,
};
use certify_nullables::{NullClock, NullRandom};
use certify_store::{CertificateStore, UniversityStore};
use certify_store_memory::{IdGenerator, RecordStore};

fn store() -> RecordStore {
    RecordStore::new(IdGenerator::new(
        Rc::new(NullClock::at_date(2024, 9, 1)),
        Box::new(NullRandom::new(vec![500, 501, 502])),
        "https://qr.test/?data=",
    ))
}

/// Gate a mutation behind the session, as the application does.
fn as_admin<'a>(
    session: &SessionGuard,
    store: &'a mut RecordStore,
) -> Result<CrudCoordinator<'a, RecordStore>, AdminError> {
    session.require_admin()?;
    Ok(CrudCoordinator::new(store))
}

#[test]
fn mutations_require_login() {
    let session = SessionGuard::new(Box::new(StaticAuthenticator::default()));
    let mut store = store();
    let err = as_admin(&session, &mut store).err();
    assert_eq!(err, Some(AdminError::NotLoggedIn));
    assert_eq!(store.university_count(), 0);
}

#[test]
fn full_admin_session() {
    let mut session = SessionGuard::new(Box::new(StaticAuthenticator::new("registrar", "s3cret")));
    let mut store = store();

    assert_eq!(
        session.login("registrar", "wrong"),
        Err(AdminError::InvalidCredentials)
    );
    session.login("registrar", "s3cret").unwrap();

    let uni = as_admin(&session, &mut store)
        .unwrap()
        .add_university(&UniversityDraft {
            name: "University of Test".into(),
            country: "Testland".into(),
        })
        .unwrap();

    let cert = as_admin(&session, &mut store)
        .unwrap()
        .add_certificate(&CertificateDraft {
            student_name: "Ada Lovelace".into(),
            university_id: uni.id.to_string(),
            degree: "BSc".into(),
            major: "computing".into(),
            graduation_date: "2024-06-30".into(),
        })
        .unwrap();
    assert_eq!(
        cert.id.as_str(),
        format!("CO-{}-2024-500", uni.id.as_str().to_uppercase())
    );
    assert_eq!(cert.qr_code_url, format!("https://qr.test/?data={}", cert.id));
    assert!(store.get_certificate(&cert.id.as_str().to_lowercase()).is_some());

    let renamed = as_admin(&session, &mut store)
        .unwrap()
        .update_university(
            &uni.id,
            &UniversityDraft {
                name: "Test University".into(),
                country: "Testland".into(),
            },
        )
        .unwrap();
    assert_eq!(store.get_university(&uni.id), Some(renamed));

    let outcome = as_admin(&session, &mut store)
        .unwrap()
        .delete_university(&uni.id, &mut Confirmation::Granted)
        .unwrap();
    assert_eq!(
        outcome,
        DeleteOutcome::Deleted {
            cascaded: vec![cert.id.clone()]
        }
    );
    assert!(store.get_certificate(cert.id.as_str()).is_none());

    let mut prompts = Vec::new();
    let mut ask = |action: &DestructiveAction| {
        prompts.push(action.to_string());
        true
    };
    assert!(session.logout(&mut ask));
    assert_eq!(prompts, vec!["Are you sure you want to log out?".to_string()]);
    assert!(as_admin(&session, &mut store).is_err());
}
