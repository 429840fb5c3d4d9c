//! Certificate details view.

use certify_store::{CertificateStore, UniversityStore};
use certify_types::{Certificate, University};
use chrono::{DateTime, Utc};

use crate::locale::{Locale, Text};

/// A verified certificate with its issuing university, as shown after a
/// successful lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertificateView {
    pub certificate: Certificate,
    pub university: University,
    /// Moment the view was produced; quoted in the disclaimer.
    pub verified_at: DateTime<Utc>,
}

impl CertificateView {
    /// Build the view for the selected certificate from the current records.
    ///
    /// Returns `None` ("not found") when nothing is selected, the certificate
    /// has since been deleted, or its university no longer exists.
    pub fn resolve<S>(
        selected: Option<&Certificate>,
        store: &S,
        verified_at: DateTime<Utc>,
    ) -> Option<Self>
    where
        S: UniversityStore + CertificateStore + ?Sized,
    {
        let certificate = store.get_certificate(selected?.id.as_str())?;
        let university = store.get_university(&certificate.university_id)?;
        Some(Self {
            certificate,
            university,
            verified_at,
        })
    }

    pub fn disclaimer(&self, locale: Locale) -> String {
        locale.disclaimer(self.verified_at, &self.university.name)
    }

    /// Labelled fields in display order.
    pub fn fields(&self, locale: Locale) -> Vec<(&'static str, String)> {
        let c = &self.certificate;
        vec![
            (locale.text(Text::StudentName), c.student_name.clone()),
            (locale.text(Text::IssuingUniversity), self.university.name.clone()),
            (locale.text(Text::Degree), c.degree.clone()),
            (locale.text(Text::Major), c.major.clone()),
            (locale.text(Text::GraduationDate), locale.format_date(c.graduation_date)),
            (locale.text(Text::CertificateId), c.id.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use certify_nullables::{NullClock, NullRandom};
    use certify_store_memory::{IdGenerator, RecordStore};
    use certify_types::{Clock, NewCertificate, NewUniversity, UniversityId};
    use chrono::NaiveDate;
    use std::rc::Rc;

    fn fixture() -> (RecordStore, Certificate, Rc<NullClock>) {
        let clock = Rc::new(NullClock::at_date(2024, 6, 15));
        let mut store = RecordStore::new(IdGenerator::new(
            clock.clone(),
            Box::new(NullRandom::constant(321)),
            "https://qr.test/?data=",
        ));
        let uni = store
            .add_university(NewUniversity {
                name: "Test University".into(),
                country: "Testland".into(),
            })
            .unwrap();
        let cert = store
            .add_certificate(NewCertificate {
                student_name: "Ada Lovelace".into(),
                university_id: uni.id,
                degree: "BSc".into(),
                major: "Mathematics".into(),
                graduation_date: NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
            })
            .unwrap();
        (store, cert, clock)
    }

    #[test]
    fn resolves_selected_certificate() {
        let (store, cert, clock) = fixture();
        let view = CertificateView::resolve(Some(&cert), &store, clock.now()).unwrap();
        assert_eq!(view.university.name, "Test University");
        assert!(view.disclaimer(Locale::En).contains("Test University"));
        let fields = view.fields(Locale::En);
        assert_eq!(fields[0], ("Student Name", "Ada Lovelace".to_string()));
        assert_eq!(fields[4].1, "June 5, 2024");
        assert_eq!(fields[5].1, cert.id.to_string());
    }

    #[test]
    fn nothing_selected_is_not_found() {
        let (store, _, clock) = fixture();
        assert!(CertificateView::resolve(None, &store, clock.now()).is_none());
    }

    #[test]
    fn missing_university_is_not_found() {
        let (mut store, cert, clock) = fixture();
        let orphan = Certificate {
            university_id: UniversityId::new("gone"),
            ..cert.clone()
        };
        store.update_certificate(orphan.clone()).unwrap();
        assert!(CertificateView::resolve(Some(&orphan), &store, clock.now()).is_none());
    }

    #[test]
    fn deleted_certificate_is_not_found() {
        let (mut store, cert, clock) = fixture();
        store.delete_certificate(&cert.id).unwrap();
        assert!(CertificateView::resolve(Some(&cert), &store, clock.now()).is_none());
    }
}
