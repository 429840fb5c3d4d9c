use proptest::prelude::*;

use certify_types::{CertificateId, UniversityId};

proptest! {
    /// Composed ids always have four dash-separated parts with the documented shape.
    #[test]
    fn composed_id_shape(
        major in "[a-zA-Z]{2,20}",
        uni in "[a-z0-9]{1,12}",
        year in 1970i32..9999,
        suffix in 100u32..=999,
    ) {
        let id = CertificateId::compose(&major, &UniversityId::new(uni.clone()), year, suffix);
        let parts: Vec<&str> = id.as_str().split('-').collect();
        prop_assert_eq!(parts.len(), 4);
        prop_assert_eq!(parts[0], major[..2].to_uppercase());
        prop_assert_eq!(parts[1], uni.to_uppercase());
        prop_assert_eq!(parts[2], format!("{year:04}"));
        prop_assert_eq!(parts[3].len(), 3);
        prop_assert_eq!(parts[3].parse::<u32>().unwrap(), suffix);
    }

    /// An id matches any re-cased, whitespace-padded copy of itself.
    #[test]
    fn matches_recased_padded_copy(
        raw in "[A-Z]{2}-[A-Z0-9]{1,8}-[0-9]{4}-[0-9]{3}",
        lower in any::<bool>(),
        pad_left in "[ \t]{0,3}",
        pad_right in "[ \t\n]{0,3}",
    ) {
        let id = CertificateId::new(raw.clone());
        let cased = if lower { raw.to_lowercase() } else { raw.clone() };
        let candidate = format!("{pad_left}{cased}{pad_right}");
        prop_assert!(id.matches(&candidate));
    }

    /// Distinct ids never match each other.
    #[test]
    fn distinct_ids_do_not_match(
        a in "[A-Z]{2}-[A-Z]{3}-[0-9]{4}-[0-9]{3}",
        b in "[A-Z]{2}-[A-Z]{3}-[0-9]{4}-[0-9]{3}",
    ) {
        prop_assume!(a != b);
        prop_assert!(!CertificateId::new(a).matches(&b));
    }

    /// University generation tokens survive the id round trip.
    #[test]
    fn university_token_roundtrip(token in 0u64..u64::MAX) {
        prop_assert_eq!(UniversityId::from_token(token).token(), Some(token));
    }
}
