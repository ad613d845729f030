use proptest::prelude::*;
use sastopo_panel::fmri::{decode_phy_range, shorten, PhyRange};

fn authority() -> impl Strategy<Value = String> {
    // No `/`: the authority runs until the first path separator.
    proptest::string::string_regex("[A-Za-z0-9:=.-]{0,24}").unwrap()
}

fn path() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9=]{1,8}(/[A-Za-z0-9=]{1,8}){0,3}").unwrap()
}

// Decoration that can never contain `start-phy=` or extend a trailing digit
// run (no `-`, no leading digit).
fn prefix() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z:/=]{0,12}").unwrap()
}

fn suffix() -> impl Strategy<Value = String> {
    proptest::string::string_regex("([a-z:/=][a-z0-9:/=]{0,11})?").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn shorten_keeps_exactly_the_path(auth in authority(), p in path()) {
        let fmri = format!("scheme://{auth}/{p}");
        prop_assert_eq!(shorten(&fmri), format!("hc://{p}"));
    }

    #[test]
    fn shorten_without_scheme_is_identity(s in "[A-Za-z0-9/.-]{0,20}") {
        prop_assume!(!s.contains("://"));
        prop_assert_eq!(shorten(&s), s);
    }

    #[test]
    fn phy_range_survives_surrounding_noise(
        pre in prefix(),
        suf in suffix(),
        start in 0u32..128,
        span in 0u32..16,
    ) {
        let end = start + span;
        let fmri = format!("{pre}start-phy={start}:end-phy={end}{suf}");
        let range = decode_phy_range(&fmri).expect("decode");
        prop_assert_eq!(range, PhyRange { start, count: span + 1 });
    }

    #[test]
    fn inverted_ranges_never_decode(start in 1u32..128, shrink in 1u32..16) {
        let end = start.saturating_sub(shrink.min(start));
        prop_assume!(end < start);
        let fmri = format!("port=0?start-phy={start}:end-phy={end}");
        prop_assert!(decode_phy_range(&fmri).is_err());
    }
}
