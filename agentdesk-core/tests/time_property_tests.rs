//! Property tests for wire timestamp handling.

use agentdesk_core::{parse_timestamp, to_iso, HttpMethod, MessageRole};
use chrono::{DateTime, Utc};
use proptest::prelude::*;

fn arb_millis_timestamp() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..4_102_444_800_000).prop_filter_map("out of range", DateTime::from_timestamp_millis)
}

proptest! {
    #[test]
    fn iso_output_parses_back(ts in arb_millis_timestamp()) {
        let wire = to_iso(Some(&ts)).unwrap();
        prop_assert!(wire.ends_with('Z'));
        prop_assert_eq!(parse_timestamp(Some(&wire)), Some(ts));
    }

    #[test]
    fn parse_never_panics(raw in "\\PC{0,40}") {
        let _ = parse_timestamp(Some(&raw));
    }

    #[test]
    fn words_are_not_dates(raw in "[a-z ]{1,20}") {
        prop_assert_eq!(parse_timestamp(Some(&raw)), None);
    }

    #[test]
    fn enum_strings_round_trip(index in 0usize..16) {
        let roles = MessageRole::all();
        let role = roles[index % roles.len()];
        prop_assert_eq!(role.as_str().parse::<MessageRole>().unwrap(), role);

        let methods = HttpMethod::all();
        let method = methods[index % methods.len()];
        prop_assert_eq!(method.as_str().to_lowercase().parse::<HttpMethod>().unwrap(), method);
    }
}
