use activity_rollup::duration::{encode_duration, parse_duration};
use activity_rollup::mappings::MappingTable;
use activity_rollup::remap::remap_tokens;
use proptest::prelude::*;

proptest! {
    #[test]
    fn duration_round_trips_for_well_formed_strings(
        hours in 0i64..=99,
        minutes in 0i64..=59,
        seconds in 0i64..=59,
    ) {
        let rendered = format!("{hours}:{minutes:02}:{seconds:02}");
        let total = parse_duration(&rendered).expect("well-formed duration");
        prop_assert_eq!(total, hours * 3600 + minutes * 60 + seconds);
        prop_assert_eq!(encode_duration(total), rendered);
    }

    #[test]
    fn encoded_durations_pad_minutes_and_seconds_but_not_hours(
        total in 0i64..=1_000_000
    ) {
        let rendered = encode_duration(total);
        let parts: Vec<&str> = rendered.split(':').collect();
        prop_assert_eq!(parts.len(), 3);
        prop_assert_eq!(parts[1].len(), 2);
        prop_assert_eq!(parts[2].len(), 2);
        // hours carry no leading zero
        prop_assert!(parts[0] == "0" || !parts[0].starts_with('0'));
        prop_assert_eq!(parse_duration(&rendered).expect("decode"), total);
    }

    #[test]
    fn token_remap_preserves_count_order_and_independence(
        tokens in proptest::collection::vec("[A-Za-z0-9=_]{0,12}", 1..6)
    ) {
        let mapping = MappingTable::from_entries([
            ("Area=account".to_string(), "area=Accounting".to_string()),
            ("Premium=premium_user".to_string(), "premium=VIP_User".to_string()),
        ]);
        let raw = tokens.join(";");
        let remapped = remap_tokens(&raw, &mapping);
        let out: Vec<&str> = remapped.split(';').collect();
        prop_assert_eq!(out.len(), tokens.len());
        for (token, mapped) in tokens.iter().zip(&out) {
            prop_assert_eq!(mapping.resolve(token), *mapped);
        }
    }
}
