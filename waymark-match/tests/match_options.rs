//! Configuration and record loading through `serde`.

#![cfg(feature = "serde")]

use rstest::rstest;
use waymark_core::{HighlightColor, Record};
use waymark_match::{DEFAULT_MAX_RESULTS, MatchOptions, match_records};

#[rstest]
#[case(r#"{}"#, DEFAULT_MAX_RESULTS, "#0077ff")]
#[case(r#"{"max_results":3}"#, 3, "#0077ff")]
#[case(r##"{"highlight_color":"#FF0000"}"##, DEFAULT_MAX_RESULTS, "#ff0000")]
#[case(r##"{"max_results":0,"highlight_color":"#00ff00"}"##, 0, "#00ff00")]
fn options_fill_missing_fields(
    #[case] raw: &str,
    #[case] max_results: usize,
    #[case] colour: &str,
) {
    let options: MatchOptions = serde_json::from_str(raw).expect("valid options");
    assert_eq!(options.max_results, max_results);
    assert_eq!(options.highlight_color.to_string(), colour);
}

#[rstest]
#[case(r#"{"highlight_color":"red"}"#)]
#[case(r##"{"highlight_color":"#12345"}"##)]
fn options_reject_malformed_colours(#[case] raw: &str) {
    assert!(serde_json::from_str::<MatchOptions>(raw).is_err());
}

#[rstest]
fn options_round_trip_colour_as_hex() {
    let options = MatchOptions {
        max_results: 5,
        highlight_color: HighlightColor::new(0x12, 0x34, 0x56),
    };
    let json = serde_json::to_value(options).expect("serialise options");
    assert_eq!(json["highlight_color"], "#123456");
}

#[rstest]
fn records_from_json_rank_nulls_last() {
    let records: Vec<Record> = serde_json::from_str(
        r#"[
            {"title": "Kauppatori", "distance": null},
            {"title": "Kaivopuisto", "distance": 1200},
            {"title": "Kallio", "distance": 350}
        ]"#,
    )
    .expect("valid records");

    let found = match_records("ka", &records, &["distance", "title"]);
    let titles: Vec<_> = found
        .iter()
        .filter_map(|record| record.get("title"))
        .map(ToString::to_string)
        .collect();
    assert_eq!(titles, ["Kallio", "Kaivopuisto", "Kauppatori"]);
}
