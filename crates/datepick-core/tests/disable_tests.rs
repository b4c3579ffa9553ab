//! Tests for disablement rules: each predicate on its own, OR composition,
//! range scans, and the JSON configuration shape.

use chrono::Weekday;
use datepick_core::{is_disabled, is_range_disabled, CalendarDate, DisablementRule, PickerError};

fn d(s: &str) -> CalendarDate {
    CalendarDate::parse(s).unwrap()
}

// ── Single predicates ───────────────────────────────────────────────────────

#[test]
fn empty_rule_disables_nothing() {
    let rules = DisablementRule::new();
    assert!(rules.is_empty());
    assert!(!is_disabled(d("2025-03-08"), &rules));
    assert!(!is_range_disabled(d("2000-01-01"), d("2030-12-31"), &rules));
}

#[test]
fn weekends_rule_matches_saturday_and_sunday() {
    let rules = DisablementRule::new().weekends();
    assert!(is_disabled(d("2025-03-08"), &rules)); // Sat
    assert!(is_disabled(d("2025-03-09"), &rules)); // Sun
    assert!(!is_disabled(d("2025-03-10"), &rules)); // Mon
}

#[test]
fn weekday_rule_matches_listed_days_only() {
    let rules = DisablementRule::new()
        .weekday(Weekday::Mon)
        .weekday(Weekday::Sat);
    assert!(is_disabled(d("2025-03-10"), &rules)); // Mon
    assert!(is_disabled(d("2025-03-08"), &rules)); // Sat
    assert!(!is_disabled(d("2025-03-09"), &rules)); // Sun
    assert!(!is_disabled(d("2025-03-11"), &rules)); // Tue
}

#[test]
fn explicit_dates_match_by_day() {
    let rules = DisablementRule::new().date(d("2025-06-05"));
    assert!(is_disabled(d("2025-06-05T18:30:00"), &rules));
    assert!(!is_disabled(d("2025-06-06"), &rules));
}

#[test]
fn start_alone_disables_strictly_after() {
    let rules = DisablementRule::new().disable_after(d("2025-06-04"));
    assert!(!is_disabled(d("2025-06-03"), &rules));
    assert!(!is_disabled(d("2025-06-04"), &rules));
    assert!(is_disabled(d("2025-06-05"), &rules));
    assert!(is_disabled(d("2030-01-01"), &rules));
}

#[test]
fn end_alone_disables_strictly_before() {
    let rules = DisablementRule::new().disable_before(d("2025-06-20"));
    assert!(is_disabled(d("1999-12-31"), &rules));
    assert!(is_disabled(d("2025-06-19"), &rules));
    assert!(!is_disabled(d("2025-06-20"), &rules));
    assert!(!is_disabled(d("2025-06-21"), &rules));
}

#[test]
fn start_and_end_together_disable_inclusive_span() {
    let rules = DisablementRule::new()
        .disable_after(d("2025-06-04"))
        .disable_before(d("2025-06-20"));
    assert!(!is_disabled(d("2025-06-03"), &rules));
    assert!(is_disabled(d("2025-06-04"), &rules));
    assert!(is_disabled(d("2025-06-12"), &rules));
    assert!(is_disabled(d("2025-06-20"), &rules));
    assert!(!is_disabled(d("2025-06-21"), &rules));
}

#[test]
fn between_is_inclusive_in_either_order() {
    let rules = DisablementRule::new().disable_between(d("2025-06-20"), d("2025-06-04"));
    assert!(is_disabled(d("2025-06-04"), &rules));
    assert!(is_disabled(d("2025-06-20"), &rules));
    assert!(!is_disabled(d("2025-06-21"), &rules));
    assert!(!is_disabled(d("2025-06-03"), &rules));
}

#[test]
fn predicates_combine_with_or() {
    let rules = DisablementRule::new()
        .weekends()
        .date(d("2025-03-12"))
        .disable_between(d("2025-03-24"), d("2025-03-25"));
    assert!(is_disabled(d("2025-03-08"), &rules));
    assert!(is_disabled(d("2025-03-12"), &rules));
    assert!(is_disabled(d("2025-03-25"), &rules));
    assert!(!is_disabled(d("2025-03-11"), &rules));
}

// ── Range scans ─────────────────────────────────────────────────────────────

#[test]
fn range_with_disabled_interior_day_is_disabled() {
    let rules = DisablementRule::new().date(d("2025-03-12"));
    assert!(is_range_disabled(d("2025-03-10"), d("2025-03-14"), &rules));
    assert!(is_range_disabled(d("2025-03-14"), d("2025-03-10"), &rules));
}

#[test]
fn range_endpoints_are_included_in_scan() {
    let rules = DisablementRule::new().date(d("2025-03-12"));
    assert!(is_range_disabled(d("2025-03-12"), d("2025-03-20"), &rules));
    assert!(is_range_disabled(d("2025-03-01"), d("2025-03-12"), &rules));
    assert!(is_range_disabled(d("2025-03-12"), d("2025-03-12"), &rules));
}

#[test]
fn clean_range_is_not_disabled() {
    let rules = DisablementRule::new().date(d("2025-03-12"));
    assert!(!is_range_disabled(d("2025-03-13"), d("2025-03-31"), &rules));
}

#[test]
fn weekend_rule_blocks_any_range_of_a_week_or_more() {
    let rules = DisablementRule::new().weekends();
    assert!(!is_range_disabled(d("2025-03-10"), d("2025-03-14"), &rules));
    assert!(is_range_disabled(d("2025-03-10"), d("2025-03-16"), &rules));
}

// ── JSON shape ──────────────────────────────────────────────────────────────

#[test]
fn parses_provider_style_json() {
    let json = r#"{
        "every": "weekdays",
        "weekdays": [1, 6],
        "days": ["2025-6-05", "2025-7-2"],
        "start": "2025-6-4",
        "end": "2025-6-20"
    }"#;
    let rules: DisablementRule = serde_json::from_str(json).unwrap();

    assert!(!rules.weekends);
    assert_eq!(rules.weekdays, vec![Weekday::Mon, Weekday::Sat]);
    assert_eq!(rules.dates, vec![d("2025-06-05"), d("2025-07-02")]);
    assert!(is_disabled(d("2025-06-10"), &rules)); // inside start..end
    assert!(is_disabled(d("2025-07-02"), &rules)); // explicit
    assert!(is_disabled(d("2025-07-07"), &rules)); // Monday
    assert!(!is_disabled(d("2025-07-08"), &rules)); // Tuesday, outside span
}

#[test]
fn parses_weekend_selector() {
    let rules: DisablementRule =
        serde_json::from_str(r#"{"every": "weekend", "days": ["2025-12-01"]}"#).unwrap();
    assert!(rules.weekends);
    assert!(is_disabled(d("2025-12-06"), &rules));
    assert!(is_disabled(d("2025-12-01"), &rules));
    assert!(!is_disabled(d("2025-12-02"), &rules));
}

#[test]
fn parses_between_object() {
    let rules: DisablementRule = serde_json::from_str(
        r#"{"between": {"start": "2025-03-20", "end": "2025-03-10"}}"#,
    )
    .unwrap();
    assert!(is_disabled(d("2025-03-15"), &rules));
    assert!(!is_disabled(d("2025-03-21"), &rules));
}

#[test]
fn out_of_range_weekday_is_rejected() {
    let err = serde_json::from_str::<DisablementRule>(r#"{"weekdays": [7]}"#).unwrap_err();
    assert!(err.to_string().contains("Invalid weekday: 7"), "{}", err);
}

#[test]
fn unknown_rule_key_is_rejected() {
    assert!(serde_json::from_str::<DisablementRule>(r#"{"weekend": true}"#).is_err());
}

#[test]
fn bad_date_in_rule_is_rejected() {
    let err = serde_json::from_str::<DisablementRule>(r#"{"days": ["2025-02-30"]}"#).unwrap_err();
    assert!(err.to_string().contains("Invalid date"), "{}", err);
}

#[test]
fn rule_survives_serialization() {
    let rules = DisablementRule::new()
        .weekends()
        .weekday(Weekday::Wed)
        .date(d("2025-03-12"))
        .disable_after(d("2025-12-31"));
    let json = serde_json::to_string(&rules).unwrap();
    let back: DisablementRule = serde_json::from_str(&json).unwrap();
    assert_eq!(back, rules);
}

#[test]
fn weekday_error_variant_from_number() {
    assert!(matches!(
        datepick_core::date::weekday_from_number(9),
        Err(PickerError::InvalidWeekday(9))
    ));
}
