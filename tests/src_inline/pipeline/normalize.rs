use super::*;

fn report_from_json(raw: &str) -> QuoteReport {
    serde_json::from_str(raw).unwrap()
}

#[test]
fn test_empty_report_defaults() {
    let norm = normalize(&QuoteReport::default());
    assert_eq!(norm.deposit_percent, None);
    assert_eq!(norm.payment_terms_text, "");
    assert_eq!(norm.schedule_entries, 0);
    assert!(!norm.timeline_present);
    assert_eq!(norm.timeline_clarity, TimelineClarity::Missing);
    assert!(norm.scope_present.is_empty());
    assert_eq!(norm.scope_missing, 0);
    assert!(norm.line_items.is_empty());
    assert_eq!(norm.total, None);
    assert_eq!(norm.total_divisor, 1.0);
    assert_eq!(norm.notes_text, "");
}

#[test]
fn test_text_fields_lowercased_once() {
    let report = report_from_json(
        r#"{
            "payment": {"payment_terms_text": "50% DUE at Start"},
            "timeline": {"timeline_text": "Two WEEKS"},
            "scope": {"present": ["Labor Warranty", "Flashing"]},
            "notes": ["Check WARRANTY terms"]
        }"#,
    );
    let norm = normalize(&report);
    assert_eq!(norm.payment_terms_text, "50% due at start");
    assert_eq!(norm.timeline_text, "two weeks");
    assert_eq!(norm.scope_present, vec!["labor warranty", "flashing"]);
    assert_eq!(norm.notes_text, "check warranty terms");
}

#[test]
fn test_clarity_mapping_tolerates_unknown_values() {
    for (raw, expected) in [
        (r#"{"timeline": {"timeline_clarity": "clear"}}"#, TimelineClarity::Clear),
        (r#"{"timeline": {"timeline_clarity": "basic"}}"#, TimelineClarity::Basic),
        (r#"{"timeline": {"timeline_clarity": "detailed"}}"#, TimelineClarity::Missing),
        (r#"{"timeline": {}}"#, TimelineClarity::Missing),
    ] {
        let norm = normalize(&report_from_json(raw));
        assert_eq!(norm.timeline_clarity, expected, "raw: {raw}");
    }
}

#[test]
fn test_total_sentinel_guards_division_only() {
    let norm = normalize(&report_from_json(r#"{"summary": {"total": 0}}"#));
    assert_eq!(norm.total, None);
    assert_eq!(norm.total_divisor, 1.0);

    let norm = normalize(&report_from_json(r#"{"summary": {"total": -20}}"#));
    assert_eq!(norm.total, None);
    assert_eq!(norm.total_divisor, 1.0);

    let norm = normalize(&report_from_json(r#"{"summary": {"total": 12500}}"#));
    assert_eq!(norm.total, Some(12500.0));
    assert_eq!(norm.total_divisor, 12500.0);
}

#[test]
fn test_summary_accepts_quote_overview_alias() {
    let norm = normalize(&report_from_json(r#"{"quote_overview": {"total": 9000}}"#));
    assert_eq!(norm.total, Some(9000.0));
}

#[test]
fn test_line_item_absence_not_coerced_to_zero() {
    let norm = normalize(&report_from_json(
        r#"{"costs": {"line_items": [{"name": "tear-off"}, {"name": "shingles", "total": 0}]}}"#,
    ));
    assert_eq!(norm.line_items.len(), 2);
    assert_eq!(norm.line_items[0].total, None);
    assert_eq!(norm.line_items[1].total, Some(0.0));
}
