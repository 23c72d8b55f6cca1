use super::*;

#[test]
fn test_empty_and_null_documents_are_empty_reports() {
    assert_eq!(parse_report("").unwrap(), QuoteReport::default());
    assert_eq!(parse_report("   \n").unwrap(), QuoteReport::default());
    assert_eq!(parse_report("null").unwrap(), QuoteReport::default());
    assert_eq!(parse_report("{}").unwrap(), QuoteReport::default());
}

#[test]
fn test_malformed_json_is_a_parse_error() {
    let err = parse_report("{not json").unwrap_err();
    assert!(matches!(err, InputError::Parse(_)));
    assert!(err.to_string().starts_with("parse error:"));
}

#[test]
fn test_unknown_fields_are_ignored() {
    let report = parse_report(
        r#"{"payment": {"deposit_percent": 25, "contractor_name": "Acme"}, "page_count": 3}"#,
    )
    .unwrap();
    assert_eq!(
        report.payment.as_ref().and_then(|p| p.deposit_percent),
        Some(25.0)
    );
}

#[test]
fn test_extracted_sections_pass_through_unchanged() {
    let report = parse_report(
        r#"{
            "scope": {"present": ["tear-off"], "missing_or_unclear": []},
            "signals": {"missing_scope": 4}
        }"#,
    )
    .unwrap();
    // Extracted data wins; the signals section is not adapted over it.
    let scope = report.scope.unwrap();
    assert_eq!(scope.present, Some(vec!["tear-off".to_string()]));
    assert_eq!(scope.missing_or_unclear, Some(Vec::new()));
}

#[test]
fn test_signals_only_document_is_adapted() {
    let report = parse_report(
        r#"{"signals": {"missing_scope": 2, "pricing_outliers": 1}, "quality": {"doc_quality": 0.9}}"#,
    )
    .unwrap();
    let scope = report.scope.expect("adapter should synthesize scope");
    assert_eq!(scope.missing_or_unclear.map(|m| m.len()), Some(2));
    let costs = report.costs.expect("adapter should synthesize costs");
    assert_eq!(costs.high_cost_flags.map(|f| f.len()), Some(1));
}
