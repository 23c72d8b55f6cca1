use super::*;

fn base() -> NormalizedReport {
    NormalizedReport::default()
}

#[test]
fn test_unknown_deposit_base() {
    let out = score_payment(&base());
    assert_eq!(out.score, 70);
    assert!(out.notes.is_empty());
}

#[test]
fn test_deposit_ladder() {
    for (deposit, expected) in [(10.0, 90), (20.0, 90), (25.0, 75), (30.0, 75), (45.0, 55), (50.0, 55), (60.0, 35)] {
        let mut report = base();
        report.deposit_percent = Some(deposit);
        let out = score_payment(&report);
        assert_eq!(out.score, expected, "deposit: {deposit}");
    }
}

#[test]
fn test_low_deposit_with_milestones_and_inspection_hits_cap() {
    let mut report = base();
    report.deposit_percent = Some(15.0);
    report.payment_terms_text =
        "15% deposit, 45% at milestone phase, final payment due upon inspection".to_string();
    let out = score_payment(&report);
    assert_eq!(out.score, 100);
    assert_eq!(
        out.notes,
        vec![
            "Deposit of 15% is within a reasonable range.".to_string(),
            "Quote references milestone- or phase-based payments.".to_string(),
            "Final payment is tied to inspection or completion.".to_string(),
        ]
    );
}

#[test]
fn test_high_deposit_explanation() {
    let mut report = base();
    report.deposit_percent = Some(45.0);
    let out = score_payment(&report);
    assert_eq!(out.score, 55);
    assert_eq!(
        out.notes,
        vec![
            "Deposit is 45% (typical range 10–30%), which increases payment risk.".to_string(),
            "Consider requesting milestone-based payments and final payment after inspection."
                .to_string(),
        ]
    );
}

#[test]
fn test_mid_deposit_emits_no_deposit_note() {
    let mut report = base();
    report.deposit_percent = Some(25.0);
    let out = score_payment(&report);
    assert_eq!(out.score, 75);
    assert_eq!(
        out.notes,
        vec![
            "Consider requesting milestone-based payments and final payment after inspection."
                .to_string()
        ]
    );
}

#[test]
fn test_schedule_entries_count_as_milestones() {
    let mut report = base();
    report.schedule_entries = 2;
    let out = score_payment(&report);
    assert_eq!(out.score, 80);
    assert_eq!(
        out.notes,
        vec!["Quote references milestone- or phase-based payments.".to_string()]
    );
}

#[test]
fn test_single_schedule_entry_is_not_milestone_language() {
    let mut report = base();
    report.schedule_entries = 1;
    let out = score_payment(&report);
    assert_eq!(out.score, 70);
}

#[test]
fn test_lower_deposit_never_scores_worse() {
    let mut high = base();
    high.deposit_percent = Some(60.0);
    let mut low = base();
    low.deposit_percent = Some(15.0);
    assert!(score_payment(&low).score >= score_payment(&high).score);
}
