use crate::model::scores::{CategoryOutcome, clamp_round};
use crate::pipeline::normalize::NormalizedReport;

const MILESTONE_PHRASES: &[&str] = &[
    "milestone",
    "phase",
    "stage",
    "upon completion",
    "after tear-off",
    "after inspection",
    "after delivery",
    "% at",
    "% upon",
    "% due",
];

const COMPLETION_WORDS: &[&str] = &["final", "inspection", "sign-off", "completion"];
const PAYMENT_WORDS: &[&str] = &["payment", "due", "%"];

pub fn score_payment(report: &NormalizedReport) -> CategoryOutcome {
    let text = report.payment_terms_text.as_str();

    // Deposit ladder overrides the unknown-deposit base.
    let mut score: f64 = 70.0;
    if let Some(deposit) = report.deposit_percent {
        score = if deposit <= 20.0 {
            90.0
        } else if deposit <= 30.0 {
            75.0
        } else if deposit <= 50.0 {
            55.0
        } else {
            35.0
        };
    }

    let milestone = MILESTONE_PHRASES.iter().any(|p| text.contains(p)) || report.schedule_entries >= 2;
    if milestone {
        score = (score + 10.0).min(100.0);
    }

    let inspection_tied = COMPLETION_WORDS.iter().any(|w| text.contains(w))
        && PAYMENT_WORDS.iter().any(|w| text.contains(w));
    if inspection_tied {
        score = (score + 5.0).min(100.0);
    }

    let mut notes = Vec::new();
    if let Some(deposit) = report.deposit_percent {
        if deposit > 30.0 {
            notes.push(format!(
                "Deposit is {}% (typical range 10–30%), which increases payment risk.",
                format_percent(deposit)
            ));
        } else if deposit <= 20.0 {
            notes.push(format!(
                "Deposit of {}% is within a reasonable range.",
                format_percent(deposit)
            ));
        }
    }
    if milestone {
        notes.push("Quote references milestone- or phase-based payments.".to_string());
    }
    if inspection_tied {
        notes.push("Final payment is tied to inspection or completion.".to_string());
    }
    if !milestone && !inspection_tied && (!text.is_empty() || report.deposit_percent.is_some()) {
        notes.push(
            "Consider requesting milestone-based payments and final payment after inspection."
                .to_string(),
        );
    }

    CategoryOutcome {
        score: clamp_round(score),
        notes,
    }
}

fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/payment.rs"]
mod tests;
