use crate::model::scores::{CategoryOutcome, clamp_round};
use crate::pipeline::normalize::NormalizedReport;

pub fn score_pricing(report: &NormalizedReport) -> CategoryOutcome {
    let itemized = report.line_items.len();

    let mut score: f64 = 60.0;
    if itemized >= 3 {
        score = 80.0;
    }
    if itemized >= 5 {
        score = 90.0;
    }

    // Requires a known positive report total so the divisor sentinel can
    // never manufacture a flag on its own.
    let large_single_line = report.total.is_some()
        && !report.line_items.is_empty()
        && report
            .line_items
            .iter()
            .any(|item| item.total.is_some_and(|t| t > 0.5 * report.total_divisor));
    if large_single_line {
        score = (score - 25.0).max(0.0);
    }

    let mut notes = Vec::new();
    if itemized == 0 {
        notes.push(
            "Quote does not show itemized line items; request a breakdown of labor, materials, and other costs."
                .to_string(),
        );
    } else if itemized >= 3 {
        notes.push(format!(
            "Quote includes {itemized} line items, which helps verify pricing."
        ));
    }
    if large_single_line {
        notes.push(
            "A single line item represents more than half of the total; ask for more detail on that cost."
                .to_string(),
        );
    }

    CategoryOutcome {
        score: clamp_round(score),
        notes,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/pricing.rs"]
mod tests;
