use crate::model::scores::{CategoryOutcome, clamp_round};
use crate::pipeline::normalize::NormalizedReport;

pub fn score_warranty(report: &NormalizedReport) -> CategoryOutcome {
    let has_mention = report.scope_present.iter().any(|item| item.contains("warrant"));
    let has_labor = report.scope_present.iter().any(|item| {
        item.contains("warrant") && (item.contains("labor") || item.contains("workmanship"))
    });
    let notes_mention = report.notes_text.contains("warrant");

    // Ordered overwrite ladder; later rules intentionally override earlier
    // ones even when several conditions hold at once.
    let mut score = 30.0;
    if has_mention {
        score = 65.0;
    }
    if has_labor || (has_mention && notes_mention) {
        score = 85.0;
    }
    if has_mention && has_labor {
        score = 95.0;
    }

    let mut notes = Vec::new();
    if !has_mention && !notes_mention {
        notes.push("Warranty coverage is not clearly stated in the quote.".to_string());
    } else if has_labor {
        notes.push("Labor or workmanship warranty is mentioned.".to_string());
    } else {
        notes.push("Warranty is mentioned; confirm labor and materials coverage.".to_string());
    }

    CategoryOutcome {
        score: clamp_round(score),
        notes,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/warranty.rs"]
mod tests;
