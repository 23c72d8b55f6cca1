use crate::model::scores::{CategoryOutcome, clamp_round};
use crate::pipeline::normalize::NormalizedReport;

pub fn score_scope(report: &NormalizedReport) -> CategoryOutcome {
    let present = report.scope_present.len();
    let missing = report.scope_missing;
    let total = present + missing;

    let ratio = if total == 0 {
        0.0
    } else {
        present as f64 / total as f64
    };

    let mut notes = Vec::new();
    if total > 0 {
        notes.push(format!(
            "{present} of {total} scope items are clearly defined; {missing} are missing or unclear."
        ));
    } else {
        notes.push(
            "Scope detail is limited; key items (materials, permit, cleanup) may need clarification."
                .to_string(),
        );
    }

    CategoryOutcome {
        score: clamp_round(ratio * 100.0),
        notes,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/scope.rs"]
mod tests;
