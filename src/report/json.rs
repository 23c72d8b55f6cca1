use crate::model::scores::ScoreResult;

/// The machine contract is the `ScoreResult` struct itself.
pub fn render_score_json(result: &ScoreResult) -> String {
    let mut out = serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string());
    out.push('\n');
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
