use crate::model::report::{
    CostsSection, LineItem, QualitySection, QuoteReport, ScopeSection, SummarySection,
    TimelineSection,
};

/// Maps the AI-confidence "signals" shape onto the canonical report shape.
///
/// Red-flag counts become the equivalent extracted evidence: missing-scope
/// counts turn into placeholder missing items, pricing outliers into
/// high-cost flags, timeline red flags into an explicitly absent timeline.
/// Warranty red flags add nothing; absent warranty evidence already scores
/// at the floor.
pub fn from_signals(report: QuoteReport) -> QuoteReport {
    let signals = report.signals.clone().unwrap_or_default();
    let quality = report.quality.clone().unwrap_or_default();
    let mut out = report;

    let missing = signals.missing_scope.unwrap_or(0) as usize;
    if missing > 0 {
        out.scope = Some(ScopeSection {
            present: Some(Vec::new()),
            missing_or_unclear: Some(vec!["unspecified scope item".to_string(); missing]),
        });
    }

    let outliers = signals.pricing_outliers.unwrap_or(0) as usize;
    if outliers > 0 {
        out.costs = Some(CostsSection {
            line_items: Some(Vec::new()),
            high_cost_flags: Some(vec![serde_json::Value::Null; outliers]),
        });
    }

    if signals.timeline_red_flags.unwrap_or(0) > 0 {
        out.timeline = Some(TimelineSection {
            timeline_present: Some(false),
            timeline_clarity: None,
            timeline_text: None,
        });
    }

    let has_confidence = out
        .summary
        .as_ref()
        .is_some_and(|s| s.confidence.is_some());
    if !has_confidence {
        if let Some(confidence) = confidence_from_quality(&quality) {
            let mut summary = out.summary.take().unwrap_or_default();
            summary.confidence = Some(confidence.to_string());
            out.summary = Some(summary);
        }
    }

    out
}

fn confidence_from_quality(quality: &QualitySection) -> Option<&'static str> {
    let mut values = Vec::new();
    if let Some(v) = quality.doc_quality.filter(|v| v.is_finite()) {
        values.push(v);
    }
    if let Some(v) = quality.line_item_clarity.filter(|v| v.is_finite()) {
        values.push(v);
    }
    if values.is_empty() {
        return None;
    }
    let avg = values.iter().sum::<f64>() / values.len() as f64;
    Some(if avg >= 0.75 {
        "high"
    } else if avg >= 0.45 {
        "medium"
    } else {
        "low"
    })
}

/// Builds a canonical report from the raw line-item/scope extraction shape,
/// deriving the total from line totals when any are present.
pub fn from_extraction(
    line_items: Vec<LineItem>,
    present: Vec<String>,
    missing_or_unclear: Vec<String>,
) -> QuoteReport {
    let mut sum = 0.0;
    let mut seen = false;
    for item in &line_items {
        if let Some(total) = item.total.filter(|t| t.is_finite()) {
            sum += total;
            seen = true;
        }
    }
    let total = (seen && sum > 0.0).then_some(sum);

    QuoteReport {
        scope: Some(ScopeSection {
            present: Some(present),
            missing_or_unclear: Some(missing_or_unclear),
        }),
        costs: Some(CostsSection {
            line_items: Some(line_items),
            high_cost_flags: None,
        }),
        summary: total.map(|t| SummarySection {
            total: Some(t),
            confidence: None,
        }),
        ..QuoteReport::default()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/adapters.rs"]
mod tests;
