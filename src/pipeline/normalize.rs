use crate::model::report::{LineItem, QuoteReport};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimelineClarity {
    Clear,
    Basic,
    #[default]
    Missing,
}

/// Canonical view of a report after default substitution. Every downstream
/// scorer takes this and only this; all "is the field present" branching
/// lives here.
#[derive(Debug, Clone)]
pub struct NormalizedReport {
    pub deposit_percent: Option<f64>,
    pub payment_terms_text: String,
    pub schedule_entries: usize,

    pub timeline_present: bool,
    pub timeline_clarity: TimelineClarity,
    pub timeline_text: String,

    pub scope_present: Vec<String>,
    pub scope_missing: usize,

    pub line_items: Vec<LineItem>,
    pub high_cost_flags: usize,

    /// Report total, kept only when known and positive.
    pub total: Option<f64>,
    /// Divisor guard for ratio math; never surfaced in output.
    pub total_divisor: f64,

    pub notes_text: String,
}

pub fn normalize(report: &QuoteReport) -> NormalizedReport {
    let payment = report.payment.clone().unwrap_or_default();
    let timeline = report.timeline.clone().unwrap_or_default();
    let scope = report.scope.clone().unwrap_or_default();
    let costs = report.costs.clone().unwrap_or_default();
    let summary = report.summary.clone().unwrap_or_default();

    let deposit_percent = payment.deposit_percent.filter(|v| v.is_finite());
    let payment_terms_text = payment
        .payment_terms_text
        .map(|t| t.to_lowercase())
        .unwrap_or_default();
    let schedule_entries = payment
        .recommended_schedule_example
        .map(|s| s.len())
        .unwrap_or(0);

    let timeline_text = timeline
        .timeline_text
        .map(|t| t.to_lowercase())
        .unwrap_or_default();
    let timeline_clarity = match timeline.timeline_clarity.as_deref() {
        Some("clear") => TimelineClarity::Clear,
        Some("basic") => TimelineClarity::Basic,
        _ => TimelineClarity::Missing,
    };

    let scope_present = scope
        .present
        .unwrap_or_default()
        .iter()
        .map(|s| s.to_lowercase())
        .collect();
    let scope_missing = scope.missing_or_unclear.map(|m| m.len()).unwrap_or(0);

    let total = summary.total.filter(|t| t.is_finite() && *t > 0.0);

    let notes_text = report
        .notes
        .clone()
        .unwrap_or_default()
        .join(" ")
        .to_lowercase();

    NormalizedReport {
        deposit_percent,
        payment_terms_text,
        schedule_entries,
        timeline_present: timeline.timeline_present.unwrap_or(false),
        timeline_clarity,
        timeline_text,
        scope_present,
        scope_missing,
        line_items: costs.line_items.unwrap_or_default(),
        high_cost_flags: costs.high_cost_flags.map(|f| f.len()).unwrap_or(0),
        total,
        total_divisor: total.unwrap_or(1.0),
        notes_text,
    }
}

impl Default for NormalizedReport {
    fn default() -> Self {
        normalize(&QuoteReport::default())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/normalize.rs"]
mod tests;
