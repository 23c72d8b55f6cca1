use std::fs;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::model::report::QuoteReport;

pub mod adapters;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn load_report(path: &Path) -> Result<QuoteReport, InputError> {
    let raw = fs::read_to_string(path)?;
    tracing::info!("loaded report document: {} ({} bytes)", path.display(), raw.len());
    parse_report(&raw)
}

pub fn load_report_stdin() -> Result<QuoteReport, InputError> {
    let mut raw = String::new();
    std::io::stdin().read_to_string(&mut raw)?;
    parse_report(&raw)
}

/// Parses one extracted report document. An empty or `null` document is a
/// valid, fully-empty report; only malformed JSON is an error, and that is
/// the upstream extractor's failure, not the scorer's.
pub fn parse_report(raw: &str) -> Result<QuoteReport, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(QuoteReport::default());
    }
    let report: QuoteReport = serde_json::from_str(trimmed)?;
    Ok(resolve_report(report))
}

/// Picks the input adapter for documents that carry only the alternate
/// signals/quality shape instead of extracted sections.
pub fn resolve_report(report: QuoteReport) -> QuoteReport {
    let has_extracted = report.payment.is_some()
        || report.timeline.is_some()
        || report.scope.is_some()
        || report.costs.is_some();

    if !has_extracted && (report.signals.is_some() || report.quality.is_some()) {
        tracing::info!("no extracted sections found; adapting signals/quality input shape");
        return adapters::from_signals(report);
    }
    if report.is_empty() {
        tracing::warn!("report carries no extracted data; scoring with defaults");
    }
    report
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
