pub mod json;
pub mod text;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;

use crate::model::report::QuoteReport;
use crate::model::scores::ScoreResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Json,
    Text,
    Both,
}

/// Quote-level facts surfaced in the text report alongside the scores.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    pub result: &'a ScoreResult,
    pub total: Option<f64>,
    pub confidence: Option<String>,
    pub line_items: usize,
    pub high_cost_flags: usize,
    pub scope_present: usize,
    pub scope_missing: usize,
}

pub fn build_context<'a>(report: &QuoteReport, result: &'a ScoreResult) -> ReportContext<'a> {
    let costs = report.costs.clone().unwrap_or_default();
    let scope = report.scope.clone().unwrap_or_default();
    ReportContext {
        result,
        total: report
            .summary
            .as_ref()
            .and_then(|s| s.total)
            .filter(|t| t.is_finite() && *t > 0.0),
        confidence: report.summary.as_ref().and_then(|s| s.confidence.clone()),
        line_items: costs.line_items.map(|i| i.len()).unwrap_or(0),
        high_cost_flags: costs.high_cost_flags.map(|f| f.len()).unwrap_or(0),
        scope_present: scope.present.map(|p| p.len()).unwrap_or(0),
        scope_missing: scope.missing_or_unclear.map(|m| m.len()).unwrap_or(0),
    }
}

pub fn write_reports(
    report: &QuoteReport,
    result: &ScoreResult,
    out_dir: &Path,
    format: ReportFormat,
) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    if matches!(format, ReportFormat::Json | ReportFormat::Both) {
        let path = out_dir.join("quote_score.json");
        write_text(&path, &json::render_score_json(result))?;
    }
    if matches!(format, ReportFormat::Text | ReportFormat::Both) {
        let path = out_dir.join("quote_report.txt");
        let ctx = build_context(report, result);
        write_text(&path, &text::render_report_text(&ctx))?;
    }

    Ok(())
}

fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(content.as_bytes())?;
    Ok(())
}

pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}
