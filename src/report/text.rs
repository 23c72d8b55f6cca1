use crate::model::scores::{RiskLevel, category_order};
use crate::report::{ReportContext, format_amount};

pub fn render_report_text(ctx: &ReportContext<'_>) -> String {
    let mut out = String::new();

    out.push_str("Contractor Quote Risk Report\n");
    out.push_str("============================\n\n");

    out.push_str("1. Overall risk\n");
    out.push_str(&format!("Final score: {}/100\n", ctx.result.final_score));
    out.push_str(&format!("Risk level: {}\n", ctx.result.risk_level.name()));
    out.push_str(&format!("{}\n\n", risk_statement(ctx.result.risk_level)));

    out.push_str("2. Category scores\n");
    for category in category_order() {
        out.push_str(&format!(
            "{}: {}/100\n",
            category.name(),
            ctx.result.category_scores.get(*category)
        ));
    }
    out.push('\n');

    out.push_str("3. Quote figures\n");
    match ctx.total {
        Some(total) => out.push_str(&format!("Quoted total: {}\n", format_amount(total))),
        None => out.push_str("Quoted total: not stated\n"),
    }
    match &ctx.confidence {
        Some(confidence) => out.push_str(&format!("Extraction confidence: {confidence}\n")),
        None => out.push_str("Extraction confidence: not stated\n"),
    }
    out.push_str(&format!(
        "Line items: {} ({} high-cost flags)\n",
        ctx.line_items, ctx.high_cost_flags
    ));
    out.push_str(&format!(
        "Scope items: {} defined, {} missing or unclear\n\n",
        ctx.scope_present, ctx.scope_missing
    ));

    out.push_str("4. Findings\n");
    for explanation in &ctx.result.explanations {
        out.push_str(&format!("- {explanation}\n"));
    }

    out
}

fn risk_statement(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "Conclusion: quote terms look balanced; proceed with standard diligence.",
        RiskLevel::Medium => {
            "Conclusion: quote has gaps worth clarifying before signing; see findings."
        }
        RiskLevel::High => {
            "Conclusion: quote carries significant risk markers; negotiate terms before committing."
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
