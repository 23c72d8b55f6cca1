pub mod aggregate;
pub mod normalize;
pub mod payment;
pub mod pricing;
pub mod scope;
pub mod timeline;
pub mod warranty;

use crate::model::report::QuoteReport;
use crate::model::scores::ScoreResult;
use crate::model::weights::WeightProfile;
use crate::pipeline::aggregate::CategoryOutcomes;

/// Scores one extracted quote report. Deterministic and total: any input,
/// however incomplete, maps to a valid result.
pub fn score_quote(report: &QuoteReport) -> ScoreResult {
    score_quote_with_weights(report, &WeightProfile::default_v1())
}

pub fn score_quote_with_weights(report: &QuoteReport, weights: &WeightProfile) -> ScoreResult {
    let normalized = normalize::normalize(report);

    let outcomes = CategoryOutcomes {
        payment: payment::score_payment(&normalized),
        timeline: timeline::score_timeline(&normalized),
        scope: scope::score_scope(&normalized),
        warranty: warranty::score_warranty(&normalized),
        pricing: pricing::score_pricing(&normalized),
    };

    aggregate::aggregate(&outcomes, weights)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/scoring.rs"]
mod tests;
