use crate::model::scores::{
    Category, CategoryOutcome, CategoryScores, RiskLevel, ScoreResult, category_order, clamp_round,
};
use crate::model::weights::WeightProfile;

#[derive(Debug, Clone)]
pub struct CategoryOutcomes {
    pub payment: CategoryOutcome,
    pub timeline: CategoryOutcome,
    pub scope: CategoryOutcome,
    pub warranty: CategoryOutcome,
    pub pricing: CategoryOutcome,
}

impl CategoryOutcomes {
    fn get(&self, category: Category) -> &CategoryOutcome {
        match category {
            Category::Payment => &self.payment,
            Category::Timeline => &self.timeline,
            Category::Scope => &self.scope,
            Category::Warranty => &self.warranty,
            Category::Pricing => &self.pricing,
        }
    }
}

/// Pure numeric fold over the five category outcomes. No failure path:
/// every scorer is total, so aggregation is too.
pub fn aggregate(outcomes: &CategoryOutcomes, weights: &WeightProfile) -> ScoreResult {
    let category_scores = CategoryScores {
        payment: outcomes.payment.score,
        timeline: outcomes.timeline.score,
        scope: outcomes.scope.score,
        warranty: outcomes.warranty.score,
        pricing: outcomes.pricing.score,
    };

    let final_score = weighted_final(&category_scores, weights);

    let mut explanations = Vec::new();
    for category in category_order() {
        explanations.extend(outcomes.get(*category).notes.iter().cloned());
    }

    ScoreResult {
        final_score,
        risk_level: RiskLevel::from_score(final_score),
        category_scores,
        explanations,
    }
}

/// Folds already-rounded category integers, so recomputing from a
/// `ScoreResult`'s category scores reproduces its final score exactly.
pub fn weighted_final(scores: &CategoryScores, weights: &WeightProfile) -> u8 {
    let mut sum = 0.0;
    for category in category_order() {
        sum += weights.weight(*category) * f64::from(scores.get(*category));
    }
    clamp_round(sum)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/aggregate.rs"]
mod tests;
