use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Payment,
    Timeline,
    Scope,
    Warranty,
    Pricing,
}

/// Fixed evaluation order; explanation output follows it verbatim.
pub fn category_order() -> &'static [Category] {
    &[
        Category::Payment,
        Category::Timeline,
        Category::Scope,
        Category::Warranty,
        Category::Pricing,
    ]
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Payment => "payment",
            Category::Timeline => "timeline",
            Category::Scope => "scope",
            Category::Warranty => "warranty",
            Category::Pricing => "pricing",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryScores {
    pub payment: u8,
    pub timeline: u8,
    pub scope: u8,
    pub warranty: u8,
    pub pricing: u8,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> u8 {
        match category {
            Category::Payment => self.payment,
            Category::Timeline => self.timeline,
            Category::Scope => self.scope,
            Category::Warranty => self.warranty,
            Category::Pricing => self.pricing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

pub const LOW_RISK_MIN: u8 = 85;
pub const MEDIUM_RISK_MIN: u8 = 65;

impl RiskLevel {
    /// Monotonic mapping from the final score; the only classification rule.
    pub fn from_score(final_score: u8) -> Self {
        if final_score >= LOW_RISK_MIN {
            RiskLevel::Low
        } else if final_score >= MEDIUM_RISK_MIN {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

/// Output contract of the scoring pipeline. Constructed once per call,
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub final_score: u8,
    pub risk_level: RiskLevel,
    pub category_scores: CategoryScores,
    pub explanations: Vec<String>,
}

/// Score plus explanation notes from a single category scorer.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryOutcome {
    pub score: u8,
    pub notes: Vec<String>,
}

pub fn clamp_round(score: f64) -> u8 {
    score.clamp(0.0, 100.0).round() as u8
}
