use crate::model::scores::Category;

/// Aggregation weights for the five category scores. Weights sum to 1.0 so
/// the weighted blend stays in the same 0..=100 range as its inputs.
#[derive(Debug, Clone)]
pub struct WeightProfile {
    pub payment: f64,
    pub timeline: f64,
    pub scope: f64,
    pub warranty: f64,
    pub pricing: f64,
}

impl WeightProfile {
    pub fn default_v1() -> Self {
        Self {
            payment: 0.25,
            timeline: 0.20,
            scope: 0.20,
            warranty: 0.20,
            pricing: 0.15,
        }
    }

    pub fn weight(&self, category: Category) -> f64 {
        match category {
            Category::Payment => self.payment,
            Category::Timeline => self.timeline,
            Category::Scope => self.scope,
            Category::Warranty => self.warranty,
            Category::Pricing => self.pricing,
        }
    }
}
