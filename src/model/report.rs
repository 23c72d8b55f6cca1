use serde::Deserialize;

/// Structured quote report as produced by the upstream extraction step.
///
/// Every section and field is optional: extraction regularly returns partial
/// documents, and absence always means "no information", never an error.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct QuoteReport {
    pub payment: Option<PaymentSection>,
    pub timeline: Option<TimelineSection>,
    pub scope: Option<ScopeSection>,
    pub costs: Option<CostsSection>,
    #[serde(alias = "quote_overview")]
    pub summary: Option<SummarySection>,
    pub notes: Option<Vec<String>>,
    pub signals: Option<SignalsSection>,
    pub quality: Option<QualitySection>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PaymentSection {
    pub deposit_percent: Option<f64>,
    pub payment_terms_text: Option<String>,
    pub recommended_schedule_example: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TimelineSection {
    pub timeline_present: Option<bool>,
    pub timeline_clarity: Option<String>,
    pub timeline_text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScopeSection {
    pub present: Option<Vec<String>>,
    pub missing_or_unclear: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CostsSection {
    pub line_items: Option<Vec<LineItem>>,
    pub high_cost_flags: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SummarySection {
    pub total: Option<f64>,
    pub confidence: Option<String>,
}

/// One extracted cost line. Absent numeric fields stay absent: a missing
/// total and a zero total are different facts.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LineItem {
    pub name: String,
    pub qty: Option<f64>,
    pub unit_price: Option<f64>,
    pub total: Option<f64>,
}

/// Alternate input shape: counts of red flags from the AI-confidence pass.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SignalsSection {
    pub pricing_outliers: Option<u32>,
    pub missing_scope: Option<u32>,
    pub warranty_red_flags: Option<u32>,
    pub timeline_red_flags: Option<u32>,
}

/// Alternate input shape: document quality estimates in [0, 1].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct QualitySection {
    pub doc_quality: Option<f64>,
    pub line_item_clarity: Option<f64>,
}

impl QuoteReport {
    /// True when none of the extracted sections carry any data.
    pub fn is_empty(&self) -> bool {
        self.payment.is_none()
            && self.timeline.is_none()
            && self.scope.is_none()
            && self.costs.is_none()
            && self.summary.is_none()
            && self.notes.as_ref().is_none_or(|n| n.is_empty())
            && self.signals.is_none()
            && self.quality.is_none()
    }
}
