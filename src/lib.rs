//! Deterministic risk scoring for AI-extracted contractor quote reports.

pub mod input;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod trace;

pub use model::report::{LineItem, QuoteReport};
pub use model::scores::{CategoryScores, RiskLevel, ScoreResult};
pub use pipeline::{score_quote, score_quote_with_weights};
