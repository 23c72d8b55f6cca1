pub mod report;
pub mod scores;
pub mod weights;
