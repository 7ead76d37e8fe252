use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::condition::Condition;

/// One scored condition in a match result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MatchedCondition {
    pub condition: Condition,
    /// Normalized score, 0–100 inclusive.
    pub match_percentage: u8,
    pub matched_symptoms: Vec<String>,
    pub not_matched_symptoms: Vec<String>,
    /// Raw weighted score. Unbounded; only used for ranking.
    pub score: f64,
}
