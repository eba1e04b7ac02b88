use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::prediction::StrategyKind;

/// Observed outcome of a past prediction, stored in the predictor's
/// bounded per-category window and used to bias future predictions
/// toward what actually happened for similar trajectories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalPattern {
    /// Coarse bucket key: (confidence band, variance band, trend).
    pub category_key: String,
    /// Overall confidence at the time the prediction was made.
    pub confidence_at_prediction: f64,
    /// Dimension variance at the time the prediction was made.
    pub dimension_variance: f64,
    /// Length of the trajectory when the prediction was made.
    pub iteration_count: u32,
    /// Strategy that produced the original prediction.
    pub strategy_used: StrategyKind,
    /// Whether the document actually reached the target.
    pub actual_converged: bool,
    /// Iterations it actually took (or the cap, if it never converged).
    pub actual_iterations: u32,
    pub timestamp: DateTime<Utc>,
}
