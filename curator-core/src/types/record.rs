use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::score::Score;
use crate::types::dimensions::{DimensionScores, WeightSet};
use crate::types::prediction::ConvergencePrediction;

/// Result of one confidence calculation. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceRecord {
    /// Identifier of the scored document.
    pub file_id: String,
    /// The four per-dimension scores.
    pub dimensions: DimensionScores,
    /// Combined overall confidence, in [0, 1].
    pub overall: Score,
    /// Snapshot of the weight set used for this calculation.
    pub weights_used: WeightSet,
    /// Name of the scoring algorithm that combined the scores.
    pub algorithm: String,
    /// Convergence forecast for the document's refinement trajectory.
    pub prediction: ConvergencePrediction,
    /// Wall-clock duration of the calculation, in milliseconds.
    pub processing_time_ms: f64,
    pub timestamp: DateTime<Utc>,
}

/// Aggregate statistics over the calculator's bounded calculation log.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PerformanceStats {
    /// Total calculations since the calculator was created.
    pub total_calculations: u64,
    /// Mean processing time over the retained log window, in milliseconds.
    pub avg_processing_time_ms: f64,
}
