use serde::{Deserialize, Serialize};

use crate::types::dimensions::DimensionScores;

/// One (predicted, actual) ground-truth pair used to adapt the weight set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackSample {
    /// Confidence the engine predicted for the document.
    pub predicted_confidence: f64,
    /// Confidence later established by ground truth.
    pub actual_confidence: f64,
    /// Dimension scores at prediction time.
    pub dimensions: DimensionScores,
}
