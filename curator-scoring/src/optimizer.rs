//! WeightOptimizer — bounded gradient-style adaptation of the dimension
//! weight set from (predicted, actual) feedback pairs.

use curator_core::types::{Dimension, FeedbackSample, WeightSet};

/// One optimization pass over a feedback batch.
///
/// Per-dimension gradient: `mean(error × dimensionScore)` where
/// `error = actual - predicted`. Weights move by `learningRate × gradient`,
/// are clamped non-negative, and renormalized to sum 1.0.
///
/// Idempotent-safe: once predictions match ground truth the gradient is
/// zero, so repeated calls with the same feedback converge rather than
/// diverge. Empty feedback is a no-op.
pub fn optimize(current: &WeightSet, feedback: &[FeedbackSample], learning_rate: f64) -> WeightSet {
    if feedback.is_empty() {
        return *current;
    }

    let batch_size = feedback.len() as f64;
    let mut updated = [0.0f64; 4];

    for (slot, dimension) in updated.iter_mut().zip(Dimension::ALL) {
        let gradient: f64 = feedback
            .iter()
            .map(|sample| {
                let error = sample.actual_confidence - sample.predicted_confidence;
                error * sample.dimensions.get(dimension).value()
            })
            .sum::<f64>()
            / batch_size;

        *slot = current.get(dimension) + learning_rate * gradient;
    }

    // Clamping and renormalization restore the weight-set invariant.
    WeightSet::normalized(updated[0], updated[1], updated[2], updated[3])
}
