use curator_core::config::PredictionConfig;
use curator_core::types::ImprovementTrend;

use super::{strategy_confidence, StrategyResult};
use crate::features::TrajectoryFeatures;

/// Linear extrapolation: assumes the average per-iteration improvement
/// holds. `iterations = ceil(distance / avgImprovement)`.
///
/// A non-positive average improvement cannot converge; the estimate
/// saturates at the iteration cap instead of leaking NaN or infinity.
pub fn predict(features: &TrajectoryFeatures, config: &PredictionConfig) -> StrategyResult {
    let fit = match features.trend {
        ImprovementTrend::Accelerating => 0.8,
        ImprovementTrend::Stable => 0.6,
        ImprovementTrend::Decelerating => 0.4,
    };

    if features.distance_to_target <= 0.0 {
        // Already at or above target.
        return StrategyResult {
            will_converge: true,
            estimated_iterations: 0,
            confidence: strategy_confidence(features, 0.9),
            predicted_final_score: features.current_confidence,
        };
    }

    if features.avg_improvement <= 0.0 {
        return StrategyResult {
            will_converge: false,
            estimated_iterations: config.max_iterations,
            confidence: strategy_confidence(features, 0.3),
            predicted_final_score: features.current_confidence,
        };
    }

    let needed = (features.distance_to_target / features.avg_improvement).ceil();
    // avg_improvement > 0 and distance > 0, so `needed` is finite and ≥ 1.
    let needed = needed.min(u32::MAX as f64) as u32;
    let will_converge = needed <= config.max_iterations;

    let predicted_final_score = if will_converge {
        config.target_confidence
    } else {
        (features.current_confidence
            + features.avg_improvement * config.max_iterations as f64)
            .min(1.0)
    };

    StrategyResult {
        will_converge,
        estimated_iterations: needed.min(config.max_iterations),
        confidence: strategy_confidence(features, fit),
        predicted_final_score,
    }
}
