use curator_core::config::PredictionConfig;

use super::{strategy_confidence, StrategyResult};
use crate::features::TrajectoryFeatures;

/// Logarithmic curve fit: `score(t) = a·ln(t + 1) + b` through the first
/// and last trajectory points, solved for the iteration at which the
/// target is crossed. Plateauing trajectories fit this shape well.
///
/// Needs ≥ 2 trajectory points and an upward-sloping fit; anything else
/// (including a non-finite or negative solution) yields the saturated
/// low-confidence default.
pub fn predict(features: &TrajectoryFeatures, config: &PredictionConfig) -> StrategyResult {
    let n = features.overalls.len();
    if n < 2 {
        return StrategyResult::saturated(features, config);
    }

    // High plateau risk is exactly the regime this curve models.
    let fit = if features.plateau_risk > 0.5 { 0.8 } else { 0.55 };

    if features.distance_to_target <= 0.0 {
        return StrategyResult {
            will_converge: true,
            estimated_iterations: 0,
            confidence: strategy_confidence(features, 0.9),
            predicted_final_score: features.current_confidence,
        };
    }

    let first = features.overalls[0];
    let last = features.overalls[n - 1];

    // b falls out of t = 0 (ln 1 = 0); a from the last point.
    let b = first;
    let a = (last - first) / (n as f64).ln();
    if !a.is_finite() || a <= 0.0 {
        return StrategyResult::saturated(features, config);
    }

    // Solve target = a·ln(t + 1) + b for the absolute iteration index.
    let t_target = ((config.target_confidence - b) / a).exp() - 1.0;
    if !t_target.is_finite() || t_target < 0.0 {
        return StrategyResult::saturated(features, config);
    }

    // Iterations remaining from the current position on the curve.
    let remaining = (t_target - (n - 1) as f64).ceil().max(1.0);
    let remaining = remaining.min(u32::MAX as f64) as u32;
    let will_converge = remaining <= config.max_iterations;
    let estimated = remaining.min(config.max_iterations);

    let horizon = (n - 1) as f64 + estimated as f64;
    let predicted_final_score = (a * (horizon + 1.0).ln() + b).clamp(0.0, 1.0);

    StrategyResult {
        will_converge,
        estimated_iterations: estimated,
        confidence: strategy_confidence(features, fit),
        predicted_final_score,
    }
}
