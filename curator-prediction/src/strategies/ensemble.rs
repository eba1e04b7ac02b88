use curator_core::config::PredictionConfig;

use super::{exponential, linear, logarithmic, StrategyResult};
use crate::features::TrajectoryFeatures;

/// Ensemble of linear, exponential, and logarithmic: each member's
/// estimate is weighted by its own self-reported confidence (normalized
/// across the three), and convergence is decided by strict majority vote
/// (a tie resolves to false).
pub fn predict(features: &TrajectoryFeatures, config: &PredictionConfig) -> StrategyResult {
    let members = [
        linear::predict(features, config),
        // Exponential falls back to linear when it cannot fit.
        exponential::predict(features, config)
            .unwrap_or_else(|| linear::predict(features, config)),
        logarithmic::predict(features, config),
    ];

    let votes = members.iter().filter(|m| m.will_converge).count();
    let will_converge = votes * 2 > members.len();

    // Confidences are floored at 0.2, so the total is never zero.
    let total_confidence: f64 = members.iter().map(|m| m.confidence).sum();

    let mut estimated = 0.0;
    let mut confidence = 0.0;
    let mut final_score = 0.0;
    for member in &members {
        let weight = member.confidence / total_confidence;
        estimated += weight * member.estimated_iterations as f64;
        confidence += weight * member.confidence;
        final_score += weight * member.predicted_final_score;
    }

    StrategyResult {
        will_converge,
        estimated_iterations: (estimated.round() as u32).min(config.max_iterations),
        confidence,
        predicted_final_score: final_score.clamp(0.0, 1.0),
    }
}
