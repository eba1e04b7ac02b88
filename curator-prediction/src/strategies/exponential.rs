use curator_core::config::PredictionConfig;
use curator_core::types::ImprovementTrend;

use super::{strategy_confidence, StrategyResult};
use crate::features::TrajectoryFeatures;

/// Increment below this ends the forward simulation early.
const NEGLIGIBLE_INCREMENT: f64 = 1e-4;

/// Exponential-decay extrapolation: fits a decay rate to the observed
/// improvements and forward-simulates geometrically shrinking increments.
///
/// Requires at least 2 positive improvements and a negative fitted decay
/// rate; returns `None` otherwise so the caller can fall back to linear.
pub fn predict(
    features: &TrajectoryFeatures,
    config: &PredictionConfig,
) -> Option<StrategyResult> {
    if features.improvements.len() < 2 {
        return None;
    }
    let first = *features.improvements.first()?;
    let last = *features.improvements.last()?;
    // ln is only defined over positive improvements.
    if first <= 0.0 || last <= 0.0 {
        return None;
    }

    let decay_rate = (last / first).ln() / (features.improvements.len() - 1) as f64;
    if !decay_rate.is_finite() || decay_rate >= 0.0 {
        return None;
    }

    let fit = match features.trend {
        ImprovementTrend::Decelerating => 0.85,
        ImprovementTrend::Stable => 0.55,
        ImprovementTrend::Accelerating => 0.4,
    };

    let convergence_point = config.target_confidence * config.convergence_threshold;
    let mut score = features.current_confidence;

    // Hard-capped forward summation: each step's increment decays from the
    // last observed improvement.
    for step in 1..=config.max_iterations {
        let increment = last * (decay_rate * step as f64).exp();
        score += increment;
        if score >= convergence_point {
            return Some(StrategyResult {
                will_converge: true,
                estimated_iterations: step,
                confidence: strategy_confidence(features, fit),
                predicted_final_score: score.min(1.0),
            });
        }
        if increment < NEGLIGIBLE_INCREMENT {
            break;
        }
    }

    Some(StrategyResult {
        will_converge: false,
        estimated_iterations: config.max_iterations,
        confidence: strategy_confidence(features, fit * 0.75),
        predicted_final_score: score.min(1.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use curator_core::types::{DimensionScores, IterationHistoryEntry};

    fn features(overalls: &[f64], current: f64) -> TrajectoryFeatures {
        let history: Vec<IterationHistoryEntry> = overalls
            .iter()
            .map(|o| IterationHistoryEntry::new(*o, DimensionScores::default()))
            .collect();
        TrajectoryFeatures::derive(
            current,
            &DimensionScores::default(),
            &history,
            &PredictionConfig::default(),
        )
    }

    #[test]
    fn too_little_history_declines() {
        assert!(predict(&features(&[0.5], 0.6), &PredictionConfig::default()).is_none());
    }

    #[test]
    fn growing_improvements_decline() {
        // improvements = [0.05, 0.1] → positive decay rate.
        let result = predict(&features(&[0.4, 0.45], 0.55), &PredictionConfig::default());
        assert!(result.is_none());
    }

    #[test]
    fn decaying_improvements_converge_near_target() {
        // improvements = [0.2, 0.1, 0.05] decaying toward the 0.85 target.
        let result =
            predict(&features(&[0.43, 0.63, 0.73], 0.78), &PredictionConfig::default()).unwrap();
        assert!(result.will_converge);
        assert!(result.estimated_iterations >= 1);
        assert!(result.predicted_final_score <= 1.0);
    }

    #[test]
    fn fast_decay_stalls_below_target() {
        // improvements = [0.1, 0.001]: decay so sharp the remaining gain is tiny.
        let config = PredictionConfig::default();
        let result = predict(&features(&[0.3, 0.4], 0.401), &config).unwrap();
        assert!(!result.will_converge);
        assert_eq!(result.estimated_iterations, config.max_iterations);
        assert!(result.predicted_final_score < config.target_confidence);
    }
}
