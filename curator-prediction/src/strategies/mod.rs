//! Convergence strategies and adaptive routing.
//!
//! Each strategy is a pure function over [`TrajectoryFeatures`] producing
//! a [`StrategyResult`]. Adaptive routes to one of the others based on
//! trajectory shape; ensemble blends linear/exponential/logarithmic by
//! their self-reported confidences.

pub mod ensemble;
pub mod exponential;
pub mod linear;
pub mod logarithmic;

use curator_core::config::PredictionConfig;
use curator_core::constants::{STRATEGY_CONFIDENCE_CEILING, STRATEGY_CONFIDENCE_FLOOR};
use curator_core::types::{ImprovementTrend, StrategyKind};

use crate::features::TrajectoryFeatures;

/// Outcome of a single strategy run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyResult {
    /// Whether the target is expected to be reached within the cap.
    pub will_converge: bool,
    /// Estimated iterations to target, saturated at the cap.
    pub estimated_iterations: u32,
    /// Self-reported confidence, in [0.2, 0.95].
    pub confidence: f64,
    /// Expected confidence score once refinement settles.
    pub predicted_final_score: f64,
}

impl StrategyResult {
    /// Non-converging result saturated at the iteration cap. The default
    /// when a strategy has nothing to extrapolate from.
    pub fn saturated(features: &TrajectoryFeatures, config: &PredictionConfig) -> Self {
        Self {
            will_converge: false,
            estimated_iterations: config.max_iterations,
            confidence: STRATEGY_CONFIDENCE_FLOOR,
            predicted_final_score: features.current_confidence,
        }
    }
}

/// Run a strategy, resolving adaptive routing and exponential's linear
/// fallback. Returns the strategy that actually produced the result.
pub fn run(
    kind: StrategyKind,
    features: &TrajectoryFeatures,
    config: &PredictionConfig,
) -> (StrategyKind, StrategyResult) {
    match kind {
        StrategyKind::Linear => (StrategyKind::Linear, linear::predict(features, config)),
        StrategyKind::Exponential => match exponential::predict(features, config) {
            Some(result) => (StrategyKind::Exponential, result),
            // Exponential needs ≥2 improvements and a negative decay rate.
            None => (StrategyKind::Linear, linear::predict(features, config)),
        },
        StrategyKind::Logarithmic => (
            StrategyKind::Logarithmic,
            logarithmic::predict(features, config),
        ),
        StrategyKind::Ensemble => (StrategyKind::Ensemble, ensemble::predict(features, config)),
        StrategyKind::Adaptive => {
            let routed = if features.plateau_risk > 0.5 {
                StrategyKind::Logarithmic
            } else if features.trend == ImprovementTrend::Accelerating {
                StrategyKind::Linear
            } else if features.trend == ImprovementTrend::Decelerating {
                StrategyKind::Exponential
            } else {
                StrategyKind::Ensemble
            };
            run(routed, features, config)
        }
    }
}

/// Self-reported strategy confidence: grows with history length, shrinks
/// with dimension disagreement, and carries a per-strategy trend-fit term.
/// Clamped to [0.2, 0.95].
pub(crate) fn strategy_confidence(features: &TrajectoryFeatures, fit: f64) -> f64 {
    let history_term = (features.overalls.len() as f64 / 10.0).min(1.0);
    // Variance of scores bounded in [0,1] cannot exceed 0.25.
    let agreement_term = 1.0 - (features.dimension_variance / 0.25).min(1.0);
    let raw = 0.3 * history_term + 0.3 * agreement_term + 0.4 * fit;
    raw.clamp(STRATEGY_CONFIDENCE_FLOOR, STRATEGY_CONFIDENCE_CEILING)
}
