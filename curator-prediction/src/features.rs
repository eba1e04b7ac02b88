use curator_core::config::PredictionConfig;
use curator_core::types::{DimensionScores, ImprovementTrend, IterationHistoryEntry};

/// Numeric features derived from a confidence trajectory, shared by all
/// strategies.
#[derive(Debug, Clone)]
pub struct TrajectoryFeatures {
    /// Overall confidence at each recorded iteration plus the current one,
    /// oldest → newest.
    pub overalls: Vec<f64>,
    /// First differences of `overalls`.
    pub improvements: Vec<f64>,
    /// Mean improvement per iteration (0 when there are no improvements).
    pub avg_improvement: f64,
    pub trend: ImprovementTrend,
    /// Improvements whose magnitude fell below the plateau threshold.
    pub plateau_count: usize,
    /// `plateau_count / max(1, improvements.len())`.
    pub plateau_risk: f64,
    /// Variance of the current dimension scores.
    pub dimension_variance: f64,
    pub current_confidence: f64,
    /// Gap between the target and the current confidence (≥ 0).
    pub distance_to_target: f64,
}

impl TrajectoryFeatures {
    /// Derive trajectory features from the caller-supplied history and the
    /// current calculation. Total: an empty history yields zeroed
    /// improvements and a stable trend.
    pub fn derive(
        current_confidence: f64,
        dimensions: &DimensionScores,
        history: &[IterationHistoryEntry],
        config: &PredictionConfig,
    ) -> Self {
        let mut overalls: Vec<f64> = history.iter().map(|e| e.overall.value()).collect();
        overalls.push(current_confidence.clamp(0.0, 1.0));

        let improvements: Vec<f64> = overalls.windows(2).map(|w| w[1] - w[0]).collect();
        let avg_improvement = if improvements.is_empty() {
            0.0
        } else {
            improvements.iter().sum::<f64>() / improvements.len() as f64
        };

        let trend = classify_trend(&improvements);

        let plateau_count = improvements
            .iter()
            .filter(|imp| imp.abs() < config.min_improvement)
            .count();
        let plateau_risk = plateau_count as f64 / improvements.len().max(1) as f64;

        let current = current_confidence.clamp(0.0, 1.0);
        Self {
            overalls,
            improvements,
            avg_improvement,
            trend,
            plateau_count,
            plateau_risk,
            dimension_variance: dimensions.variance(),
            current_confidence: current,
            distance_to_target: (config.target_confidence - current).max(0.0),
        }
    }
}

/// Classify the improvement trend from consecutive improvement deltas:
/// more than 60% rising ⇒ accelerating, more than 60% falling ⇒
/// decelerating, anything else ⇒ stable.
fn classify_trend(improvements: &[f64]) -> ImprovementTrend {
    if improvements.len() < 2 {
        return ImprovementTrend::Stable;
    }
    let deltas: Vec<f64> = improvements.windows(2).map(|w| w[1] - w[0]).collect();
    let rising = deltas.iter().filter(|d| **d > 0.0).count() as f64;
    let falling = deltas.iter().filter(|d| **d < 0.0).count() as f64;
    let total = deltas.len() as f64;

    if rising / total > 0.6 {
        ImprovementTrend::Accelerating
    } else if falling / total > 0.6 {
        ImprovementTrend::Decelerating
    } else {
        ImprovementTrend::Stable
    }
}
