use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::score::Score;
use crate::types::dimensions::DimensionScores;

/// One entry of the caller-owned confidence trajectory, oldest → newest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IterationHistoryEntry {
    /// Overall confidence at this iteration.
    pub overall: Score,
    /// Per-dimension scores at this iteration.
    pub dimensions: DimensionScores,
    pub timestamp: DateTime<Utc>,
}

impl IterationHistoryEntry {
    pub fn new(overall: f64, dimensions: DimensionScores) -> Self {
        Self {
            overall: Score::new(overall),
            dimensions,
            timestamp: Utc::now(),
        }
    }
}

/// Direction of the improvement trajectory across iterations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImprovementTrend {
    /// More than 60% of consecutive improvement deltas are increasing.
    Accelerating,
    /// More than 60% of consecutive improvement deltas are decreasing.
    Decelerating,
    Stable,
}

impl fmt::Display for ImprovementTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ImprovementTrend::Accelerating => "accelerating",
            ImprovementTrend::Decelerating => "decelerating",
            ImprovementTrend::Stable => "stable",
        };
        f.write_str(s)
    }
}

/// Convergence-forecasting strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Linear,
    Exponential,
    Logarithmic,
    /// Routes to one of the others based on trajectory shape.
    Adaptive,
    /// Confidence-weighted combination of linear/exponential/logarithmic.
    Ensemble,
}

impl StrategyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Linear => "linear",
            StrategyKind::Exponential => "exponential",
            StrategyKind::Logarithmic => "logarithmic",
            StrategyKind::Adaptive => "adaptive",
            StrategyKind::Ensemble => "ensemble",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uncertainty interval on the predicted iteration count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IterationBounds {
    pub lower: u32,
    pub upper: u32,
}

/// Uncertainty interval on the predicted final score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBounds {
    pub lower: f64,
    pub upper: f64,
}

/// Uncertainty intervals derived from a strategy's self-reported confidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionBounds {
    pub iterations: IterationBounds,
    pub final_score: ScoreBounds,
}

/// Forecast of whether and when iterative refinement reaches the target
/// confidence. Created fresh per call, returned by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvergencePrediction {
    /// Whether the trajectory is expected to reach the target within the
    /// iteration cap.
    pub will_converge: bool,
    /// Estimated iterations to reach the target (saturated at the cap).
    pub estimated_iterations: u32,
    /// Confidence in this prediction, in [0, 1].
    pub confidence: f64,
    /// Expected confidence score once refinement settles.
    pub predicted_final_score: f64,
    pub bounds: PredictionBounds,
    /// The strategy that produced the estimate (adaptive reports its
    /// routed target).
    pub strategy_used: StrategyKind,
    /// Fraction of iterations whose improvement fell below the plateau
    /// threshold.
    pub plateau_risk: f64,
    pub improvement_trend: ImprovementTrend,
}
