use serde::{Deserialize, Serialize};

use super::defaults;

/// Convergence-prediction subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Confidence the refinement loop is aiming for.
    pub target_confidence: f64,
    /// Hard cap on predicted and simulated iterations.
    pub max_iterations: u32,
    /// Improvement below this counts as a plateau.
    pub min_improvement: f64,
    /// Forward simulation declares convergence at target × this fraction.
    pub convergence_threshold: f64,
    /// Historical patterns retained per category key (FIFO eviction).
    pub max_patterns_per_category: usize,
    /// Similarity above which a stored pattern counts as a match.
    pub similarity_threshold: f64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            target_confidence: defaults::DEFAULT_TARGET_CONFIDENCE,
            max_iterations: defaults::DEFAULT_MAX_ITERATIONS,
            min_improvement: defaults::DEFAULT_MIN_IMPROVEMENT,
            convergence_threshold: defaults::DEFAULT_CONVERGENCE_THRESHOLD,
            max_patterns_per_category: defaults::DEFAULT_MAX_PATTERNS_PER_CATEGORY,
            similarity_threshold: defaults::DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}
