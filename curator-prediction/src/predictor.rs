//! ConvergencePredictor — strategy dispatch, uncertainty bounds, and
//! historical-pattern enhancement.

use chrono::Utc;
use tracing::debug;

use curator_core::config::PredictionConfig;
use curator_core::types::{
    ConvergencePrediction, DimensionScores, HistoricalPattern, IterationBounds,
    IterationHistoryEntry, PredictionBounds, ScoreBounds, StrategyKind,
};

use crate::features::TrajectoryFeatures;
use crate::patterns::PatternStore;
use crate::strategies::{self, StrategyResult};

/// Predicts whether and when a confidence trajectory reaches the target.
///
/// Stateless per call apart from the bounded historical pattern store.
/// `predict` is a total function: it never fails, and an empty history
/// yields a well-defined low-confidence default.
pub struct ConvergencePredictor {
    config: PredictionConfig,
    strategy: StrategyKind,
    patterns: PatternStore,
}

impl ConvergencePredictor {
    pub fn new(config: PredictionConfig) -> Self {
        let patterns = PatternStore::new(
            config.max_patterns_per_category,
            config.similarity_threshold,
        );
        Self {
            config,
            strategy: StrategyKind::Adaptive,
            patterns,
        }
    }

    /// Use a fixed strategy instead of adaptive routing.
    pub fn with_strategy(config: PredictionConfig, strategy: StrategyKind) -> Self {
        Self {
            strategy,
            ..Self::new(config)
        }
    }

    pub fn config(&self) -> &PredictionConfig {
        &self.config
    }

    /// Predict convergence for one document's trajectory.
    pub fn predict(
        &self,
        file_id: &str,
        current_confidence: f64,
        dimensions: &DimensionScores,
        history: &[IterationHistoryEntry],
    ) -> ConvergencePrediction {
        let features =
            TrajectoryFeatures::derive(current_confidence, dimensions, history, &self.config);

        let (strategy_used, base) = strategies::run(self.strategy, &features, &self.config);

        let enhanced = self.enhance_with_history(&features, base);

        debug!(
            file_id,
            strategy = %strategy_used,
            will_converge = enhanced.will_converge,
            estimated_iterations = enhanced.estimated_iterations,
            plateau_risk = features.plateau_risk,
            "convergence predicted"
        );

        let bounds = compute_bounds(&enhanced, features.current_confidence);

        ConvergencePrediction {
            will_converge: enhanced.will_converge,
            estimated_iterations: enhanced.estimated_iterations,
            confidence: enhanced.confidence.clamp(0.0, 1.0),
            predicted_final_score: enhanced.predicted_final_score,
            bounds,
            strategy_used,
            plateau_risk: features.plateau_risk,
            improvement_trend: features.trend,
        }
    }

    /// Feed the observed outcome of a past prediction back into the
    /// bounded pattern store. This is the store's only mutation path.
    pub fn record_outcome(
        &self,
        prediction: &ConvergencePrediction,
        confidence_at_prediction: f64,
        dimensions: &DimensionScores,
        iteration_count: u32,
        actual_converged: bool,
        actual_iterations: u32,
    ) {
        let variance = dimensions.variance();
        let category_key = PatternStore::category_key(
            confidence_at_prediction,
            variance,
            prediction.improvement_trend,
        );
        self.patterns.record(HistoricalPattern {
            category_key,
            confidence_at_prediction,
            dimension_variance: variance,
            iteration_count,
            strategy_used: prediction.strategy_used,
            actual_converged,
            actual_iterations: actual_iterations.min(self.config.max_iterations),
            timestamp: Utc::now(),
        });
    }

    /// Number of stored historical patterns.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Blend the base strategy result with actual outcomes of similar
    /// stored trajectories. Blend weight grows with the number of similar
    /// patterns, capped at 0.5 so observed history never fully overrides
    /// the strategy.
    fn enhance_with_history(
        &self,
        features: &TrajectoryFeatures,
        base: StrategyResult,
    ) -> StrategyResult {
        let category_key = PatternStore::category_key(
            features.current_confidence,
            features.dimension_variance,
            features.trend,
        );
        let iteration_count = features.improvements.len() as u32;
        let similar = self.patterns.similar(
            &category_key,
            features.current_confidence,
            features.dimension_variance,
            iteration_count,
        );
        if similar.is_empty() {
            return base;
        }

        let blend = (similar.len() as f64 / 10.0).min(0.5);
        let mean_iterations = similar
            .iter()
            .map(|p| p.actual_iterations as f64)
            .sum::<f64>()
            / similar.len() as f64;
        let convergence_rate = similar.iter().filter(|p| p.actual_converged).count() as f64
            / similar.len() as f64;

        let estimated = base.estimated_iterations as f64 * (1.0 - blend) + mean_iterations * blend;

        // History raises confidence when it agrees with the strategy and
        // drags it down when it contradicts.
        let agreement = if base.will_converge == (convergence_rate >= 0.5) {
            0.9
        } else {
            0.4
        };
        let confidence = base.confidence * (1.0 - blend) + agreement * blend;

        // The flag itself only flips on decisive historical evidence.
        let will_converge = if blend >= 0.3 && (convergence_rate >= 0.8 || convergence_rate <= 0.2)
        {
            convergence_rate >= 0.8
        } else {
            base.will_converge
        };

        debug!(
            similar = similar.len(),
            blend,
            convergence_rate,
            "prediction blended with historical patterns"
        );

        StrategyResult {
            will_converge,
            estimated_iterations: (estimated.round() as u32).min(self.config.max_iterations),
            confidence,
            predicted_final_score: base.predicted_final_score,
        }
    }
}

impl Default for ConvergencePredictor {
    fn default() -> Self {
        Self::new(PredictionConfig::default())
    }
}

/// Uncertainty bounds scale the point estimates by `1 ± (1 - confidence)`.
/// Iteration bounds are at least 1 apart from zero and ordered; final-score
/// bounds are clamped to `[currentConfidence, 1]`.
fn compute_bounds(result: &StrategyResult, current_confidence: f64) -> PredictionBounds {
    let uncertainty = (1.0 - result.confidence).clamp(0.0, 1.0);
    let estimate = result.estimated_iterations as f64;

    let lower = ((estimate * (1.0 - uncertainty)).round() as u32).max(1);
    let upper = ((estimate * (1.0 + uncertainty)).round() as u32).max(lower);

    let score_lower = (result.predicted_final_score * (1.0 - uncertainty))
        .clamp(current_confidence, 1.0);
    let score_upper = (result.predicted_final_score * (1.0 + uncertainty))
        .clamp(score_lower, 1.0);

    PredictionBounds {
        iterations: IterationBounds { lower, upper },
        final_score: ScoreBounds {
            lower: score_lower,
            upper: score_upper,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(overalls: &[f64]) -> Vec<IterationHistoryEntry> {
        overalls
            .iter()
            .map(|o| IterationHistoryEntry::new(*o, DimensionScores::default()))
            .collect()
    }

    #[test]
    fn empty_history_yields_defined_default() {
        let predictor = ConvergencePredictor::default();
        let p = predictor.predict("file-1", 0.5, &DimensionScores::default(), &[]);
        assert!(!p.will_converge);
        assert!((0.0..=1.0).contains(&p.confidence));
        assert!(p.bounds.iterations.lower <= p.bounds.iterations.upper);
    }

    #[test]
    fn improving_trajectory_converges() {
        let predictor =
            ConvergencePredictor::with_strategy(PredictionConfig::default(), StrategyKind::Linear);
        let p = predictor.predict(
            "file-1",
            0.6,
            &DimensionScores::new(0.6, 0.6, 0.6, 0.6),
            &history(&[0.4, 0.5]),
        );
        assert!(p.will_converge);
        assert_eq!(p.estimated_iterations, 3);
        assert_eq!(p.strategy_used, StrategyKind::Linear);
    }

    #[test]
    fn recorded_outcomes_bias_similar_predictions() {
        let predictor =
            ConvergencePredictor::with_strategy(PredictionConfig::default(), StrategyKind::Linear);
        let dims = DimensionScores::new(0.5, 0.5, 0.5, 0.5);
        let hist = history(&[0.5, 0.5]);

        let base = predictor.predict("file-1", 0.5, &dims, &hist);
        assert!(!base.will_converge);

        // Record five similar trajectories that all converged quickly.
        for _ in 0..5 {
            predictor.record_outcome(&base, 0.5, &dims, 2, true, 3);
        }
        assert_eq!(predictor.pattern_count(), 5);

        let enhanced = predictor.predict("file-2", 0.5, &dims, &hist);
        // Decisive historical convergence (rate 1.0, blend 0.5) flips the flag.
        assert!(enhanced.will_converge);
        assert!(enhanced.estimated_iterations < base.estimated_iterations);
    }

    #[test]
    fn final_score_bounds_bracket_current_confidence() {
        let predictor = ConvergencePredictor::default();
        let p = predictor.predict(
            "file-1",
            0.7,
            &DimensionScores::new(0.7, 0.7, 0.7, 0.7),
            &history(&[0.5, 0.6]),
        );
        assert!(p.bounds.final_score.lower >= 0.7);
        assert!(p.bounds.final_score.lower <= p.bounds.final_score.upper);
        assert!(p.bounds.final_score.upper <= 1.0);
    }
}
