//! ConfidenceCalculator — orchestrates extraction, dimension scoring,
//! combination, logging, and convergence prediction.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info};

use curator_core::config::CuratorConfig;
use curator_core::constants::CALCULATION_LOG_CAPACITY;
use curator_core::errors::{CuratorError, CuratorResult};
use curator_core::traits::ScoringAlgorithm;
use curator_core::types::{
    AnalysisData, ConfidenceRecord, FeedbackSample, IterationHistoryEntry, PerformanceStats,
    WeightSet,
};
use curator_prediction::ConvergencePredictor;

use crate::algorithms;
use crate::dimensions;
use crate::extractor;
use crate::optimizer;
use crate::registry::ScoringRegistry;

/// Bounded log of recent processing times plus an all-time counter.
struct CalculationLog {
    recent_ms: VecDeque<f64>,
    total: u64,
}

impl CalculationLog {
    fn record(&mut self, elapsed_ms: f64) {
        if self.recent_ms.len() >= CALCULATION_LOG_CAPACITY {
            self.recent_ms.pop_front();
        }
        self.recent_ms.push_back(elapsed_ms);
        self.total += 1;
    }

    fn stats(&self) -> PerformanceStats {
        let avg = if self.recent_ms.is_empty() {
            0.0
        } else {
            self.recent_ms.iter().sum::<f64>() / self.recent_ms.len() as f64
        };
        PerformanceStats {
            total_calculations: self.total,
            avg_processing_time_ms: avg,
        }
    }
}

/// The confidence engine's front door.
///
/// `calculate` is a total function: malformed or partial analysis data is
/// resolved to neutral features, never an error. The only shared mutable
/// state is the weight set, the bounded calculation log, and the
/// predictor's pattern store; all are serialized behind their own locks,
/// so concurrent `calculate` calls for different documents are safe.
pub struct ConfidenceCalculator {
    config: CuratorConfig,
    weights: RwLock<WeightSet>,
    registry: ScoringRegistry,
    active_algorithm: RwLock<String>,
    log: Mutex<CalculationLog>,
    predictor: ConvergencePredictor,
}

impl ConfidenceCalculator {
    /// Calculator with default config, default weights, and the built-in
    /// algorithms, combining with the weighted ensemble.
    pub fn new() -> Self {
        Self::with_config(CuratorConfig::default())
    }

    pub fn with_config(config: CuratorConfig) -> Self {
        let predictor = ConvergencePredictor::new(config.prediction.clone());
        Self {
            config,
            weights: RwLock::new(WeightSet::default()),
            registry: ScoringRegistry::with_builtins(),
            active_algorithm: RwLock::new(algorithms::WEIGHTED_ENSEMBLE.to_string()),
            log: Mutex::new(CalculationLog {
                recent_ms: VecDeque::new(),
                total: 0,
            }),
            predictor,
        }
    }

    /// Score one document snapshot and predict its convergence.
    ///
    /// `history` is the caller-owned confidence trajectory for this
    /// document, oldest → newest; the calculator never persists it.
    pub fn calculate(
        &self,
        data: &AnalysisData,
        history: &[IterationHistoryEntry],
    ) -> ConfidenceRecord {
        let started = Instant::now();
        let now = Utc::now();

        let features = extractor::extract(data, now);
        let scores = dimensions::score_all(&features, &self.config.scoring);

        let weights = *self.weights.read().unwrap_or_else(PoisonError::into_inner);
        let algorithm = self
            .active_algorithm
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        // The active algorithm is validated on activation; a missing name
        // can only mean the registry was emptied out from under us, in
        // which case the plain weighted combination stands in.
        let overall = self
            .registry
            .score_with(&algorithm, &features, &weights)
            .map(curator_core::Score::new)
            .unwrap_or_else(|_| weights.combine(&scores));

        let prediction =
            self.predictor
                .predict(&data.file_id, overall.value(), &scores, history);

        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .record(elapsed_ms);

        debug!(
            file_id = %data.file_id,
            overall = %overall,
            curated = overall.is_high(),
            algorithm = %algorithm,
            will_converge = prediction.will_converge,
            "confidence calculated"
        );

        ConfidenceRecord {
            file_id: data.file_id.clone(),
            dimensions: scores,
            overall,
            weights_used: weights,
            algorithm,
            prediction,
            processing_time_ms: elapsed_ms,
            timestamp: now,
        }
    }

    /// Adapt the weight set from ground-truth feedback. One bounded
    /// gradient pass per call; the updated set is returned and becomes
    /// active for future calculations.
    pub fn optimize_weights(&self, feedback: &[FeedbackSample]) -> WeightSet {
        let mut weights = self.weights.write().unwrap_or_else(PoisonError::into_inner);
        let updated = optimizer::optimize(&weights, feedback, self.config.scoring.learning_rate);
        *weights = updated;

        info!(
            samples = feedback.len(),
            semantic = updated.semantic,
            categorical = updated.categorical,
            structural = updated.structural,
            temporal = updated.temporal,
            "weights optimized"
        );
        updated
    }

    /// Register a new scoring algorithm (probe-validated).
    pub fn register_algorithm(
        &self,
        name: &str,
        algorithm: Arc<dyn ScoringAlgorithm>,
    ) -> CuratorResult<()> {
        self.registry.register(name, algorithm)
    }

    /// Switch the active combiner. Unknown names are rejected.
    pub fn set_active_algorithm(&self, name: &str) -> CuratorResult<()> {
        if !self.registry.contains(name) {
            return Err(CuratorError::UnknownAlgorithm {
                name: name.to_string(),
            });
        }
        *self
            .active_algorithm
            .write()
            .unwrap_or_else(PoisonError::into_inner) = name.to_string();
        Ok(())
    }

    pub fn active_algorithm(&self) -> String {
        self.active_algorithm
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Snapshot of the current weight set.
    pub fn weights(&self) -> WeightSet {
        *self.weights.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the weight set, enforcing the sum-to-1 invariant.
    pub fn set_weights(&self, weights: WeightSet) -> CuratorResult<()> {
        weights.validate()?;
        *self.weights.write().unwrap_or_else(PoisonError::into_inner) = weights;
        Ok(())
    }

    pub fn performance_stats(&self) -> PerformanceStats {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .stats()
    }

    /// The predictor owning the historical pattern store, for feeding
    /// back observed convergence outcomes.
    pub fn predictor(&self) -> &ConvergencePredictor {
        &self.predictor
    }
}

impl Default for ConfidenceCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curator_core::types::DimensionScores;

    fn sample_data(file_id: &str) -> AnalysisData {
        AnalysisData {
            word_count: Some(1200),
            unique_word_count: Some(600),
            avg_sentence_length: Some(16.0),
            categories: Some(vec!["tech/ai".to_string(), "research".to_string()]),
            category_confidence: Some(0.8),
            has_title: Some(true),
            has_sections: Some(true),
            format_quality: Some(0.85),
            file_type: Some("md".to_string()),
            file_size_bytes: Some(40_960),
            ..AnalysisData::for_file(file_id)
        }
    }

    #[test]
    fn calculate_is_total_over_empty_data() {
        let calculator = ConfidenceCalculator::new();
        let record = calculator.calculate(&AnalysisData::for_file("empty"), &[]);
        assert!((0.0..=1.0).contains(&record.overall.value()));
        assert!(!record.prediction.will_converge);
    }

    #[test]
    fn calculate_is_deterministic_modulo_timing() {
        let calculator = ConfidenceCalculator::new();
        let data = sample_data("f");
        let a = calculator.calculate(&data, &[]);
        let b = calculator.calculate(&data, &[]);
        assert_eq!(a.overall, b.overall);
        assert_eq!(a.dimensions, b.dimensions);
    }

    #[test]
    fn performance_stats_track_calculations() {
        let calculator = ConfidenceCalculator::new();
        for i in 0..3 {
            calculator.calculate(&sample_data(&format!("f{i}")), &[]);
        }
        let stats = calculator.performance_stats();
        assert_eq!(stats.total_calculations, 3);
        assert!(stats.avg_processing_time_ms >= 0.0);
    }

    #[test]
    fn set_weights_enforces_invariant() {
        let calculator = ConfidenceCalculator::new();
        let bad = WeightSet {
            semantic: 0.9,
            categorical: 0.9,
            structural: 0.0,
            temporal: 0.0,
        };
        assert!(calculator.set_weights(bad).is_err());
        let good = WeightSet::normalized(1.0, 1.0, 1.0, 1.0);
        assert!(calculator.set_weights(good).is_ok());
        assert_eq!(calculator.weights(), good);
    }

    #[test]
    fn feedback_moves_the_semantic_weight() {
        let calculator = ConfidenceCalculator::new();
        let initial = calculator.weights().semantic;
        let dims = DimensionScores::new(0.7, 0.3, 0.3, 0.3);
        let feedback = vec![
            FeedbackSample {
                predicted_confidence: 0.6,
                actual_confidence: 0.8,
                dimensions: dims,
            };
            2
        ];
        let updated = calculator.optimize_weights(&feedback);
        assert_ne!(updated.semantic, initial);
        assert!(updated.validate().is_ok());
    }

    #[test]
    fn switching_to_unknown_algorithm_fails() {
        let calculator = ConfidenceCalculator::new();
        assert!(calculator.set_active_algorithm("nope").is_err());
        assert!(calculator.set_active_algorithm("forest").is_ok());
        assert_eq!(calculator.active_algorithm(), "forest");
    }
}
