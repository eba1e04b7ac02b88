//! ScoringRegistry — named, pluggable combiners validated at registration.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use curator_core::errors::{CuratorError, CuratorResult};
use curator_core::traits::ScoringAlgorithm;
use curator_core::types::{FeatureVector, WeightSet};

use crate::algorithms::{
    self, BoostingScorer, ForestScorer, NeuralScorer, WeightedEnsemble,
};

/// Registry of named scoring algorithms.
///
/// Registration probes each algorithm against representative feature
/// vectors and rejects any that returns a non-finite value or one outside
/// [0, 1] — the only failure surfaced to callers of the engine.
pub struct ScoringRegistry {
    algorithms: RwLock<HashMap<String, Arc<dyn ScoringAlgorithm>>>,
}

impl ScoringRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self {
            algorithms: RwLock::new(HashMap::new()),
        }
    }

    /// Registry preloaded with the shipped combiners: the default
    /// weighted ensemble plus the deterministic neural/forest/boosting
    /// mixers.
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        // Built-ins satisfy the contract by construction.
        registry.insert(algorithms::WEIGHTED_ENSEMBLE, Arc::new(WeightedEnsemble::new()));
        registry.insert(algorithms::NEURAL, Arc::new(NeuralScorer::new()));
        registry.insert(algorithms::FOREST, Arc::new(ForestScorer::new()));
        registry.insert(algorithms::BOOSTING, Arc::new(BoostingScorer::new()));
        registry
    }

    /// Register a new algorithm after probe validation.
    pub fn register(
        &self,
        name: &str,
        algorithm: Arc<dyn ScoringAlgorithm>,
    ) -> CuratorResult<()> {
        {
            let algorithms = self
                .algorithms
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            if algorithms.contains_key(name) {
                return Err(CuratorError::AlgorithmExists {
                    name: name.to_string(),
                });
            }
        }

        let weights = WeightSet::default();
        for probe in probe_vectors() {
            let output = algorithm.score(&probe, &weights);
            if !output.is_finite() || !(0.0..=1.0).contains(&output) {
                return Err(CuratorError::AlgorithmValidation {
                    name: name.to_string(),
                    output,
                });
            }
        }

        info!(name, "scoring algorithm registered");
        self.insert(name, algorithm);
        Ok(())
    }

    /// Whether a name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.algorithms
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    /// Run a registered algorithm. Errors only on an unknown name.
    pub fn score_with(
        &self,
        name: &str,
        features: &FeatureVector,
        weights: &WeightSet,
    ) -> CuratorResult<f64> {
        let algorithm = {
            let algorithms = self
                .algorithms
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            algorithms
                .get(name)
                .cloned()
                .ok_or_else(|| CuratorError::UnknownAlgorithm {
                    name: name.to_string(),
                })?
        };
        // Output is re-clamped here: validation probes a sample, not the
        // whole input space.
        Ok(algorithm.score(features, weights).clamp(0.0, 1.0))
    }

    /// Registered algorithm names.
    pub fn names(&self) -> Vec<String> {
        self.algorithms
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    fn insert(&self, name: &str, algorithm: Arc<dyn ScoringAlgorithm>) {
        self.algorithms
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), algorithm);
    }
}

impl Default for ScoringRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

/// Representative probe inputs: an empty record, a mid-size document, and
/// a rich fully-populated one.
fn probe_vectors() -> [FeatureVector; 3] {
    [
        FeatureVector::default(),
        FeatureVector {
            word_count: 500,
            unique_word_count: 250,
            avg_sentence_length: 14.0,
            category_confidence: 0.6,
            has_title: true,
            format_quality: 0.6,
            ..Default::default()
        },
        FeatureVector {
            word_count: 2000,
            unique_word_count: 900,
            avg_sentence_length: 18.0,
            embedding: Some(curator_core::types::EmbeddingStats {
                magnitude: 18.0,
                variance: 0.05,
            }),
            category_count: 3,
            category_confidence: 0.9,
            has_title: true,
            has_sections: true,
            has_lists: true,
            format_quality: 0.9,
            file_type: "md".to_string(),
            file_size_bytes: 40_960,
            iteration_count: 3,
            previous_confidence: 0.7,
            improvement_rate: 0.05,
            ..Default::default()
        },
    ]
}
