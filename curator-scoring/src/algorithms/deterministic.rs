//! Deterministic "model-style" combiners: neural, forest, and boosting
//! shaped. None of these is a trained model — they are fixed mixers whose
//! parameters come from a sine-based pseudo-random sequence, seeded at
//! construction. They exist to exercise the registry's pluggability and
//! honor the [0, 1] output contract.

use curator_core::traits::ScoringAlgorithm;
use curator_core::types::{FeatureVector, WeightSet};

use crate::curve::linear_normalize;

/// Deterministic pseudo-random value in [0, 1) derived from a seed and an
/// index. Same (seed, index) always yields the same value.
fn pseudo(seed: f64, index: usize) -> f64 {
    let x = (seed + index as f64 * 12.9898).sin() * 43_758.547;
    x - x.floor()
}

/// Normalized numeric inputs shared by the toy combiners.
fn inputs(features: &FeatureVector, weights: &WeightSet) -> [f64; 8] {
    [
        linear_normalize(features.word_count as f64, 0.0, 3000.0),
        features.vocabulary_ratio(),
        features.category_confidence,
        features.format_quality,
        features
            .embedding
            .as_ref()
            .map(|e| linear_normalize(e.magnitude, 5.0, 25.0))
            .unwrap_or(0.5),
        (-features.days_since_modification.max(0.0) / 90.0).exp(),
        features.previous_confidence,
        weights.semantic,
    ]
}

/// Single-hidden-layer mixer with fixed sine-seeded weights.
pub struct NeuralScorer {
    seed: f64,
}

impl NeuralScorer {
    pub fn new() -> Self {
        Self { seed: 7.0 }
    }
}

impl Default for NeuralScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringAlgorithm for NeuralScorer {
    fn score(&self, features: &FeatureVector, weights: &WeightSet) -> f64 {
        let inputs = inputs(features, weights);
        const HIDDEN: usize = 4;

        let mut output = 0.0;
        for h in 0..HIDDEN {
            let mut activation = 0.0;
            for (i, input) in inputs.iter().enumerate() {
                let weight = pseudo(self.seed, h * inputs.len() + i) * 2.0 - 1.0;
                activation += weight * input;
            }
            // tanh squashing, shifted into [0, 1].
            let hidden = (activation.tanh() + 1.0) / 2.0;
            output += hidden * pseudo(self.seed + 100.0, h);
        }
        (output / HIDDEN as f64).clamp(0.0, 1.0)
    }
}

/// Averages fixed threshold rules ("trees") over the inputs.
pub struct ForestScorer {
    seed: f64,
    trees: usize,
}

impl ForestScorer {
    pub fn new() -> Self {
        Self {
            seed: 13.0,
            trees: 10,
        }
    }
}

impl Default for ForestScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringAlgorithm for ForestScorer {
    fn score(&self, features: &FeatureVector, weights: &WeightSet) -> f64 {
        let inputs = inputs(features, weights);
        let mut votes = 0.0;
        for tree in 0..self.trees {
            let feature_index = (pseudo(self.seed, tree) * inputs.len() as f64) as usize;
            let threshold = pseudo(self.seed + 1.0, tree);
            let leaf_high = 0.5 + 0.5 * pseudo(self.seed + 2.0, tree);
            let leaf_low = 0.5 * pseudo(self.seed + 3.0, tree);
            votes += if inputs[feature_index.min(inputs.len() - 1)] >= threshold {
                leaf_high
            } else {
                leaf_low
            };
        }
        (votes / self.trees as f64).clamp(0.0, 1.0)
    }
}

/// Sequential residual-style mixer: each round nudges the estimate toward
/// one input with a shrinking step.
pub struct BoostingScorer {
    seed: f64,
    rounds: usize,
}

impl BoostingScorer {
    pub fn new() -> Self {
        Self {
            seed: 29.0,
            rounds: 8,
        }
    }
}

impl Default for BoostingScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringAlgorithm for BoostingScorer {
    fn score(&self, features: &FeatureVector, weights: &WeightSet) -> f64 {
        let inputs = inputs(features, weights);
        let mut estimate = 0.5;
        let mut step = 0.3;
        for round in 0..self.rounds {
            let feature_index = (pseudo(self.seed, round) * inputs.len() as f64) as usize;
            let target = inputs[feature_index.min(inputs.len() - 1)];
            estimate += step * (target - estimate);
            step *= 0.8;
        }
        estimate.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_features() -> FeatureVector {
        FeatureVector {
            word_count: 1200,
            unique_word_count: 600,
            category_confidence: 0.8,
            format_quality: 0.7,
            previous_confidence: 0.6,
            ..Default::default()
        }
    }

    #[test]
    fn all_toy_scorers_are_bounded_and_deterministic() {
        let features = sample_features();
        let weights = WeightSet::default();
        let scorers: Vec<Box<dyn ScoringAlgorithm>> = vec![
            Box::new(NeuralScorer::new()),
            Box::new(ForestScorer::new()),
            Box::new(BoostingScorer::new()),
        ];
        for scorer in &scorers {
            let a = scorer.score(&features, &weights);
            let b = scorer.score(&features, &weights);
            assert_eq!(a, b);
            assert!((0.0..=1.0).contains(&a));
        }
    }

    #[test]
    fn pseudo_sequence_is_stable_and_bounded() {
        for i in 0..100 {
            let v = pseudo(7.0, i);
            assert!((0.0..1.0).contains(&v));
            assert_eq!(v, pseudo(7.0, i));
        }
    }
}
