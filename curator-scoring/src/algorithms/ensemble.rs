use std::collections::HashMap;

use curator_core::traits::ScoringAlgorithm;
use curator_core::types::{Dimension, FeatureVector, WeightSet};

use crate::curve::{gaussian, linear_normalize};

/// The five sub-scores combined by the ensemble. These are derived
/// directly from the feature vector and are distinct from the four
/// dimension scorers.
const SUB_SCORES: [&str; 5] = ["content", "semantic", "structure", "temporal", "iteration"];

/// Default weighted-ensemble combiner.
///
/// Combines five feature-derived sub-scores using a weight table,
/// normalized by the sum of the weights actually present. Table entries
/// aligned with a scoring dimension are modulated by the active
/// [`WeightSet`] (relative to a uniform 0.25), so weight optimization
/// feeds through to the combined score.
///
/// A zero total weight falls back to an equal-weight average — the
/// combiner never divides by zero.
pub struct WeightedEnsemble {
    table: HashMap<String, f64>,
}

impl WeightedEnsemble {
    pub fn new() -> Self {
        let mut table = HashMap::new();
        table.insert("content".to_string(), 0.25);
        table.insert("semantic".to_string(), 0.30);
        table.insert("structure".to_string(), 0.20);
        table.insert("temporal".to_string(), 0.10);
        table.insert("iteration".to_string(), 0.15);
        Self { table }
    }

    /// Use a custom sub-score weight table. Unknown names are ignored at
    /// scoring time; missing entries simply don't participate.
    pub fn with_table(table: HashMap<String, f64>) -> Self {
        Self { table }
    }

    fn sub_score(name: &str, features: &FeatureVector) -> f64 {
        match name {
            "content" => content_score(features),
            "semantic" => semantic_score(features),
            "structure" => structure_score(features),
            "temporal" => temporal_score(features),
            "iteration" => iteration_score(features),
            _ => 0.5,
        }
    }

    /// Dimension whose weight modulates a sub-score's table entry.
    fn aligned_dimension(name: &str) -> Option<Dimension> {
        match name {
            "semantic" => Some(Dimension::Semantic),
            "content" => Some(Dimension::Categorical),
            "structure" => Some(Dimension::Structural),
            "temporal" => Some(Dimension::Temporal),
            _ => None,
        }
    }
}

impl Default for WeightedEnsemble {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringAlgorithm for WeightedEnsemble {
    fn score(&self, features: &FeatureVector, weights: &WeightSet) -> f64 {
        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;
        let mut plain_sum = 0.0;
        let mut present = 0usize;

        for name in SUB_SCORES {
            let Some(base_weight) = self.table.get(name).copied() else {
                continue;
            };
            let modulation = Self::aligned_dimension(name)
                .map(|d| weights.get(d) / 0.25)
                .unwrap_or(1.0);
            let weight = (base_weight * modulation).max(0.0);
            let score = Self::sub_score(name, features);

            weighted_sum += weight * score;
            total_weight += weight;
            plain_sum += score;
            present += 1;
        }

        if present == 0 {
            return 0.5;
        }
        // Zero-total-weight guard: equal-weight average of present scores.
        if total_weight <= f64::EPSILON {
            return (plain_sum / present as f64).clamp(0.0, 1.0);
        }
        (weighted_sum / total_weight).clamp(0.0, 1.0)
    }
}

/// Content sub-score: word volume and vocabulary balance.
fn content_score(features: &FeatureVector) -> f64 {
    let volume = linear_normalize(features.word_count as f64, 0.0, 2000.0);
    let diversity = gaussian(features.vocabulary_ratio(), 0.5, 0.25);
    0.6 * volume + 0.4 * diversity
}

/// Semantic sub-score: embedding magnitude when available, category
/// confidence otherwise.
fn semantic_score(features: &FeatureVector) -> f64 {
    match &features.embedding {
        Some(stats) => linear_normalize(stats.magnitude, 5.0, 25.0),
        None => features.category_confidence,
    }
}

/// Structure sub-score: indicator density blended with format quality.
fn structure_score(features: &FeatureVector) -> f64 {
    let indicators = [
        features.has_title,
        features.has_sections,
        features.has_lists,
        features.has_code,
    ];
    let density = indicators.iter().filter(|i| **i).count() as f64 / indicators.len() as f64;
    0.5 * density + 0.5 * features.format_quality
}

/// Temporal sub-score: simple recency decay on the modification delta.
fn temporal_score(features: &FeatureVector) -> f64 {
    (-features.days_since_modification.max(0.0) / 180.0).exp()
}

/// Iteration sub-score: previous confidence nudged by the improvement
/// momentum over the iterations seen so far.
fn iteration_score(features: &FeatureVector) -> f64 {
    let momentum = features.improvement_rate * features.iteration_count.min(5) as f64;
    (features.previous_confidence + momentum).clamp(0.0, 1.0)
}
