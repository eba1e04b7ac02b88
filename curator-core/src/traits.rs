//! Trait seams between the engine and its pluggable parts.

use crate::types::dimensions::WeightSet;
use crate::types::feature_vector::FeatureVector;

/// A named combiner turning a feature vector and weight set into one
/// overall confidence score.
///
/// Contract: deterministic for identical inputs, output finite and in
/// [0, 1]. The registry probes new algorithms against this contract at
/// registration time and rejects violators.
pub trait ScoringAlgorithm: Send + Sync {
    fn score(&self, features: &FeatureVector, weights: &WeightSet) -> f64;
}

/// Function pointers and closures are accepted wherever an algorithm is.
impl<F> ScoringAlgorithm for F
where
    F: Fn(&FeatureVector, &WeightSet) -> f64 + Send + Sync,
{
    fn score(&self, features: &FeatureVector, weights: &WeightSet) -> f64 {
        self(features, weights)
    }
}
