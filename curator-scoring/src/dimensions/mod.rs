//! The four dimension scorers. Each is a pure `calculate(features, cfg)`
//! returning a value in [0.0, 1.0].

pub mod categorical;
pub mod semantic;
pub mod structural;
pub mod temporal;

use curator_core::config::ScoringConfig;
use curator_core::types::{DimensionScores, FeatureVector};

/// Score all four dimensions for one feature vector.
pub fn score_all(features: &FeatureVector, config: &ScoringConfig) -> DimensionScores {
    DimensionScores::new(
        semantic::calculate(features, config),
        categorical::calculate(features, config),
        structural::calculate(features, config),
        temporal::calculate(features, config),
    )
}
