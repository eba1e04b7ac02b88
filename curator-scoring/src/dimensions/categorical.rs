use curator_core::config::ScoringConfig;
use curator_core::types::FeatureVector;

use crate::curve::gaussian;

// Component weights of the categorical blend.
const COUNT_WEIGHT: f64 = 0.3;
const CONFIDENCE_WEIGHT: f64 = 0.4;
const COHERENCE_WEIGHT: f64 = 0.2;
const DEPTH_WEIGHT: f64 = 0.1;

/// Penalty multipliers applied after the blend.
const NO_CATEGORY_PENALTY: f64 = 0.3;
const OVER_CATEGORIZED_PENALTY: f64 = 0.8;

/// Separators that mark hierarchical category names.
const HIERARCHY_SEPARATORS: [char; 2] = ['/', '>'];

/// Hierarchy depth considered fully developed.
const FULL_DEPTH: f64 = 3.0;

/// Categorical quality score.
///
/// Blend: category-count optimality 30%, raw category confidence 40%,
/// naming coherence 20%, hierarchy depth 10%. Post-penalties: ×0.3 with
/// zero categories, ×0.8 above the configured maximum.
/// Range: 0.0 – 1.0.
pub fn calculate(features: &FeatureVector, config: &ScoringConfig) -> f64 {
    let count_score = if features.category_count == 0 {
        0.0
    } else {
        gaussian(
            features.category_count as f64,
            config.optimal_category_count,
            config.category_count_sigma,
        )
    };

    let mut score = COUNT_WEIGHT * count_score
        + CONFIDENCE_WEIGHT * features.category_confidence
        + COHERENCE_WEIGHT * coherence_score(features)
        + DEPTH_WEIGHT * depth_ratio(features);

    if features.category_count == 0 {
        score *= NO_CATEGORY_PENALTY;
    } else if features.category_count > config.max_categories {
        score *= OVER_CATEGORIZED_PENALTY;
    }

    score.clamp(0.0, 1.0)
}

/// Naming coherence: hierarchical separators suggest a deliberate
/// taxonomy; more than 5 categories suggests scattershot tagging.
fn coherence_score(features: &FeatureVector) -> f64 {
    let mut score: f64 = 0.5;
    let hierarchical = features
        .categories
        .iter()
        .any(|c| c.contains(HIERARCHY_SEPARATORS));
    if hierarchical {
        score += 0.3;
    }
    if features.category_count > 5 {
        score -= 0.2;
    }
    score.clamp(0.0, 1.0)
}

/// Deepest hierarchy level across category names, on a 0–1 scale capped
/// at `FULL_DEPTH` levels.
fn depth_ratio(features: &FeatureVector) -> f64 {
    let max_depth = features
        .categories
        .iter()
        .map(|c| c.matches(HIERARCHY_SEPARATORS).count() + 1)
        .max()
        .unwrap_or(0);
    (max_depth as f64 / FULL_DEPTH).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_categories(categories: &[&str], confidence: f64) -> FeatureVector {
        FeatureVector {
            categories: categories.iter().map(|c| c.to_string()).collect(),
            category_count: categories.len() as u32,
            category_confidence: confidence,
            ..Default::default()
        }
    }

    #[test]
    fn zero_categories_scores_below_penalty_ceiling() {
        let config = ScoringConfig::default();
        // Even a perfect confidence cannot escape the ×0.3 penalty.
        let score = calculate(&with_categories(&[], 1.0), &config);
        assert!(score < 0.3);
    }

    #[test]
    fn optimal_count_with_high_confidence_scores_well() {
        let config = ScoringConfig::default();
        let score = calculate(
            &with_categories(&["tech/ai", "tech/ml", "research"], 0.9),
            &config,
        );
        assert!(score > 0.7);
    }

    #[test]
    fn over_categorization_is_penalized() {
        let config = ScoringConfig::default();
        let few = calculate(&with_categories(&["a", "b", "c"], 0.8), &config);
        let names: Vec<String> = (0..10).map(|i| format!("cat{i}")).collect();
        let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let many = calculate(&with_categories(&name_refs, 0.8), &config);
        assert!(many < few);
    }

    #[test]
    fn hierarchical_names_raise_coherence() {
        let config = ScoringConfig::default();
        let flat = calculate(&with_categories(&["ai", "ml"], 0.7), &config);
        let nested = calculate(&with_categories(&["tech/ai", "tech/ml"], 0.7), &config);
        assert!(nested > flat);
    }
}
