use curator_core::config::ScoringConfig;
use curator_core::types::FeatureVector;
use curator_core::Score;

use crate::curve::{gaussian, linear_normalize, log_normal_peak};

// Component weights of the semantic blend.
const EMBEDDING_WEIGHT: f64 = 0.4;
const RICHNESS_WEIGHT: f64 = 0.3;
const KEYWORD_WEIGHT: f64 = 0.2;
const COHERENCE_WEIGHT: f64 = 0.1;

/// Word count / format quality levels that earn the multiplicative boost.
const BOOST_WORD_COUNT: u32 = 500;
const BOOST_FORMAT_QUALITY: f64 = 0.8;

/// Semantic quality score.
///
/// Blend: embedding analysis 40%, content richness 30%, keyword relevance
/// 20%, coherence 10%. A ≤ +10% boost applies when both word count and
/// format quality are high; category confidence above the high-confidence
/// threshold adds ≤ +5%. Range: 0.0 – 1.0.
pub fn calculate(features: &FeatureVector, config: &ScoringConfig) -> f64 {
    let embedding = embedding_score(features, config);
    let richness = richness_score(features, config);
    let keyword = keyword_relevance(features, config);
    let coherence = coherence_score(features);

    let mut score = EMBEDDING_WEIGHT * embedding
        + RICHNESS_WEIGHT * richness
        + KEYWORD_WEIGHT * keyword
        + COHERENCE_WEIGHT * coherence;

    if features.word_count >= BOOST_WORD_COUNT && features.format_quality >= BOOST_FORMAT_QUALITY {
        score *= 1.10;
    }
    if features.category_confidence > Score::HIGH {
        score *= 1.05;
    }

    score.clamp(0.0, 1.0)
}

/// Magnitude normalized linearly into the configured range (60%),
/// variance scored by a log-normal bump peaking at the optimal variance
/// (40%). Absent embeddings score neutral.
fn embedding_score(features: &FeatureVector, config: &ScoringConfig) -> f64 {
    match &features.embedding {
        Some(stats) => {
            let magnitude = linear_normalize(
                stats.magnitude,
                config.embedding_magnitude_min,
                config.embedding_magnitude_max,
            );
            let variance = log_normal_peak(stats.variance, config.optimal_embedding_variance);
            0.6 * magnitude + 0.4 * variance
        }
        None => 0.5,
    }
}

/// Mean of three Gaussians: word count, vocabulary diversity, sentence
/// complexity.
fn richness_score(features: &FeatureVector, config: &ScoringConfig) -> f64 {
    let length = gaussian(
        features.word_count as f64,
        config.optimal_word_count,
        config.word_count_sigma,
    );
    let diversity = gaussian(
        features.vocabulary_ratio(),
        config.optimal_vocabulary_ratio,
        config.vocabulary_sigma,
    );
    let complexity = gaussian(
        features.avg_sentence_length,
        config.optimal_sentence_length,
        config.sentence_sigma,
    );
    (length + diversity + complexity) / 3.0
}

/// Heuristic boosts over a low base: confident categorization, title and
/// sections present, minimum word count met.
fn keyword_relevance(features: &FeatureVector, config: &ScoringConfig) -> f64 {
    let mut score: f64 = 0.3;
    if features.category_confidence > config.keyword_confidence_threshold {
        score += 0.25;
    }
    if features.has_title {
        score += 0.2;
    }
    if features.has_sections {
        score += 0.15;
    }
    if features.word_count >= config.min_relevant_word_count {
        score += 0.1;
    }
    score.min(1.0)
}

/// Structure-derived coherence proxy.
fn coherence_score(features: &FeatureVector) -> f64 {
    let mut score = 0.5 * features.format_quality;
    if features.has_sections {
        score += 0.2;
    }
    if features.has_title {
        score += 0.15;
    }
    if features.has_lists {
        score += 0.15;
    }
    score.min(1.0)
}
