use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Scoring subsystem configuration: the tuning knobs for the four
/// dimension scorers and the weight optimizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Word count at which the content-richness Gaussian peaks.
    pub optimal_word_count: f64,
    /// Width of the word-count Gaussian.
    pub word_count_sigma: f64,
    /// Unique/total vocabulary ratio at which diversity peaks.
    pub optimal_vocabulary_ratio: f64,
    /// Width of the vocabulary-diversity Gaussian.
    pub vocabulary_sigma: f64,
    /// Average sentence length at which complexity peaks.
    pub optimal_sentence_length: f64,
    /// Width of the sentence-complexity Gaussian.
    pub sentence_sigma: f64,
    /// Embedding magnitudes are normalized linearly into this range.
    pub embedding_magnitude_min: f64,
    pub embedding_magnitude_max: f64,
    /// Embedding variance at which the log-normal-shaped curve peaks.
    pub optimal_embedding_variance: f64,
    /// Category confidence above this earns a keyword-relevance boost.
    pub keyword_confidence_threshold: f64,
    /// Minimum word count for the keyword-relevance boost.
    pub min_relevant_word_count: u32,
    /// Category count at which the categorical Gaussian peaks.
    pub optimal_category_count: f64,
    /// Width of the category-count Gaussian.
    pub category_count_sigma: f64,
    /// Category count above this triggers the ×0.8 penalty.
    pub max_categories: u32,
    /// Nesting depth beyond this is exponentially penalized.
    pub nesting_depth_threshold: u32,
    /// File-size sweet spot: sizes inside this band score maximum.
    pub ideal_size_min_bytes: u64,
    pub ideal_size_max_bytes: u64,
    /// Per-file-type multipliers applied to the structural score.
    pub file_type_multipliers: HashMap<String, f64>,
    /// Learning rate for weight optimization.
    pub learning_rate: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            optimal_word_count: defaults::DEFAULT_OPTIMAL_WORD_COUNT,
            word_count_sigma: defaults::DEFAULT_WORD_COUNT_SIGMA,
            optimal_vocabulary_ratio: defaults::DEFAULT_OPTIMAL_VOCABULARY_RATIO,
            vocabulary_sigma: defaults::DEFAULT_VOCABULARY_SIGMA,
            optimal_sentence_length: defaults::DEFAULT_OPTIMAL_SENTENCE_LENGTH,
            sentence_sigma: defaults::DEFAULT_SENTENCE_SIGMA,
            embedding_magnitude_min: defaults::DEFAULT_EMBEDDING_MAGNITUDE_MIN,
            embedding_magnitude_max: defaults::DEFAULT_EMBEDDING_MAGNITUDE_MAX,
            optimal_embedding_variance: defaults::DEFAULT_OPTIMAL_EMBEDDING_VARIANCE,
            keyword_confidence_threshold: defaults::DEFAULT_KEYWORD_CONFIDENCE_THRESHOLD,
            min_relevant_word_count: defaults::DEFAULT_MIN_RELEVANT_WORD_COUNT,
            optimal_category_count: defaults::DEFAULT_OPTIMAL_CATEGORY_COUNT,
            category_count_sigma: defaults::DEFAULT_CATEGORY_COUNT_SIGMA,
            max_categories: defaults::DEFAULT_MAX_CATEGORIES,
            nesting_depth_threshold: defaults::DEFAULT_NESTING_DEPTH_THRESHOLD,
            ideal_size_min_bytes: defaults::DEFAULT_IDEAL_SIZE_MIN_BYTES,
            ideal_size_max_bytes: defaults::DEFAULT_IDEAL_SIZE_MAX_BYTES,
            file_type_multipliers: defaults::default_file_type_multipliers(),
            learning_rate: defaults::DEFAULT_LEARNING_RATE,
        }
    }
}
