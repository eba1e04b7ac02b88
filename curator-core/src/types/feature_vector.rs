use serde::{Deserialize, Serialize};

/// Summary statistics over a content embedding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingStats {
    /// L2 norm of the embedding vector.
    pub magnitude: f64,
    /// Population variance of the embedding components.
    pub variance: f64,
}

/// Flat numeric/boolean feature record consumed by the dimension scorers
/// and scoring algorithms.
///
/// Missing source data is resolved to neutral values at construction time
/// (0, 0.5, or false) — the scorers never see nulls and never branch on
/// absence, except for the embedding which is genuinely optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    // Content statistics.
    pub word_count: u32,
    pub unique_word_count: u32,
    pub avg_sentence_length: f64,

    /// Embedding statistics, absent when no embedding was supplied.
    pub embedding: Option<EmbeddingStats>,

    // Category information.
    pub category_count: u32,
    pub category_confidence: f64,
    pub categories: Vec<String>,

    // Structural flags.
    pub has_title: bool,
    pub has_sections: bool,
    pub has_lists: bool,
    pub has_code: bool,
    pub format_quality: f64,
    pub file_type: String,
    pub nesting_depth: u32,
    pub file_size_bytes: u64,

    // Temporal deltas (fractional days; 0 when timestamps are missing).
    pub days_since_creation: f64,
    pub days_since_modification: f64,

    // Iteration context.
    pub iteration_count: u32,
    pub previous_confidence: f64,
    pub improvement_rate: f64,
}

impl FeatureVector {
    /// Unique-to-total vocabulary ratio, 0 when there are no words.
    pub fn vocabulary_ratio(&self) -> f64 {
        if self.word_count == 0 {
            0.0
        } else {
            self.unique_word_count as f64 / self.word_count as f64
        }
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self {
            word_count: 0,
            unique_word_count: 0,
            avg_sentence_length: 0.0,
            embedding: None,
            category_count: 0,
            category_confidence: 0.5,
            categories: Vec::new(),
            has_title: false,
            has_sections: false,
            has_lists: false,
            has_code: false,
            format_quality: 0.5,
            file_type: String::new(),
            nesting_depth: 0,
            file_size_bytes: 0,
            days_since_creation: 0.0,
            days_since_modification: 0.0,
            iteration_count: 0,
            previous_confidence: 0.5,
            improvement_rate: 0.0,
        }
    }
}
