//! Default values shared by the config structs.

use std::collections::HashMap;

// Scoring.
pub const DEFAULT_OPTIMAL_WORD_COUNT: f64 = 1500.0;
pub const DEFAULT_WORD_COUNT_SIGMA: f64 = 900.0;
pub const DEFAULT_OPTIMAL_VOCABULARY_RATIO: f64 = 0.5;
pub const DEFAULT_VOCABULARY_SIGMA: f64 = 0.2;
pub const DEFAULT_OPTIMAL_SENTENCE_LENGTH: f64 = 17.0;
pub const DEFAULT_SENTENCE_SIGMA: f64 = 8.0;
pub const DEFAULT_EMBEDDING_MAGNITUDE_MIN: f64 = 5.0;
pub const DEFAULT_EMBEDDING_MAGNITUDE_MAX: f64 = 25.0;
pub const DEFAULT_OPTIMAL_EMBEDDING_VARIANCE: f64 = 0.05;
pub const DEFAULT_KEYWORD_CONFIDENCE_THRESHOLD: f64 = 0.6;
pub const DEFAULT_MIN_RELEVANT_WORD_COUNT: u32 = 100;
pub const DEFAULT_OPTIMAL_CATEGORY_COUNT: f64 = 3.0;
pub const DEFAULT_CATEGORY_COUNT_SIGMA: f64 = 1.5;
pub const DEFAULT_MAX_CATEGORIES: u32 = 7;
pub const DEFAULT_NESTING_DEPTH_THRESHOLD: u32 = 5;
pub const DEFAULT_IDEAL_SIZE_MIN_BYTES: u64 = 2_048;
pub const DEFAULT_IDEAL_SIZE_MAX_BYTES: u64 = 102_400;
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

/// File-type multipliers for the structural scorer: structured markup
/// scores above 1.0, unstructured dumps below it.
pub fn default_file_type_multipliers() -> HashMap<String, f64> {
    let mut multipliers = HashMap::new();
    multipliers.insert("md".to_string(), 1.15);
    multipliers.insert("html".to_string(), 1.1);
    multipliers.insert("docx".to_string(), 1.05);
    multipliers.insert("pdf".to_string(), 1.0);
    multipliers.insert("txt".to_string(), 0.95);
    multipliers.insert("csv".to_string(), 0.9);
    multipliers.insert("log".to_string(), 0.7);
    multipliers
}

// Prediction.
pub const DEFAULT_TARGET_CONFIDENCE: f64 = 0.85;
pub const DEFAULT_MAX_ITERATIONS: u32 = 20;
pub const DEFAULT_MIN_IMPROVEMENT: f64 = 0.01;
pub const DEFAULT_CONVERGENCE_THRESHOLD: f64 = 0.95;
pub const DEFAULT_MAX_PATTERNS_PER_CATEGORY: usize = 100;
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.8;
