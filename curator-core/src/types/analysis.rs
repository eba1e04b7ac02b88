use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of a document's analyzable attributes, supplied by the
/// external analysis/storage collaborator.
///
/// Every field except `file_id` is optional: the feature extractor
/// substitutes neutral defaults for anything missing, so a bare
/// `AnalysisData` is still scoreable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisData {
    /// Stable identifier of the document being scored.
    pub file_id: String,

    /// Raw text content. When present, word/sentence statistics are
    /// computed from it; otherwise the precomputed fields below are used.
    pub content: Option<String>,

    // Precomputed content statistics (used when `content` is absent).
    pub word_count: Option<u32>,
    pub unique_word_count: Option<u32>,
    pub avg_sentence_length: Option<f64>,

    /// Precomputed content embedding (typically 768 dimensions).
    pub embedding: Option<Vec<f64>>,

    // Category attributes.
    pub categories: Option<Vec<String>>,
    pub category_confidence: Option<f64>,

    // Structural attributes.
    pub has_title: Option<bool>,
    pub has_sections: Option<bool>,
    pub has_lists: Option<bool>,
    pub has_code: Option<bool>,
    pub format_quality: Option<f64>,
    pub file_type: Option<String>,
    pub nesting_depth: Option<u32>,
    pub file_size_bytes: Option<u64>,

    // Temporal attributes.
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,

    // Iteration context.
    pub iteration_count: Option<u32>,
    pub previous_confidence: Option<f64>,
    pub improvement_rate: Option<f64>,
}

impl AnalysisData {
    /// Minimal record with just an identifier.
    pub fn for_file(file_id: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
            ..Default::default()
        }
    }
}
