//! FeatureExtractor — turns an [`AnalysisData`] snapshot into a flat
//! [`FeatureVector`] with neutral defaults for anything missing.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use curator_core::types::{AnalysisData, EmbeddingStats, FeatureVector};

/// Extract a feature vector from raw analysis data.
///
/// Total function: missing fields resolve to neutral values (0, 0.5, or
/// false), so any `AnalysisData` — including an empty one — produces a
/// scoreable vector.
pub fn extract(data: &AnalysisData, now: DateTime<Utc>) -> FeatureVector {
    let content_stats = data.content.as_deref().map(ContentStats::compute);

    let word_count = data
        .word_count
        .or_else(|| content_stats.as_ref().map(|s| s.word_count))
        .unwrap_or(0);
    let unique_word_count = data
        .unique_word_count
        .or_else(|| content_stats.as_ref().map(|s| s.unique_word_count))
        .unwrap_or(0)
        .min(word_count);
    let avg_sentence_length = data
        .avg_sentence_length
        .or_else(|| content_stats.as_ref().map(|s| s.avg_sentence_length))
        .unwrap_or(0.0)
        .max(0.0);

    let embedding = data
        .embedding
        .as_deref()
        .filter(|e| !e.is_empty())
        .map(embedding_stats);

    let categories = data.categories.clone().unwrap_or_default();

    FeatureVector {
        word_count,
        unique_word_count,
        avg_sentence_length,
        embedding,
        category_count: categories.len() as u32,
        category_confidence: data.category_confidence.unwrap_or(0.5).clamp(0.0, 1.0),
        categories,
        has_title: data.has_title.unwrap_or(false),
        has_sections: data.has_sections.unwrap_or(false),
        has_lists: data.has_lists.unwrap_or(false),
        has_code: data.has_code.unwrap_or(false),
        format_quality: data.format_quality.unwrap_or(0.5).clamp(0.0, 1.0),
        file_type: data.file_type.clone().unwrap_or_default().to_lowercase(),
        nesting_depth: data.nesting_depth.unwrap_or(0),
        file_size_bytes: data.file_size_bytes.unwrap_or(0),
        days_since_creation: days_between(data.created_at, now),
        days_since_modification: days_between(data.modified_at, now),
        iteration_count: data.iteration_count.unwrap_or(0),
        previous_confidence: data.previous_confidence.unwrap_or(0.5).clamp(0.0, 1.0),
        improvement_rate: data.improvement_rate.unwrap_or(0.0),
    }
}

/// Signed fractional days between a timestamp and `now`; 0 when absent.
/// Negative values mean the timestamp is in the future.
fn days_between(timestamp: Option<DateTime<Utc>>, now: DateTime<Utc>) -> f64 {
    match timestamp {
        Some(t) => (now - t).num_seconds() as f64 / 86_400.0,
        None => 0.0,
    }
}

struct ContentStats {
    word_count: u32,
    unique_word_count: u32,
    avg_sentence_length: f64,
}

impl ContentStats {
    fn compute(content: &str) -> Self {
        let words: Vec<&str> = content.split_whitespace().collect();
        let unique: HashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();

        let sentence_count = content
            .split(['.', '!', '?'])
            .filter(|s| !s.trim().is_empty())
            .count();

        let avg_sentence_length = if sentence_count == 0 {
            words.len() as f64
        } else {
            words.len() as f64 / sentence_count as f64
        };

        Self {
            word_count: words.len() as u32,
            unique_word_count: unique.len() as u32,
            avg_sentence_length,
        }
    }
}

fn embedding_stats(embedding: &[f64]) -> EmbeddingStats {
    let magnitude = embedding.iter().map(|v| v * v).sum::<f64>().sqrt();
    let mean = embedding.iter().sum::<f64>() / embedding.len() as f64;
    let variance = embedding
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum::<f64>()
        / embedding.len() as f64;
    EmbeddingStats {
        magnitude,
        variance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_data_yields_neutral_vector() {
        let features = extract(&AnalysisData::for_file("f"), Utc::now());
        assert_eq!(features.word_count, 0);
        assert_eq!(features.category_confidence, 0.5);
        assert_eq!(features.format_quality, 0.5);
        assert!(features.embedding.is_none());
        assert_eq!(features.days_since_creation, 0.0);
    }

    #[test]
    fn content_stats_computed_from_raw_text() {
        let data = AnalysisData {
            content: Some("One two three. Four five six. Seven eight nine.".to_string()),
            ..AnalysisData::for_file("f")
        };
        let features = extract(&data, Utc::now());
        assert_eq!(features.word_count, 9);
        assert_eq!(features.unique_word_count, 9);
        assert!((features.avg_sentence_length - 3.0).abs() < 1e-9);
    }

    #[test]
    fn precomputed_counts_take_precedence() {
        let data = AnalysisData {
            content: Some("one two".to_string()),
            word_count: Some(500),
            unique_word_count: Some(250),
            ..AnalysisData::for_file("f")
        };
        let features = extract(&data, Utc::now());
        assert_eq!(features.word_count, 500);
        assert_eq!(features.unique_word_count, 250);
    }

    #[test]
    fn embedding_stats_are_norm_and_variance() {
        let data = AnalysisData {
            embedding: Some(vec![3.0, 4.0]),
            ..AnalysisData::for_file("f")
        };
        let features = extract(&data, Utc::now());
        let stats = features.embedding.unwrap();
        assert!((stats.magnitude - 5.0).abs() < 1e-9);
        assert!((stats.variance - 0.25).abs() < 1e-9);
    }

    #[test]
    fn future_timestamps_yield_negative_deltas() {
        let now = Utc::now();
        let data = AnalysisData {
            created_at: Some(now + chrono::Duration::days(2)),
            ..AnalysisData::for_file("f")
        };
        let features = extract(&data, now);
        assert!(features.days_since_creation < 0.0);
    }
}
