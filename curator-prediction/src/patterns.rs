use std::collections::VecDeque;

use dashmap::DashMap;

use curator_core::types::{HistoricalPattern, ImprovementTrend};

/// Bounded per-category store of past prediction outcomes.
///
/// Each category key holds a FIFO window of at most `capacity` patterns;
/// the oldest entry is evicted on overflow. The store is owned by a
/// predictor instance — there is no ambient/global pattern state.
#[derive(Debug)]
pub struct PatternStore {
    windows: DashMap<String, VecDeque<HistoricalPattern>>,
    capacity: usize,
    similarity_threshold: f64,
}

impl PatternStore {
    pub fn new(capacity: usize, similarity_threshold: f64) -> Self {
        Self {
            windows: DashMap::new(),
            capacity: capacity.max(1),
            similarity_threshold,
        }
    }

    /// Coarse bucket key: confidence in 0.2-wide bands, dimension variance
    /// in 0.05-wide bands, plus the trend label.
    pub fn category_key(confidence: f64, dimension_variance: f64, trend: ImprovementTrend) -> String {
        let confidence_band = ((confidence.clamp(0.0, 1.0) * 5.0).floor() as u32).min(4);
        let variance_band = ((dimension_variance.max(0.0) / 0.05).floor() as u32).min(4);
        format!("c{confidence_band}-v{variance_band}-{trend}")
    }

    /// Insert a pattern into its category window, evicting FIFO at capacity.
    pub fn record(&self, pattern: HistoricalPattern) {
        let mut window = self.windows.entry(pattern.category_key.clone()).or_default();
        if window.len() >= self.capacity {
            window.pop_front();
        }
        window.push_back(pattern);
    }

    /// Patterns in the given category whose similarity to the query
    /// trajectory exceeds the threshold.
    ///
    /// Similarity is the mean of three closeness components: confidence,
    /// dimension variance, and iteration count (the latter on a 10-iteration
    /// scale).
    pub fn similar(
        &self,
        category_key: &str,
        confidence: f64,
        dimension_variance: f64,
        iteration_count: u32,
    ) -> Vec<HistoricalPattern> {
        let Some(window) = self.windows.get(category_key) else {
            return Vec::new();
        };
        window
            .iter()
            .filter(|p| {
                similarity(p, confidence, dimension_variance, iteration_count)
                    > self.similarity_threshold
            })
            .cloned()
            .collect()
    }

    /// Total patterns currently stored across all categories.
    pub fn len(&self) -> usize {
        self.windows.iter().map(|w| w.value().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn similarity(
    pattern: &HistoricalPattern,
    confidence: f64,
    dimension_variance: f64,
    iteration_count: u32,
) -> f64 {
    let confidence_closeness = 1.0 - (pattern.confidence_at_prediction - confidence).abs();
    let variance_closeness = 1.0 - (pattern.dimension_variance - dimension_variance).abs();
    let iteration_closeness =
        1.0 - ((pattern.iteration_count as f64 - iteration_count as f64).abs() / 10.0).min(1.0);
    (confidence_closeness + variance_closeness + iteration_closeness) / 3.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use curator_core::types::StrategyKind;

    fn pattern(key: &str, confidence: f64, iterations: u32) -> HistoricalPattern {
        HistoricalPattern {
            category_key: key.to_string(),
            confidence_at_prediction: confidence,
            dimension_variance: 0.01,
            iteration_count: iterations,
            strategy_used: StrategyKind::Linear,
            actual_converged: true,
            actual_iterations: iterations + 2,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn evicts_oldest_at_capacity() {
        let store = PatternStore::new(3, 0.8);
        for i in 0..5 {
            store.record(pattern("k", 0.5, i));
        }
        assert_eq!(store.len(), 3);
        let remaining = store.similar("k", 0.5, 0.01, 3);
        assert!(remaining.iter().all(|p| p.iteration_count >= 2));
    }

    #[test]
    fn similar_requires_matching_category() {
        let store = PatternStore::new(10, 0.8);
        store.record(pattern("a", 0.5, 3));
        assert!(store.similar("b", 0.5, 0.01, 3).is_empty());
    }

    #[test]
    fn close_trajectories_match() {
        let store = PatternStore::new(10, 0.8);
        store.record(pattern("k", 0.52, 4));
        let matches = store.similar("k", 0.5, 0.01, 3);
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn distant_trajectories_do_not_match() {
        let store = PatternStore::new(10, 0.8);
        store.record(pattern("k", 0.9, 20));
        assert!(store.similar("k", 0.3, 0.01, 2).is_empty());
    }

    #[test]
    fn bucket_keys_are_coarse() {
        let a = PatternStore::category_key(0.51, 0.01, ImprovementTrend::Stable);
        let b = PatternStore::category_key(0.55, 0.012, ImprovementTrend::Stable);
        assert_eq!(a, b);
        let c = PatternStore::category_key(0.55, 0.012, ImprovementTrend::Accelerating);
        assert_ne!(a, c);
    }
}
