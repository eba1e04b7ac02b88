use chrono::Utc;
use proptest::prelude::*;

use curator_core::config::ScoringConfig;
use curator_core::types::{AnalysisData, DimensionScores, FeedbackSample, WeightSet};
use curator_scoring::{dimensions, extractor, optimizer, ConfidenceCalculator};

fn arb_analysis_data() -> impl Strategy<Value = AnalysisData> {
    (
        proptest::option::of(0u32..100_000),
        proptest::option::of(0u32..100_000),
        proptest::option::of(0.0f64..200.0),
        proptest::option::of(proptest::collection::vec("[a-z/>]{1,20}", 0..12)),
        proptest::option::of(0.0f64..=1.0),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(0.0f64..=1.0),
        proptest::option::of(0u64..100_000_000),
        proptest::option::of(0u32..50),
    )
        .prop_map(
            |(
                word_count,
                unique_word_count,
                avg_sentence_length,
                categories,
                category_confidence,
                has_title,
                has_sections,
                format_quality,
                file_size_bytes,
                iteration_count,
            )| AnalysisData {
                word_count,
                unique_word_count,
                avg_sentence_length,
                categories,
                category_confidence,
                has_title,
                has_sections,
                format_quality,
                file_size_bytes,
                iteration_count,
                ..AnalysisData::for_file("prop")
            },
        )
}

// ── All dimension scores stay in [0, 1] ─────────────────────────────────

proptest! {
    #[test]
    fn dimension_scores_bounded(data in arb_analysis_data()) {
        let features = extractor::extract(&data, Utc::now());
        let scores = dimensions::score_all(&features, &ScoringConfig::default());
        for value in [
            scores.semantic.value(),
            scores.categorical.value(),
            scores.structural.value(),
            scores.temporal.value(),
        ] {
            prop_assert!(
                (0.0..=1.0).contains(&value),
                "dimension score out of bounds: {}",
                value
            );
        }
    }
}

// ── The overall confidence stays in [0, 1] ──────────────────────────────

proptest! {
    #[test]
    fn overall_confidence_bounded(data in arb_analysis_data()) {
        let calculator = ConfidenceCalculator::new();
        let record = calculator.calculate(&data, &[]);
        prop_assert!((0.0..=1.0).contains(&record.overall.value()));
        prop_assert!(record.overall.value().is_finite());
    }
}

// ── Optimized weights always satisfy the weight-set invariant ────────────

fn arb_feedback() -> impl Strategy<Value = Vec<FeedbackSample>> {
    proptest::collection::vec(
        (
            0.0f64..=1.0,
            0.0f64..=1.0,
            0.0f64..=1.0,
            0.0f64..=1.0,
            0.0f64..=1.0,
            0.0f64..=1.0,
        )
            .prop_map(|(p, a, s, c, st, t)| FeedbackSample {
                predicted_confidence: p,
                actual_confidence: a,
                dimensions: DimensionScores::new(s, c, st, t),
            }),
        0..50,
    )
}

proptest! {
    #[test]
    fn optimizer_preserves_weight_invariant(
        feedback in arb_feedback(),
        learning_rate in 0.0f64..2.0,
    ) {
        let updated = optimizer::optimize(&WeightSet::default(), &feedback, learning_rate);
        prop_assert!(updated.validate().is_ok(), "invariant broken: {:?}", updated);
    }

    #[test]
    fn repeated_optimization_never_escapes_invariant(feedback in arb_feedback()) {
        let mut weights = WeightSet::default();
        for _ in 0..20 {
            weights = optimizer::optimize(&weights, &feedback, 0.1);
            prop_assert!(weights.validate().is_ok());
        }
    }
}
