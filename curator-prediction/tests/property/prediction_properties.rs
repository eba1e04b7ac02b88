use proptest::prelude::*;

use curator_core::config::PredictionConfig;
use curator_core::types::{DimensionScores, IterationHistoryEntry, StrategyKind};
use curator_prediction::ConvergencePredictor;

fn arb_history() -> impl Strategy<Value = Vec<IterationHistoryEntry>> {
    proptest::collection::vec(
        (0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0).prop_map(
            |(overall, s, c, st, t)| {
                IterationHistoryEntry::new(overall, DimensionScores::new(s, c, st, t))
            },
        ),
        0..30,
    )
}

fn arb_strategy() -> impl Strategy<Value = StrategyKind> {
    prop_oneof![
        Just(StrategyKind::Linear),
        Just(StrategyKind::Exponential),
        Just(StrategyKind::Logarithmic),
        Just(StrategyKind::Adaptive),
        Just(StrategyKind::Ensemble),
    ]
}

// ── predict is total: defined output for any trajectory ──────────────────

proptest! {
    #[test]
    fn prediction_is_well_formed_for_any_history(
        current in 0.0f64..=1.0,
        history in arb_history(),
        strategy in arb_strategy(),
    ) {
        let config = PredictionConfig::default();
        let max_iterations = config.max_iterations;
        let predictor = ConvergencePredictor::with_strategy(config, strategy);
        let dims = DimensionScores::new(current, current, current, current);

        let p = predictor.predict("prop-file", current, &dims, &history);

        prop_assert!((0.0..=1.0).contains(&p.confidence));
        prop_assert!(p.confidence.is_finite());
        prop_assert!(p.estimated_iterations <= max_iterations);
        prop_assert!(p.predicted_final_score.is_finite());
        prop_assert!((0.0..=1.0).contains(&p.plateau_risk));
    }
}

// ── Uncertainty bounds are always ordered ────────────────────────────────

proptest! {
    #[test]
    fn bounds_are_ordered(
        current in 0.0f64..=1.0,
        history in arb_history(),
        strategy in arb_strategy(),
    ) {
        let predictor = ConvergencePredictor::with_strategy(PredictionConfig::default(), strategy);
        let dims = DimensionScores::new(current, current, current, current);
        let p = predictor.predict("prop-file", current, &dims, &history);

        prop_assert!(p.bounds.iterations.lower <= p.bounds.iterations.upper);
        prop_assert!(p.bounds.final_score.lower <= p.bounds.final_score.upper);
        prop_assert!(p.bounds.final_score.upper <= 1.0);
        prop_assert!(p.bounds.final_score.lower >= current.min(1.0));
    }
}

// ── The pattern store never grows past its per-category cap ──────────────

proptest! {
    #[test]
    fn pattern_store_stays_bounded(outcomes in proptest::collection::vec(
        (0.0f64..=1.0, any::<bool>(), 1u32..20),
        0..300,
    )) {
        let config = PredictionConfig::default();
        let cap = config.max_patterns_per_category;
        let predictor = ConvergencePredictor::new(config);
        let dims = DimensionScores::new(0.5, 0.5, 0.5, 0.5);
        let prediction = predictor.predict("prop-file", 0.5, &dims, &[]);

        for (confidence, converged, iterations) in outcomes {
            predictor.record_outcome(&prediction, confidence, &dims, 2, converged, iterations);
        }
        // Keys partition confidence into 5 buckets; variance and trend are
        // fixed here, so at most 5 categories exist.
        prop_assert!(predictor.pattern_count() <= cap * 5);
    }
}
