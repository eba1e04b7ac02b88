use curator_core::config::ScoringConfig;
use curator_core::types::FeatureVector;

/// Age plateaus for the recency score, in days.
const FRESH_DAYS: f64 = 7.0;
const RECENT_DAYS: f64 = 30.0;
const AGING_DAYS: f64 = 90.0;
const STALE_DAYS: f64 = 180.0;

/// Half-life of the exponential tail past the last plateau, in days.
const DECAY_HALF_LIFE_DAYS: f64 = 365.0;

/// Temporal quality score.
///
/// Starts from a neutral 0.5 base and blends in, successively: recency
/// (50/50), activity ratio (70/30), timestamp consistency (80/20), and a
/// light iteration-count decay (90/10). Range: 0.0 – 1.0.
///
/// The `config` parameter keeps the scorer signature uniform with the
/// other dimensions; the temporal thresholds are fixed plateaus.
pub fn calculate(features: &FeatureVector, _config: &ScoringConfig) -> f64 {
    let mut score: f64 = 0.5;

    score = 0.5 * score + 0.5 * recency_score(features.days_since_modification);
    score = 0.7 * score + 0.3 * activity_score(features);
    score = 0.8 * score + 0.2 * consistency_score(features);

    // Early refinement iterations deserve a small freshness edge.
    let iteration_decay = 0.5 + 0.5 * (-(features.iteration_count as f64) / 10.0).exp();
    score = 0.9 * score + 0.1 * iteration_decay;

    score.clamp(0.0, 1.0)
}

/// Four flat plateaus by age, then exponential decay.
fn recency_score(days_since_modification: f64) -> f64 {
    let days = days_since_modification.max(0.0);
    if days <= FRESH_DAYS {
        1.0
    } else if days <= RECENT_DAYS {
        0.85
    } else if days <= AGING_DAYS {
        0.7
    } else if days <= STALE_DAYS {
        0.55
    } else {
        0.55 * (-(days - STALE_DAYS) / DECAY_HALF_LIFE_DAYS).exp()
    }
}

/// How much of the document's life has passed since its last update,
/// inverted so active documents score high. Bonuses for very recent
/// creation and for high activity.
fn activity_score(features: &FeatureVector) -> f64 {
    let age = features.days_since_creation;
    let since_update = features.days_since_modification.max(0.0);

    let mut score = if age <= 0.0 {
        0.5
    } else {
        1.0 - (since_update / age).clamp(0.0, 1.0)
    };

    if age >= 0.0 && age < FRESH_DAYS {
        score += 0.15;
    }
    if score > 0.7 {
        score += 0.1;
    }
    score.clamp(0.0, 1.0)
}

/// Penalizes impossible timestamp combinations: creation after the last
/// modification, or future-dated timestamps.
fn consistency_score(features: &FeatureVector) -> f64 {
    if features.days_since_creation < 0.0 || features.days_since_modification < 0.0 {
        return 0.3;
    }
    if features.days_since_creation < features.days_since_modification {
        return 0.4;
    }
    1.0
}
