use curator_core::config::ScoringConfig;
use curator_core::types::FeatureVector;

// Fixed indicator weights. Format quality carries the continuous signal;
// the boolean indicators are near-binary.
const SECTIONS_WEIGHT: f64 = 0.30;
const FORMAT_WEIGHT: f64 = 0.25;
const TITLE_WEIGHT: f64 = 0.20;
const LISTS_WEIGHT: f64 = 0.15;
const CODE_WEIGHT: f64 = 0.10;

/// Near-binary indicator values: presence is not quite certainty.
const PRESENT: f64 = 0.95;
const ABSENT: f64 = 0.05;

/// Decay applied per nesting level beyond the threshold.
const NESTING_DECAY: f64 = 0.3;

/// Share of the final blend carried by the indicator score vs file size.
const INDICATOR_SHARE: f64 = 0.8;

/// Structural quality score.
///
/// Weighted indicator sum × file-type multiplier, exponentially penalized
/// for nesting beyond the threshold, blended 80/20 with a file-size
/// sweet-spot score. Range: 0.0 – 1.0.
pub fn calculate(features: &FeatureVector, config: &ScoringConfig) -> f64 {
    let indicator = |present: bool| if present { PRESENT } else { ABSENT };

    let mut score = SECTIONS_WEIGHT * indicator(features.has_sections)
        + TITLE_WEIGHT * indicator(features.has_title)
        + LISTS_WEIGHT * indicator(features.has_lists)
        + CODE_WEIGHT * indicator(features.has_code)
        + FORMAT_WEIGHT * features.format_quality;

    let multiplier = config
        .file_type_multipliers
        .get(&features.file_type)
        .copied()
        .unwrap_or(1.0);
    score *= multiplier;

    if features.nesting_depth > config.nesting_depth_threshold {
        let excess = (features.nesting_depth - config.nesting_depth_threshold) as f64;
        score *= (-NESTING_DECAY * excess).exp();
    }

    let blended = INDICATOR_SHARE * score + (1.0 - INDICATOR_SHARE) * size_score(features, config);
    blended.clamp(0.0, 1.0)
}

/// File-size sweet spot: maximal inside the configured band, penalized
/// toward both extremes.
fn size_score(features: &FeatureVector, config: &ScoringConfig) -> f64 {
    let size = features.file_size_bytes;
    if size == 0 {
        return 0.1;
    }
    if size < config.ideal_size_min_bytes {
        return (size as f64 / config.ideal_size_min_bytes as f64).max(0.1);
    }
    if size <= config.ideal_size_max_bytes {
        return 1.0;
    }
    // Oversized: decays with the log of the overshoot ratio.
    let overshoot = size as f64 / config.ideal_size_max_bytes as f64;
    (1.0 / (1.0 + overshoot.ln())).max(0.2)
}
