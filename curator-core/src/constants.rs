/// Curator system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tolerance when validating that a weight set sums to 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Floor and ceiling for strategy self-reported confidence.
pub const STRATEGY_CONFIDENCE_FLOOR: f64 = 0.2;
pub const STRATEGY_CONFIDENCE_CEILING: f64 = 0.95;

/// Maximum calculation-log entries retained for performance stats.
pub const CALCULATION_LOG_CAPACITY: usize = 1000;

/// Dimensionality of precomputed content embeddings.
pub const EMBEDDING_DIMENSIONS: usize = 768;
