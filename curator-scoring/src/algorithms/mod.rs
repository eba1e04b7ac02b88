//! Shipped scoring algorithms: the default weighted ensemble plus the
//! deterministic "neural" / "forest" / "boosting" style combiners.
//!
//! Every algorithm honors the registry contract: deterministic for
//! identical inputs, output finite and in [0, 1].

pub mod deterministic;
pub mod ensemble;

pub use deterministic::{BoostingScorer, ForestScorer, NeuralScorer};
pub use ensemble::WeightedEnsemble;

/// Name the default combiner is registered under.
pub const WEIGHTED_ENSEMBLE: &str = "weighted_ensemble";
pub const NEURAL: &str = "neural";
pub const FOREST: &str = "forest";
pub const BOOSTING: &str = "boosting";
