//! # curator-core
//!
//! Foundation crate for the Curator confidence engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod score;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::CuratorConfig;
pub use errors::{CuratorError, CuratorResult};
pub use score::Score;
pub use types::{
    AnalysisData, ConfidenceRecord, ConvergencePrediction, Dimension, DimensionScores,
    FeatureVector, FeedbackSample, IterationHistoryEntry, WeightSet,
};
