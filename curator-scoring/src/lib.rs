//! # curator-scoring
//!
//! Multi-dimensional confidence scoring for curated content.
//!
//! Pipeline: raw [`AnalysisData`](curator_core::AnalysisData) →
//! feature extraction → four dimension scorers (semantic, categorical,
//! structural, temporal) → a registered combiner → overall confidence →
//! convergence prediction (delegated to `curator-prediction`).
//!
//! Ground-truth feedback flows back through the weight optimizer, which
//! keeps the per-dimension weight set normalized and non-negative.

pub mod algorithms;
pub mod calculator;
pub mod curve;
pub mod dimensions;
pub mod extractor;
pub mod optimizer;
pub mod registry;

pub use calculator::ConfidenceCalculator;
pub use registry::ScoringRegistry;
