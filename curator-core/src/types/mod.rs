pub mod analysis;
pub mod dimensions;
pub mod feature_vector;
pub mod feedback;
pub mod pattern;
pub mod prediction;
pub mod record;

pub use analysis::AnalysisData;
pub use dimensions::{Dimension, DimensionScores, WeightSet};
pub use feature_vector::{EmbeddingStats, FeatureVector};
pub use feedback::FeedbackSample;
pub use pattern::HistoricalPattern;
pub use prediction::{
    ConvergencePrediction, ImprovementTrend, IterationBounds, IterationHistoryEntry,
    PredictionBounds, ScoreBounds, StrategyKind,
};
pub use record::{ConfidenceRecord, PerformanceStats};
