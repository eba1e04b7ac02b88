//! # curator-prediction
//!
//! Convergence forecasting for iterative content refinement: given a
//! confidence trajectory, predicts whether and in how many iterations the
//! target confidence will be reached.
//!
//! ## 5 Strategies
//!
//! | Strategy | Model |
//! |----------|-------|
//! | Linear | Constant average improvement per iteration |
//! | Exponential | Geometrically decaying improvements |
//! | Logarithmic | `a·ln(t+1) + b` curve fit through first/last points |
//! | Adaptive | Routes by plateau risk and improvement trend |
//! | Ensemble | Confidence-weighted blend of the first three, majority vote |
//!
//! ## Historical enhancement
//!
//! Outcomes of past predictions are kept in a bounded per-category window
//! (≤100 entries, FIFO). Predictions for similar trajectories are blended
//! toward what actually happened.
//!
//! All entry points are total: empty history yields a documented
//! low-confidence default, and every fitted-curve path guards against
//! non-finite results.

pub mod features;
pub mod patterns;
pub mod predictor;
pub mod strategies;

pub use features::TrajectoryFeatures;
pub use patterns::PatternStore;
pub use predictor::ConvergencePredictor;
pub use strategies::StrategyResult;
