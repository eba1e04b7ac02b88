/// Errors raised by the Curator confidence engine.
///
/// Scoring and prediction entry points are total functions and never
/// return these; only registration and explicit weight replacement can
/// fail.
#[derive(Debug, thiserror::Error)]
pub enum CuratorError {
    #[error("weight set invalid: weights sum to {sum}, expected 1.0")]
    InvalidWeightSum { sum: f64 },

    #[error("weight set invalid: dimension '{dimension}' has negative weight {weight}")]
    NegativeWeight { dimension: String, weight: f64 },

    #[error("algorithm '{name}' rejected: probe returned {output}, expected a finite value in [0, 1]")]
    AlgorithmValidation { name: String, output: f64 },

    #[error("algorithm '{name}' is already registered")]
    AlgorithmExists { name: String },

    #[error("no algorithm registered under '{name}'")]
    UnknownAlgorithm { name: String },
}

/// Convenience result alias used across the workspace.
pub type CuratorResult<T> = Result<T, CuratorError>;
