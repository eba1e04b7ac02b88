pub mod defaults;
pub mod prediction_config;
pub mod scoring_config;

pub use prediction_config::PredictionConfig;
pub use scoring_config::ScoringConfig;

use serde::{Deserialize, Serialize};

/// Top-level configuration for the Curator engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CuratorConfig {
    pub scoring: ScoringConfig,
    pub prediction: PredictionConfig,
}

impl CuratorConfig {
    /// Parse a configuration from TOML text. Missing sections and fields
    /// fall back to defaults.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
