use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::WEIGHT_SUM_TOLERANCE;
use crate::errors::{CuratorError, CuratorResult};
use crate::score::Score;

/// One facet of content quality, scored independently in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Semantic,
    Categorical,
    Structural,
    Temporal,
}

impl Dimension {
    /// All dimensions, in weight-table order.
    pub const ALL: [Dimension; 4] = [
        Dimension::Semantic,
        Dimension::Categorical,
        Dimension::Structural,
        Dimension::Temporal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Semantic => "semantic",
            Dimension::Categorical => "categorical",
            Dimension::Structural => "structural",
            Dimension::Temporal => "temporal",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-dimension scores for one calculation, each clamped to [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub semantic: Score,
    pub categorical: Score,
    pub structural: Score,
    pub temporal: Score,
}

impl DimensionScores {
    pub fn new(semantic: f64, categorical: f64, structural: f64, temporal: f64) -> Self {
        Self {
            semantic: Score::new(semantic),
            categorical: Score::new(categorical),
            structural: Score::new(structural),
            temporal: Score::new(temporal),
        }
    }

    pub fn get(&self, dimension: Dimension) -> Score {
        match dimension {
            Dimension::Semantic => self.semantic,
            Dimension::Categorical => self.categorical,
            Dimension::Structural => self.structural,
            Dimension::Temporal => self.temporal,
        }
    }

    /// Mean of the four dimension scores.
    pub fn mean(&self) -> f64 {
        Dimension::ALL
            .iter()
            .map(|d| self.get(*d).value())
            .sum::<f64>()
            / Dimension::ALL.len() as f64
    }

    /// Population variance of the four dimension scores.
    /// Low variance means the dimensions agree with each other.
    pub fn variance(&self) -> f64 {
        let mean = self.mean();
        Dimension::ALL
            .iter()
            .map(|d| {
                let diff = self.get(*d).value() - mean;
                diff * diff
            })
            .sum::<f64>()
            / Dimension::ALL.len() as f64
    }
}

/// Normalized per-dimension contribution weights.
///
/// Invariant: all weights ≥ 0 and the set sums to 1.0 (± 1e-6).
/// `new` validates; `normalized` repairs arbitrary non-negative inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightSet {
    pub semantic: f64,
    pub categorical: f64,
    pub structural: f64,
    pub temporal: f64,
}

impl WeightSet {
    /// Create a validated weight set. Fails if any weight is negative or
    /// the sum deviates from 1.0 by more than the tolerance.
    pub fn new(
        semantic: f64,
        categorical: f64,
        structural: f64,
        temporal: f64,
    ) -> CuratorResult<Self> {
        let set = Self {
            semantic,
            categorical,
            structural,
            temporal,
        };
        set.validate()?;
        Ok(set)
    }

    /// Build a weight set from arbitrary values: clamps negatives to zero
    /// and renormalizes to sum 1.0. Degenerate all-zero input yields equal
    /// weights.
    pub fn normalized(semantic: f64, categorical: f64, structural: f64, temporal: f64) -> Self {
        let raw = [
            semantic.max(0.0),
            categorical.max(0.0),
            structural.max(0.0),
            temporal.max(0.0),
        ];
        let total: f64 = raw.iter().sum();
        if total <= f64::EPSILON || !total.is_finite() {
            return Self {
                semantic: 0.25,
                categorical: 0.25,
                structural: 0.25,
                temporal: 0.25,
            };
        }
        Self {
            semantic: raw[0] / total,
            categorical: raw[1] / total,
            structural: raw[2] / total,
            temporal: raw[3] / total,
        }
    }

    /// Check the non-negativity and sum-to-1 invariants.
    pub fn validate(&self) -> CuratorResult<()> {
        for dimension in Dimension::ALL {
            let weight = self.get(dimension);
            if weight < 0.0 || !weight.is_finite() {
                return Err(CuratorError::NegativeWeight {
                    dimension: dimension.as_str().to_string(),
                    weight,
                });
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(CuratorError::InvalidWeightSum { sum });
        }
        Ok(())
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Semantic => self.semantic,
            Dimension::Categorical => self.categorical,
            Dimension::Structural => self.structural,
            Dimension::Temporal => self.temporal,
        }
    }

    pub fn sum(&self) -> f64 {
        self.semantic + self.categorical + self.structural + self.temporal
    }

    /// Weighted combination of dimension scores, clamped to [0, 1].
    pub fn combine(&self, scores: &DimensionScores) -> Score {
        let overall = Dimension::ALL
            .iter()
            .map(|d| self.get(*d) * scores.get(*d).value())
            .sum::<f64>();
        Score::new(overall)
    }
}

impl Default for WeightSet {
    fn default() -> Self {
        Self {
            semantic: 0.4,
            categorical: 0.3,
            structural: 0.2,
            temporal: 0.1,
        }
    }
}
