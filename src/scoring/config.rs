use crate::platform::normalize::NORMALIZED_SCALE;
use crate::platform::weights::{DEFAULT_DIFFICULTY_WEIGHT, DEFAULT_PARTICIPATION_WEIGHT};
use crate::platform::{RatingNormalizer, WeightEngine};
use serde::{Deserialize, Serialize};

pub const DEFAULT_IMPUTATION_FRACTION: f64 = 0.4;

/// Weighting configuration.
///
/// Controls how platform weights, normalized ratings and imputed ratings are
/// derived. Every field is optional and falls back to the built-in value.
///
/// Example YAML:
/// ```yaml
/// weighting:
///   difficulty_weight: 0.6
///   participation_weight: 0.4
///   normalized_scale: 3000
///   imputation_fraction: 0.4
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct WeightingConfig {
    /// Share of a platform's weight that comes from its difficulty (default: 0.6)
    #[serde(default)]
    pub difficulty_weight: Option<f64>,

    /// Share of a platform's weight that comes from its participation (default: 0.4)
    #[serde(default)]
    pub participation_weight: Option<f64>,

    /// Upper end of the common rating scale (default: 3000)
    #[serde(default)]
    pub normalized_scale: Option<f64>,

    /// Fraction of a platform's max rating assumed for a user with no ratings
    /// at all (default: 0.4)
    #[serde(default)]
    pub imputation_fraction: Option<f64>,
}

impl Default for WeightingConfig {
    fn default() -> Self {
        Self {
            difficulty_weight: Some(DEFAULT_DIFFICULTY_WEIGHT),
            participation_weight: Some(DEFAULT_PARTICIPATION_WEIGHT),
            normalized_scale: Some(NORMALIZED_SCALE),
            imputation_fraction: Some(DEFAULT_IMPUTATION_FRACTION),
        }
    }
}

impl WeightingConfig {
    pub fn weight_engine(&self) -> WeightEngine {
        WeightEngine::new(
            self.difficulty_weight.unwrap_or(DEFAULT_DIFFICULTY_WEIGHT),
            self.participation_weight
                .unwrap_or(DEFAULT_PARTICIPATION_WEIGHT),
        )
    }

    pub fn normalizer(&self) -> RatingNormalizer {
        RatingNormalizer::new(self.normalized_scale.unwrap_or(NORMALIZED_SCALE))
    }

    pub fn imputation_fraction(&self) -> f64 {
        self.imputation_fraction
            .unwrap_or(DEFAULT_IMPUTATION_FRACTION)
    }
}
