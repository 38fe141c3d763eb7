use crate::scoring::WeightingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Platforms registered at startup; the built-in catalog when absent
    #[serde(default)]
    pub platforms: Option<Vec<PlatformConfig>>,

    #[serde(default)]
    pub weighting: Option<WeightingConfig>,

    /// Lookup tables file; the embedded tables when absent
    #[serde(default)]
    pub lookup_tables: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PlatformConfig {
    pub name: String,
    pub max_rating: f64,
}

impl PlatformConfig {
    pub fn new(name: &str, max_rating: f64) -> Self {
        Self {
            name: name.to_string(),
            max_rating,
        }
    }
}

/// Platforms known out of the box, with their rating ceilings.
pub fn default_platforms() -> Vec<PlatformConfig> {
    vec![
        PlatformConfig::new("Codeforces", 3000.0),
        PlatformConfig::new("Leetcode", 2500.0),
        PlatformConfig::new("CodeChef", 1800.0),
        PlatformConfig::new("AtCoder", 2800.0),
        PlatformConfig::new("HackerRank", 2000.0),
    ]
}

impl Config {
    pub fn effective_platforms(&self) -> Vec<PlatformConfig> {
        self.platforms.clone().unwrap_or_else(default_platforms)
    }

    pub fn effective_weighting(&self) -> WeightingConfig {
        self.weighting.clone().unwrap_or_default()
    }
}
