use crate::config::PlatformConfig;
use crate::course::{Course, ProfileBonus};
use crate::platform::WeightMap;
use crate::scoring::RankingEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One ranking session's input: who is ranked, the platform updates to
/// apply in order, and everyone's completed courses.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Roster {
    /// Registered in addition to (or replacing) the configured platforms
    #[serde(default)]
    pub platforms: Vec<PlatformConfig>,

    #[serde(default)]
    pub users: Vec<String>,

    /// Applied in order; later updates see earlier ones
    #[serde(default)]
    pub updates: Vec<StatsUpdate>,

    #[serde(default)]
    pub courses: BTreeMap<String, Vec<Course>>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StatsUpdate {
    pub platform: String,
    pub difficulty: f64,
    pub participation: f64,
    #[serde(default)]
    pub ratings: BTreeMap<String, f64>,
}

/// Saved result of a ranking run.
#[derive(Debug, Clone, Serialize)]
pub struct RankingReport {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub weights: WeightMap,
    pub rankings: Vec<RankingEntry>,
    pub profiles: BTreeMap<String, ProfileBonus>,
}

impl RankingReport {
    pub fn new(
        weights: WeightMap,
        rankings: Vec<RankingEntry>,
        profiles: BTreeMap<String, ProfileBonus>,
    ) -> Self {
        Self {
            version: 1,
            generated_at: Utc::now(),
            weights,
            rankings,
            profiles,
        }
    }
}
