use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A rating platform and the inputs its weight is derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub name: String,
    /// Highest attainable rating on this platform
    pub max_rating: f64,
    pub difficulty: f64,
    /// Share of active participants, 0-1 in practice
    pub participation: f64,
}

impl Platform {
    pub fn new(name: impl Into<String>, max_rating: f64) -> Self {
        Self {
            name: name.into(),
            max_rating,
            difficulty: 0.0,
            participation: 0.0,
        }
    }
}

/// All registered platforms, keyed by name. Platforms are never removed.
#[derive(Debug, Clone, Default)]
pub struct PlatformRegistry {
    platforms: BTreeMap<String, Platform>,
}

impl PlatformRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a platform, or replace an existing one with the same name.
    /// The entry starts with zero difficulty and participation.
    pub fn register(&mut self, name: &str, max_rating: f64) -> Result<()> {
        if !max_rating.is_finite() || max_rating <= 0.0 {
            return Err(EngineError::InvalidMaxRating {
                name: name.to_string(),
                value: max_rating,
            });
        }

        if self
            .platforms
            .insert(name.to_string(), Platform::new(name, max_rating))
            .is_some()
        {
            tracing::debug!(platform = name, max_rating, "replaced platform registration");
        }
        Ok(())
    }

    /// Overwrite a platform's difficulty and participation. Both must be
    /// finite and non-negative.
    pub fn update(&mut self, name: &str, difficulty: f64, participation: f64) -> Result<()> {
        if !self.contains(name) {
            return Err(EngineError::InvalidPlatform(name.to_string()));
        }
        check_stats(name, difficulty, participation)?;

        let platform = self
            .platforms
            .get_mut(name)
            .ok_or_else(|| EngineError::InvalidPlatform(name.to_string()))?;
        platform.difficulty = difficulty;
        platform.participation = participation;
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Platform> {
        self.platforms.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.platforms.contains_key(name)
    }

    /// Max rating of a registered platform.
    pub fn max_rating(&self, name: &str) -> Result<f64> {
        self.get(name)
            .map(|p| p.max_rating)
            .ok_or_else(|| EngineError::InvalidPlatform(name.to_string()))
    }

    /// Platforms in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.values()
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }
}

pub(crate) fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

pub(crate) fn check_stats(platform: &str, difficulty: f64, participation: f64) -> Result<()> {
    if is_non_negative(difficulty) && is_non_negative(participation) {
        Ok(())
    } else {
        Err(EngineError::InvalidStats {
            platform: platform.to_string(),
            difficulty,
            participation,
        })
    }
}
