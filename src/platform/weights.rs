use super::registry::PlatformRegistry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_DIFFICULTY_WEIGHT: f64 = 0.6;
pub const DEFAULT_PARTICIPATION_WEIGHT: f64 = 0.4;

/// Platform name to derived weight.
pub type WeightMap = BTreeMap<String, f64>;

/// Blends each platform's share of total difficulty and total participation
/// into one weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightEngine {
    pub difficulty_weight: f64,
    pub participation_weight: f64,
}

impl Default for WeightEngine {
    fn default() -> Self {
        Self {
            difficulty_weight: DEFAULT_DIFFICULTY_WEIGHT,
            participation_weight: DEFAULT_PARTICIPATION_WEIGHT,
        }
    }
}

impl WeightEngine {
    pub fn new(difficulty_weight: f64, participation_weight: f64) -> Self {
        Self {
            difficulty_weight,
            participation_weight,
        }
    }

    /// Weights for every registered platform, rated by anyone or not.
    ///
    /// A zero total for either input zeroes that input's share for all
    /// platforms. The weights only sum to 1 when every platform has nonzero
    /// difficulty and participation.
    pub fn recompute_weights(&self, registry: &PlatformRegistry) -> WeightMap {
        let (total_difficulty, total_participation) = registry
            .iter()
            .fold((0.0, 0.0), |(d, p), platform| {
                (d + platform.difficulty, p + platform.participation)
            });

        registry
            .iter()
            .map(|platform| {
                let normalized_difficulty = share(platform.difficulty, total_difficulty);
                let normalized_participation = share(platform.participation, total_participation);
                let weight = self.difficulty_weight * normalized_difficulty
                    + self.participation_weight * normalized_participation;
                (platform.name.clone(), weight)
            })
            .collect()
    }
}

fn share(value: f64, total: f64) -> f64 {
    if total > 0.0 {
        value / total
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(entries: &[(&str, f64, f64)]) -> PlatformRegistry {
        let mut registry = PlatformRegistry::new();
        for (name, difficulty, participation) in entries {
            registry.register(name, 3000.0).unwrap();
            registry.update(name, *difficulty, *participation).unwrap();
        }
        registry
    }

    #[test]
    fn test_single_platform_weight_is_one() {
        let registry = registry_with(&[("Codeforces", 2100.0, 0.8)]);
        let weights = WeightEngine::default().recompute_weights(&registry);
        assert!((weights["Codeforces"] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_two_platforms_blend() {
        // difficulty shares 0.75 / 0.25, participation shares 0.5 / 0.5
        let registry = registry_with(&[("A", 3.0, 0.5), ("B", 1.0, 0.5)]);
        let weights = WeightEngine::default().recompute_weights(&registry);
        assert!((weights["A"] - (0.6 * 0.75 + 0.4 * 0.5)).abs() < 1e-12);
        assert!((weights["B"] - (0.6 * 0.25 + 0.4 * 0.5)).abs() < 1e-12);
        assert!((weights["A"] + weights["B"] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_unrated_platform_still_weighted() {
        let mut registry = registry_with(&[("A", 2000.0, 0.8)]);
        registry.register("Fresh", 2500.0).unwrap();

        let weights = WeightEngine::default().recompute_weights(&registry);
        assert_eq!(weights.len(), 2);
        assert_eq!(weights["Fresh"], 0.0);
    }

    #[test]
    fn test_zero_totals_give_zero_weights() {
        let mut registry = PlatformRegistry::new();
        registry.register("A", 3000.0).unwrap();
        registry.register("B", 2000.0).unwrap();

        let weights = WeightEngine::default().recompute_weights(&registry);
        assert!(weights.values().all(|w| *w == 0.0));
    }

    #[test]
    fn test_zero_participation_only_uses_difficulty() {
        let registry = registry_with(&[("A", 1.0, 0.0), ("B", 1.0, 0.0)]);
        let weights = WeightEngine::default().recompute_weights(&registry);
        assert!((weights["A"] - 0.3).abs() < 1e-12);
        assert!((weights["A"] + weights["B"] - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_weights_non_negative() {
        let registry = registry_with(&[("A", 2100.0, 0.8), ("B", 0.0, 0.1), ("C", 1500.0, 0.0)]);
        let weights = WeightEngine::default().recompute_weights(&registry);
        assert!(weights.values().all(|w| *w >= 0.0));
    }

    #[test]
    fn test_custom_coefficients() {
        let registry = registry_with(&[("A", 1.0, 1.0), ("B", 3.0, 1.0)]);
        let weights = WeightEngine::new(1.0, 0.0).recompute_weights(&registry);
        assert!((weights["A"] - 0.25).abs() < 1e-12);
        assert!((weights["B"] - 0.75).abs() < 1e-12);
    }
}
