use super::config::DEFAULT_IMPUTATION_FRACTION;
use super::user::UserProfile;
use crate::error::Result;
use crate::platform::{PlatformRegistry, RatingNormalizer};

/// Estimates a rating on a platform the user has no data for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImputationEngine {
    pub normalizer: RatingNormalizer,
    /// Fraction of max rating used when the user has no ratings anywhere
    pub fraction: f64,
}

impl Default for ImputationEngine {
    fn default() -> Self {
        Self {
            normalizer: RatingNormalizer::default(),
            fraction: DEFAULT_IMPUTATION_FRACTION,
        }
    }
}

impl ImputationEngine {
    pub fn new(normalizer: RatingNormalizer, fraction: f64) -> Self {
        Self {
            normalizer,
            fraction,
        }
    }

    /// With no ratings, a fixed fraction of the platform's max rating.
    /// Otherwise the user's mean normalized rating across every platform they
    /// have (including `platform` itself if rated), mapped back onto
    /// `platform`'s scale.
    pub fn impute(
        &self,
        user: &UserProfile,
        registry: &PlatformRegistry,
        platform: &str,
    ) -> Result<f64> {
        let max_rating = registry.max_rating(platform)?;

        if !user.has_ratings() {
            return Ok(max_rating * self.fraction);
        }

        let mut sum = 0.0;
        for (rated, &rating) in &user.platform_ratings {
            sum += self
                .normalizer
                .normalize(rating, registry.max_rating(rated)?);
        }
        let avg_normalized = sum / user.platform_ratings.len() as f64;

        Ok(self.normalizer.denormalize(avg_normalized, max_rating))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    fn registry() -> PlatformRegistry {
        let mut registry = PlatformRegistry::new();
        registry.register("Codeforces", 3000.0).unwrap();
        registry.register("CodeChef", 1800.0).unwrap();
        registry.register("AtCoder", 2800.0).unwrap();
        registry
    }

    #[test]
    fn test_no_ratings_uses_fraction_of_max() {
        let user = UserProfile::new("bob");
        let value = ImputationEngine::default()
            .impute(&user, &registry(), "AtCoder")
            .unwrap();
        assert_eq!(value, 2800.0 * 0.4);
    }

    #[test]
    fn test_mean_of_normalized_ratings() {
        let mut user = UserProfile::new("carol");
        user.platform_ratings.insert("Codeforces".to_string(), 1500.0); // 1500
        user.platform_ratings.insert("CodeChef".to_string(), 1200.0); // 2000

        let value = ImputationEngine::default()
            .impute(&user, &registry(), "AtCoder")
            .unwrap();
        // mean normalized 1750 on a 2800 scale
        assert!((value - 1750.0 / 3000.0 * 2800.0).abs() < 1e-9);
    }

    #[test]
    fn test_result_within_platform_range() {
        let mut user = UserProfile::new("dave");
        user.platform_ratings.insert("Codeforces".to_string(), 3000.0);
        user.platform_ratings.insert("CodeChef".to_string(), 0.0);

        let value = ImputationEngine::default()
            .impute(&user, &registry(), "CodeChef")
            .unwrap();
        assert!((0.0..=1800.0).contains(&value));
    }

    #[test]
    fn test_unknown_platform() {
        let user = UserProfile::new("bob");
        let result = ImputationEngine::default().impute(&user, &registry(), "Topcoder");
        assert_eq!(result, Err(EngineError::InvalidPlatform("Topcoder".to_string())));
    }

    #[test]
    fn test_custom_fraction() {
        let user = UserProfile::new("bob");
        let engine = ImputationEngine::new(RatingNormalizer::default(), 0.5);
        assert_eq!(engine.impute(&user, &registry(), "CodeChef").unwrap(), 900.0);
    }
}
