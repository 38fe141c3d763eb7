use super::user::UserProfile;
use crate::platform::{PlatformRegistry, RatingNormalizer, WeightMap};

/// Weighted average of a user's normalized platform ratings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UnifiedScoreCalculator {
    pub normalizer: RatingNormalizer,
}

impl UnifiedScoreCalculator {
    pub fn new(normalizer: RatingNormalizer) -> Self {
        Self { normalizer }
    }

    /// `Σ(normalized · weight) / Σ weight` over the platforms the user is
    /// rated on, or 0 when the weights sum to zero.
    ///
    /// A user rated on exactly one registered platform gets that platform's
    /// normalized rating, whatever its weight (including 0). Otherwise
    /// platforms missing from `weights` count with weight 0, and ratings on
    /// unregistered platforms are ignored.
    pub fn unified_rating(
        &self,
        user: &UserProfile,
        registry: &PlatformRegistry,
        weights: &WeightMap,
    ) -> f64 {
        let terms: Vec<(f64, f64)> = user
            .platform_ratings
            .iter()
            .filter_map(|(platform, &rating)| {
                let max_rating = registry.get(platform)?.max_rating;
                let weight = weights.get(platform).copied().unwrap_or(0.0);
                Some((self.normalizer.normalize(rating, max_rating), weight))
            })
            .collect();

        if let [(normalized, _)] = terms.as_slice() {
            return *normalized;
        }

        let (weighted, total_weight) = terms
            .iter()
            .filter(|(_, w)| *w > 0.0)
            .fold((0.0, 0.0), |(acc, w_acc), (n, w)| (acc + n * w, w_acc + w));

        if total_weight > 0.0 {
            weighted / total_weight
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (PlatformRegistry, WeightMap) {
        let mut registry = PlatformRegistry::new();
        registry.register("Codeforces", 3000.0).unwrap();
        registry.register("CodeChef", 1800.0).unwrap();

        let mut weights = WeightMap::new();
        weights.insert("Codeforces".to_string(), 0.75);
        weights.insert("CodeChef".to_string(), 0.25);
        (registry, weights)
    }

    fn user_with(ratings: &[(&str, f64)]) -> UserProfile {
        let mut user = UserProfile::new("u");
        for (p, r) in ratings {
            user.platform_ratings.insert(p.to_string(), *r);
        }
        user
    }

    #[test]
    fn test_no_ratings_is_zero() {
        let (registry, weights) = setup();
        let calc = UnifiedScoreCalculator::default();
        assert_eq!(calc.unified_rating(&user_with(&[]), &registry, &weights), 0.0);
    }

    #[test]
    fn test_single_platform_exact() {
        let (registry, weights) = setup();
        let calc = UnifiedScoreCalculator::default();
        let user = user_with(&[("CodeChef", 1234.0)]);
        assert_eq!(
            calc.unified_rating(&user, &registry, &weights),
            calc.normalizer.normalize(1234.0, 1800.0)
        );
    }

    #[test]
    fn test_weighted_average() {
        let (registry, weights) = setup();
        let calc = UnifiedScoreCalculator::default();
        // normalized 2000 and 1500
        let user = user_with(&[("Codeforces", 2000.0), ("CodeChef", 900.0)]);
        let expected = (2000.0 * 0.75 + 1500.0 * 0.25) / 1.0;
        assert!((calc.unified_rating(&user, &registry, &weights) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_zero_weight_sum_is_zero() {
        let (registry, mut weights) = setup();
        weights.values_mut().for_each(|w| *w = 0.0);
        let calc = UnifiedScoreCalculator::default();
        let user = user_with(&[("Codeforces", 2000.0), ("CodeChef", 900.0)]);
        assert_eq!(calc.unified_rating(&user, &registry, &weights), 0.0);
    }

    #[test]
    fn test_single_platform_ignores_zero_weight() {
        let (registry, mut weights) = setup();
        weights.insert("Codeforces".to_string(), 0.0);
        let calc = UnifiedScoreCalculator::default();
        let user = user_with(&[("Codeforces", 2100.0)]);
        assert_eq!(calc.unified_rating(&user, &registry, &weights), 2100.0);

        // missing from the weight map entirely
        let user = user_with(&[("CodeChef", 900.0)]);
        assert_eq!(
            calc.unified_rating(&user, &registry, &WeightMap::new()),
            1500.0
        );
    }

    #[test]
    fn test_zero_weight_platform_skipped_among_several() {
        let (registry, mut weights) = setup();
        weights.insert("CodeChef".to_string(), 0.0);
        let calc = UnifiedScoreCalculator::default();
        let user = user_with(&[("Codeforces", 2000.0), ("CodeChef", 900.0)]);
        assert_eq!(calc.unified_rating(&user, &registry, &weights), 2000.0);
    }

    #[test]
    fn test_unknown_platform_weighs_nothing() {
        let (registry, weights) = setup();
        let calc = UnifiedScoreCalculator::default();
        let user = user_with(&[("Codeforces", 2400.0), ("Topcoder", 1000.0)]);
        assert_eq!(calc.unified_rating(&user, &registry, &weights), 2400.0);
    }
}
