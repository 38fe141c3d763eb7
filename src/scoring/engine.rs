use super::config::WeightingConfig;
use super::impute::ImputationEngine;
use super::ranking::{rank, RankingEntry};
use super::unified::UnifiedScoreCalculator;
use super::user::UserProfile;
use crate::course::{Course, CourseBonus, CourseBonusScorer, ProfileBonus};
use crate::error::{EngineError, Result};
use crate::lookup::LookupTables;
use crate::platform::registry::{check_stats, is_non_negative};
use crate::platform::{Platform, PlatformRegistry, WeightEngine, WeightMap};
use std::collections::BTreeMap;

/// Owns every platform, user and derived score of one ranking session.
///
/// All mutation goes through methods so the derived values stay consistent:
/// each `update_platform_stats` recomputes every platform weight and then every
/// user's unified and total rating before returning. Callers sharing an engine
/// across threads must serialize access themselves.
#[derive(Debug, Clone)]
pub struct RankingEngine {
    registry: PlatformRegistry,
    users: BTreeMap<String, UserProfile>,
    weights: WeightMap,
    weight_engine: WeightEngine,
    calculator: UnifiedScoreCalculator,
    imputer: ImputationEngine,
    scorer: CourseBonusScorer,
}

impl RankingEngine {
    pub fn new(config: &WeightingConfig, tables: LookupTables) -> Self {
        let normalizer = config.normalizer();
        Self {
            registry: PlatformRegistry::new(),
            users: BTreeMap::new(),
            weights: WeightMap::new(),
            weight_engine: config.weight_engine(),
            calculator: UnifiedScoreCalculator::new(normalizer),
            imputer: ImputationEngine::new(normalizer, config.imputation_fraction()),
            scorer: CourseBonusScorer::new(tables),
        }
    }

    /// Add or replace a platform. Weights are refreshed because the new entry
    /// joins the totals every weight is relative to.
    pub fn register_platform(&mut self, name: &str, max_rating: f64) -> Result<()> {
        self.registry.register(name, max_rating)?;
        tracing::debug!(platform = name, max_rating, "registered platform");
        self.recompute();
        Ok(())
    }

    /// Register a user. Returns false if the user already existed, in which
    /// case their ratings and bonus are kept.
    pub fn register_user(&mut self, user_id: &str) -> bool {
        if self.users.contains_key(user_id) {
            return false;
        }
        self.users
            .insert(user_id.to_string(), UserProfile::new(user_id));
        true
    }

    /// Record new platform statistics and ratings, then recompute all weights
    /// and all users' ratings.
    ///
    /// Every input is validated before anything changes, so a failed call
    /// leaves the engine untouched.
    pub fn update_platform_stats<I, S>(
        &mut self,
        platform: &str,
        difficulty: f64,
        participation: f64,
        ratings: I,
    ) -> Result<()>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        if !self.registry.contains(platform) {
            return Err(EngineError::InvalidPlatform(platform.to_string()));
        }
        check_stats(platform, difficulty, participation)?;

        let ratings: Vec<(S, f64)> = ratings.into_iter().collect();
        for (user_id, rating) in &ratings {
            let user_id: &str = user_id.as_ref();
            if !self.users.contains_key(user_id) {
                return Err(EngineError::UnknownUser(user_id.to_string()));
            }
            if !is_non_negative(*rating) {
                return Err(EngineError::InvalidRating {
                    platform: platform.to_string(),
                    user_id: user_id.to_string(),
                    value: *rating,
                });
            }
        }

        self.registry.update(platform, difficulty, participation)?;
        for (user_id, rating) in &ratings {
            let user_id: &str = user_id.as_ref();
            if let Some(user) = self.users.get_mut(user_id) {
                user.platform_ratings.insert(platform.to_string(), *rating);
            }
        }

        tracing::debug!(
            platform,
            difficulty,
            participation,
            ratings = ratings.len(),
            "updated platform stats"
        );
        self.recompute();
        Ok(())
    }

    /// Estimated rating for `user_id` on `platform`.
    pub fn impute_rating(&self, user_id: &str, platform: &str) -> Result<f64> {
        let user = self.require_user(user_id)?;
        self.imputer.impute(user, &self.registry, platform)
    }

    /// Score one course. Does not touch any user.
    pub fn score_course(&self, course: &Course) -> CourseBonus {
        self.scorer.score(course)
    }

    /// Replace a user's course bonus with the summed bonus of `courses`.
    pub fn record_courses(&mut self, user_id: &str, courses: &[Course]) -> Result<ProfileBonus> {
        let profile = self.scorer.score_profile(courses);
        let user = self
            .users
            .get_mut(user_id)
            .ok_or_else(|| EngineError::UnknownUser(user_id.to_string()))?;
        user.set_course_bonus(profile.total_bonus);

        tracing::debug!(
            user = user_id,
            courses = profile.course_count(),
            course_bonus = profile.total_bonus,
            "recorded courses"
        );
        Ok(profile)
    }

    /// Leaderboard by total rating. See [`rank`] for ordering.
    pub fn get_rankings(&self, top_n: Option<usize>) -> Vec<RankingEntry> {
        rank(self.users.values(), top_n)
    }

    /// Current weight of every registered platform.
    pub fn weights(&self) -> &WeightMap {
        &self.weights
    }

    pub fn weight(&self, platform: &str) -> Option<f64> {
        self.weights.get(platform).copied()
    }

    pub fn platform(&self, name: &str) -> Option<&Platform> {
        self.registry.get(name)
    }

    pub fn platforms(&self) -> impl Iterator<Item = &Platform> {
        self.registry.iter()
    }

    pub fn user(&self, user_id: &str) -> Option<&UserProfile> {
        self.users.get(user_id)
    }

    pub fn users(&self) -> impl Iterator<Item = &UserProfile> {
        self.users.values()
    }

    pub fn scorer(&self) -> &CourseBonusScorer {
        &self.scorer
    }

    fn require_user(&self, user_id: &str) -> Result<&UserProfile> {
        self.users
            .get(user_id)
            .ok_or_else(|| EngineError::UnknownUser(user_id.to_string()))
    }

    /// Eager, population-wide refresh: O(users × platforms).
    fn recompute(&mut self) {
        self.weights = self.weight_engine.recompute_weights(&self.registry);
        for user in self.users.values_mut() {
            let unified = self
                .calculator
                .unified_rating(user, &self.registry, &self.weights);
            user.set_unified_rating(unified);
        }
        tracing::debug!(
            platforms = self.weights.len(),
            users = self.users.len(),
            "recomputed weights and unified ratings"
        );
    }
}
