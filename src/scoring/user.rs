use serde::Serialize;
use std::collections::BTreeMap;

/// One ranked person and their derived scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    pub user_id: String,
    /// Raw rating per platform name
    pub platform_ratings: BTreeMap<String, f64>,
    pub unified_rating: f64,
    pub course_bonus: f64,
    pub total_rating: f64,
}

impl UserProfile {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            platform_ratings: BTreeMap::new(),
            unified_rating: 0.0,
            course_bonus: 0.0,
            total_rating: 0.0,
        }
    }

    pub fn has_ratings(&self) -> bool {
        !self.platform_ratings.is_empty()
    }

    pub(crate) fn set_unified_rating(&mut self, unified_rating: f64) {
        self.unified_rating = unified_rating;
        self.total_rating = self.unified_rating + self.course_bonus;
    }

    pub(crate) fn set_course_bonus(&mut self, course_bonus: f64) {
        self.course_bonus = course_bonus;
        self.total_rating = self.unified_rating + self.course_bonus;
    }
}
