use serde::{Deserialize, Serialize};

/// Common scale every platform rating is mapped onto.
pub const NORMALIZED_SCALE: f64 = 3000.0;

/// Linear rescaling between a platform's `[0, max_rating]` and `[0, scale]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingNormalizer {
    pub scale: f64,
}

impl Default for RatingNormalizer {
    fn default() -> Self {
        Self {
            scale: NORMALIZED_SCALE,
        }
    }
}

impl RatingNormalizer {
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }

    pub fn normalize(&self, rating: f64, max_rating: f64) -> f64 {
        rating / max_rating * self.scale
    }

    pub fn denormalize(&self, normalized: f64, max_rating: f64) -> f64 {
        normalized / self.scale * max_rating
    }
}
