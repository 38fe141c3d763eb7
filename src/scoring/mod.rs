pub mod config;
pub mod engine;
pub mod impute;
pub mod ranking;
pub mod unified;
pub mod user;
pub mod validation;

pub use config::*;
pub use engine::RankingEngine;
pub use impute::ImputationEngine;
pub use ranking::{rank, RankingEntry};
pub use unified::UnifiedScoreCalculator;
pub use user::UserProfile;
pub use validation::{validate_platforms, validate_weighting};
