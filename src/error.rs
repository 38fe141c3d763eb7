use thiserror::Error;

/// Errors raised by the ranking engine's boundary operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("platform '{0}' is not registered")]
    InvalidPlatform(String),

    #[error("user '{0}' is not registered")]
    UnknownUser(String),

    #[error("max rating for platform '{name}' must be a positive number, got {value}")]
    InvalidMaxRating { name: String, value: f64 },

    #[error("difficulty and participation for '{platform}' must be finite and non-negative, got {difficulty} and {participation}")]
    InvalidStats {
        platform: String,
        difficulty: f64,
        participation: f64,
    },

    #[error("rating {value} for user '{user_id}' on '{platform}' is not a finite non-negative number")]
    InvalidRating {
        platform: String,
        user_id: String,
        value: f64,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
