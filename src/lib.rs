pub mod config;
pub mod course;
pub mod error;
pub mod lookup;
pub mod output;
pub mod platform;
pub mod roster;
pub mod scoring;

pub use error::EngineError;
pub use scoring::RankingEngine;
