pub mod storage;
pub mod types;

pub use storage::{apply_roster, load_courses, load_roster, save_report};
pub use types::{RankingReport, Roster, StatsUpdate};
