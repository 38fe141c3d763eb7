pub mod storage;
pub mod tables;

pub use storage::{load_embedded_tables, load_lookup_tables, parse_lookup_tables};
pub use tables::{validate_lookup_tables, LookupTables, ScoreTable, MAX_TABLE_SCORE};
