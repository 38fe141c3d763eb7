pub mod formatter;

pub use formatter::{
    format_course_bonus, format_profile, format_rankings_table, format_score, format_tsv,
    should_use_colors,
};
