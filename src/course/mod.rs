pub mod duration;
pub mod profile;
pub mod scorer;
pub mod types;

pub use duration::{CourseDuration, DurationUnit};
pub use profile::{CareerFocus, ProfileBonus, RankedTerm};
pub use scorer::CourseBonusScorer;
pub use types::{Course, CourseBonus, MAX_COURSE_BONUS};
