use super::duration::CourseDuration;
use serde::{Deserialize, Serialize};

/// Highest bonus a single course can earn.
pub const MAX_COURSE_BONUS: f64 = 45.0;

/// A completed course as reported by an upstream collaborator.
///
/// Every field is optional in practice; anything missing falls back to the
/// lookup table defaults instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Course {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub institution: Option<String>,

    /// Free-form duration text, e.g. "6 weeks"
    #[serde(default)]
    pub duration: Option<String>,

    /// Pre-parsed duration; takes precedence over `duration` when present
    #[serde(default)]
    pub structured_duration: Option<CourseDuration>,

    /// Extra subject text matched alongside the title
    #[serde(default)]
    pub field: Option<String>,

    #[serde(default)]
    pub skills: Vec<String>,
}

impl Course {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_institution(mut self, institution: impl Into<String>) -> Self {
        self.institution = Some(institution.into());
        self
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    /// Structured duration if given, else parsed from the text.
    pub fn resolved_duration(&self) -> CourseDuration {
        self.structured_duration.unwrap_or_else(|| {
            self.duration
                .as_deref()
                .map(CourseDuration::parse)
                .unwrap_or_default()
        })
    }

    /// Text searched for field keywords.
    pub fn subject_text(&self) -> String {
        match self.field.as_deref().map(str::trim) {
            Some(field) if !field.is_empty() => format!("{} {}", self.title, field),
            _ => self.title.clone(),
        }
    }
}

/// Per-course score breakdown. `total` is always the exact sum of the parts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseBonus {
    pub title: String,
    pub institution_name: Option<String>,
    pub institution: f64,
    pub duration: f64,
    pub field: f64,
    pub skills: f64,
    pub total: f64,
    pub percentage: f64,
    /// Field table key that produced the field score, if any matched
    pub matched_field: Option<String>,
    pub skill_names: Vec<String>,
}
