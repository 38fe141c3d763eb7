use super::types::{Course, CourseBonus, MAX_COURSE_BONUS};
use crate::lookup::LookupTables;

/// How many of a course's best skills count towards the skills score.
pub const TOP_SKILLS: usize = 3;

/// Scores courses against a set of lookup tables.
#[derive(Debug, Clone)]
pub struct CourseBonusScorer {
    tables: LookupTables,
}

impl CourseBonusScorer {
    pub fn new(tables: LookupTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &LookupTables {
        &self.tables
    }

    /// Score one course into a 0-45 point bonus with its breakdown.
    pub fn score(&self, course: &Course) -> CourseBonus {
        let institution = self
            .tables
            .institution_score(course.institution.as_deref().unwrap_or(""));

        let duration = course.resolved_duration().points();

        let subject = course.subject_text();
        let (field, matched_field) = match self.tables.best_field_match(&subject) {
            Some((key, score)) => (score, Some(key.to_string())),
            None => (self.tables.fields.default, None),
        };

        let skills = self.skills_score(&course.skills);

        let total = institution + duration + field + skills;
        let bonus = CourseBonus {
            title: course.title.clone(),
            institution_name: course.institution.clone(),
            institution,
            duration,
            field,
            skills,
            total,
            percentage: total / MAX_COURSE_BONUS * 100.0,
            matched_field,
            skill_names: course.skills.clone(),
        };

        tracing::debug!(
            title = %bonus.title,
            institution = bonus.institution,
            duration = bonus.duration,
            field = bonus.field,
            skills = bonus.skills,
            total = bonus.total,
            "scored course"
        );
        bonus
    }

    /// Average of the best three skill values, doubled onto a 0-20 scale.
    /// Blank entries are ignored; no skills scores zero.
    pub fn skills_score(&self, skills: &[String]) -> f64 {
        let mut scores: Vec<f64> = skills
            .iter()
            .filter(|s| !s.trim().is_empty())
            .map(|s| self.tables.skill_score(s))
            .collect();

        if scores.is_empty() {
            return 0.0;
        }

        scores.sort_by(|a, b| b.total_cmp(a));
        scores.truncate(TOP_SKILLS);
        let avg = scores.iter().sum::<f64>() / scores.len() as f64;
        avg * 2.0
    }
}
