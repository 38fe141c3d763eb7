use super::scorer::CourseBonusScorer;
use super::types::{Course, CourseBonus};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

const TOP_SKILL_LIMIT: usize = 10;
const TOP_FIELD_LIMIT: usize = 5;
const CAREER_FOCUS_LIMIT: usize = 3;

/// Field keys that indicate a broader career area.
const CAREER_AREAS: &[(&str, &str)] = &[
    ("artificial intelligence", "AI & Machine Learning"),
    ("machine learning", "AI & Machine Learning"),
    ("deep learning", "AI & Machine Learning"),
    ("data science", "Data Science & Analytics"),
    ("data analytics", "Data Science & Analytics"),
    ("programming", "Software Development"),
    ("software engineering", "Software Development"),
    ("web development", "Web & Mobile Development"),
    ("mobile development", "Web & Mobile Development"),
    ("cloud computing", "Cloud & DevOps"),
    ("devops", "Cloud & DevOps"),
    ("cybersecurity", "Cybersecurity"),
    ("information security", "Cybersecurity"),
    ("business", "Business & Management"),
    ("management", "Business & Management"),
    ("finance", "Finance & Economics"),
    ("economics", "Finance & Economics"),
    ("marketing", "Marketing & Sales"),
    ("sales", "Marketing & Sales"),
    ("design", "Design & UX/UI"),
    ("ux", "Design & UX/UI"),
    ("ui", "Design & UX/UI"),
];

/// A skill or field with how often it appears across a profile's courses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedTerm {
    pub name: String,
    pub count: usize,
    pub value: f64,
    /// `value * count`
    pub total_value: f64,
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerFocus {
    pub area: String,
    pub strength: usize,
}

/// All course bonuses of one profile plus reporting metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileBonus {
    /// Highest bonus first
    pub courses: Vec<CourseBonus>,
    pub total_bonus: f64,
    pub average_bonus: f64,
    pub max_bonus: f64,
    pub top_skills: Vec<RankedTerm>,
    pub top_fields: Vec<RankedTerm>,
    pub career_focus: Vec<CareerFocus>,
}

impl ProfileBonus {
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }
}

impl CourseBonusScorer {
    /// Score every course of a profile and summarize them.
    pub fn score_profile(&self, courses: &[Course]) -> ProfileBonus {
        let mut scored: Vec<CourseBonus> = courses.iter().map(|c| self.score(c)).collect();

        let total_bonus: f64 = scored.iter().map(|b| b.total).sum();
        let (average_bonus, max_bonus) = if scored.is_empty() {
            (0.0, 0.0)
        } else {
            (
                total_bonus / scored.len() as f64,
                scored.iter().map(|b| b.total).fold(f64::MIN, f64::max),
            )
        };

        scored.sort_by(|a, b| b.total.total_cmp(&a.total));

        let top_skills = self.rank_skills(&scored);
        let top_fields = self.rank_fields(&scored);
        let career_focus = career_focus(&scored);

        tracing::debug!(
            courses = scored.len(),
            total_bonus,
            "scored profile"
        );

        ProfileBonus {
            courses: scored,
            total_bonus,
            average_bonus,
            max_bonus,
            top_skills,
            top_fields,
            career_focus,
        }
    }

    fn rank_skills(&self, scored: &[CourseBonus]) -> Vec<RankedTerm> {
        let mut terms = TermCounter::default();
        for bonus in scored {
            for skill in bonus.skill_names.iter().filter(|s| !s.trim().is_empty()) {
                let value = self.tables().skill_score(skill);
                terms.add(skill.trim(), value, &bonus.title);
            }
        }
        terms.into_ranked(TOP_SKILL_LIMIT)
    }

    fn rank_fields(&self, scored: &[CourseBonus]) -> Vec<RankedTerm> {
        let mut terms = TermCounter::default();
        for bonus in scored {
            if let Some(field) = &bonus.matched_field {
                terms.add(field, bonus.field, &bonus.title);
            }
        }
        terms.into_ranked(TOP_FIELD_LIMIT)
    }
}

/// Groups terms case-insensitively, keeping the first spelling seen.
#[derive(Default)]
struct TermCounter {
    order: Vec<String>,
    terms: HashMap<String, RankedTerm>,
}

impl TermCounter {
    fn add(&mut self, name: &str, value: f64, course_title: &str) {
        let key = name.to_lowercase();
        let term = self.terms.entry(key.clone()).or_insert_with(|| {
            self.order.push(key);
            RankedTerm {
                name: name.to_string(),
                count: 0,
                value,
                total_value: 0.0,
                courses: Vec::new(),
            }
        });
        term.count += 1;
        term.total_value = term.value * term.count as f64;
        term.courses.push(course_title.to_string());
    }

    fn into_ranked(mut self, limit: usize) -> Vec<RankedTerm> {
        let mut ranked: Vec<RankedTerm> = self
            .order
            .iter()
            .filter_map(|key| self.terms.remove(key))
            .collect();
        ranked.sort_by(|a, b| {
            b.total_value
                .total_cmp(&a.total_value)
                .then_with(|| a.name.cmp(&b.name))
        });
        ranked.truncate(limit);
        ranked
    }
}

fn career_focus(scored: &[CourseBonus]) -> Vec<CareerFocus> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for field in scored.iter().filter_map(|b| b.matched_field.as_deref()) {
        if let Some((_, area)) = CAREER_AREAS.iter().find(|(key, _)| *key == field) {
            *counts.entry(*area).or_default() += 1;
        }
    }

    let mut focus: Vec<CareerFocus> = counts
        .into_iter()
        .map(|(area, strength)| CareerFocus {
            area: area.to_string(),
            strength,
        })
        .collect();
    focus.sort_by(|a, b| match b.strength.cmp(&a.strength) {
        Ordering::Equal => a.area.cmp(&b.area),
        other => other,
    });
    focus.truncate(CAREER_FOCUS_LIMIT);
    focus
}
