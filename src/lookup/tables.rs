use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One scored reference table with a fallback for unlisted keys.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoreTable {
    /// Score used when a key is missing or blank
    pub default: f64,

    #[serde(default)]
    pub scores: BTreeMap<String, f64>,
}

impl ScoreTable {
    pub fn new(default: f64) -> Self {
        Self {
            default,
            scores: BTreeMap::new(),
        }
    }

    /// Exact lookup, falling back to the table default.
    pub fn get_or_default(&self, key: &str) -> f64 {
        self.scores.get(key).copied().unwrap_or(self.default)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Lowercase every key. When two keys collapse into one, the later one
    /// in key order wins.
    pub(crate) fn lowercase_keys(&mut self) {
        let scores = std::mem::take(&mut self.scores);
        self.scores = scores
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();
    }
}

/// Reference data for the course bonus scorer.
///
/// Institution names are matched exactly (after trimming), field keys are
/// matched as substrings of a lowercased course title, and skills are matched
/// case-insensitively.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LookupTables {
    /// Revision of the data asset the tables were loaded from
    #[serde(default)]
    pub version: u32,

    pub institutions: ScoreTable,
    pub fields: ScoreTable,
    pub skills: ScoreTable,
}

impl LookupTables {
    /// Institution reputation, 0-10. Unknown or blank names get the default.
    pub fn institution_score(&self, institution: &str) -> f64 {
        let name = institution.trim();
        if name.is_empty() {
            return self.institutions.default;
        }
        self.institutions.get_or_default(name)
    }

    /// Market value of one skill, 0-10.
    pub fn skill_score(&self, skill: &str) -> f64 {
        self.skills.get_or_default(&skill.trim().to_lowercase())
    }

    /// Highest-scoring field key contained in `title`.
    ///
    /// Every matching key is considered and the best score wins, so
    /// "python for machine learning" resolves to "machine learning" rather than
    /// whichever key happens to be checked first. Equal scores prefer the
    /// longer key, then the lexicographically smaller one.
    pub fn best_field_match(&self, title: &str) -> Option<(&str, f64)> {
        let title = title.to_lowercase();
        let mut best: Option<(&str, f64)> = None;

        for (key, &score) in &self.fields.scores {
            if key.is_empty() || !title.contains(key.as_str()) {
                continue;
            }
            best = match best {
                Some((best_key, best_score))
                    if best_score > score
                        || (best_score == score && best_key.len() >= key.len()) =>
                {
                    Some((best_key, best_score))
                }
                _ => Some((key.as_str(), score)),
            };
        }

        best
    }

    /// Field relevance of a course title, 0-10.
    pub fn field_score(&self, title: &str) -> f64 {
        self.best_field_match(title)
            .map(|(_, score)| score)
            .unwrap_or(self.fields.default)
    }

    pub(crate) fn normalize_keys(&mut self) {
        self.fields.lowercase_keys();
        self.skills.lowercase_keys();
    }
}

/// Upper bound of every table score.
pub const MAX_TABLE_SCORE: f64 = 10.0;

/// Check that every default and score lies in [0, 10].
/// Returns all validation errors at once (not just the first).
pub fn validate_lookup_tables(tables: &LookupTables) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for (section, table) in [
        ("institutions", &tables.institutions),
        ("fields", &tables.fields),
        ("skills", &tables.skills),
    ] {
        let entries = std::iter::once(("default".to_string(), table.default)).chain(
            table
                .scores
                .iter()
                .map(|(key, &score)| (format!("scores.{:?}", key), score)),
        );
        for (name, value) in entries {
            if !(0.0..=MAX_TABLE_SCORE).contains(&value) {
                errors.push(format!(
                    "{}.{}: must be between 0 and {}, got {}",
                    section, name, MAX_TABLE_SCORE, value
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
