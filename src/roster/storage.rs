use super::types::{RankingReport, Roster};
use crate::course::{Course, ProfileBonus};
use crate::scoring::RankingEngine;
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Load a roster from a YAML file.
pub fn load_roster(path: &Path) -> Result<Roster> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster at {}", path.display()))?;

    let roster: Roster = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse roster: invalid YAML in {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        users = roster.users.len(),
        updates = roster.updates.len(),
        "loaded roster"
    );
    Ok(roster)
}

/// Load a YAML list of courses.
pub fn load_courses(path: &Path) -> Result<Vec<Course>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read courses at {}", path.display()))?;

    serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse courses: invalid YAML in {}", path.display()))
}

/// Feed a roster into `engine`: platforms, then users, then every stats
/// update in order, then each user's courses.
///
/// Returns the course profile of every user that has courses.
pub fn apply_roster(
    engine: &mut RankingEngine,
    roster: &Roster,
) -> Result<BTreeMap<String, ProfileBonus>> {
    for platform in &roster.platforms {
        engine
            .register_platform(&platform.name, platform.max_rating)
            .with_context(|| format!("Failed to register platform {}", platform.name))?;
    }

    for user_id in &roster.users {
        if !engine.register_user(user_id) {
            tracing::warn!(user = %user_id, "user listed twice in roster");
        }
    }

    for (i, update) in roster.updates.iter().enumerate() {
        engine
            .update_platform_stats(
                &update.platform,
                update.difficulty,
                update.participation,
                update.ratings.iter().map(|(user, &rating)| (user.as_str(), rating)),
            )
            .with_context(|| format!("updates[{}] ({}) failed", i, update.platform))?;
    }

    let mut profiles = BTreeMap::new();
    for (user_id, courses) in &roster.courses {
        let profile = engine
            .record_courses(user_id, courses)
            .with_context(|| format!("Failed to record courses for {}", user_id))?;
        profiles.insert(user_id.clone(), profile);
    }

    Ok(profiles)
}

/// Save a ranking report as pretty JSON, atomically.
///
/// Uses atomic-write-file so a crash never leaves a half-written report.
pub fn save_report(path: &Path, report: &RankingReport) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, report).context("Failed to serialize report")?;

    file.commit()
        .with_context(|| format!("Failed to save report to {}", path.display()))?;

    tracing::info!(path = %path.display(), "saved ranking report");
    Ok(())
}
