use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::course::{CourseBonus, ProfileBonus};
use crate::scoring::{RankingEntry, UserProfile};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score with one decimal, dropping a trailing ".0" (2100, 43.7)
pub fn format_score(score: f64) -> String {
    let formatted = format!("{:.1}", score);
    match formatted.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => formatted,
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format rankings as a table with columns: Index, Total, Unified, Bonus, User
/// No headers. Index column is right-aligned with a trailing dot.
pub fn format_rankings_table(entries: &[RankingEntry], use_colors: bool) -> String {
    if entries.is_empty() {
        return "No users ranked.".to_string();
    }

    let term_width = get_terminal_width();

    let index_width = 4;
    let score_width = 7;
    let separator = "  ";

    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let index_str = format!("{:>3}.", idx + 1);
            let total = format!("{:>width$}", format_score(entry.total_rating), width = score_width);
            let unified = format!("{:>width$}", format_score(entry.unified_rating), width = score_width);
            let bonus = format!("{:>width$}", format!("+{}", format_score(entry.course_bonus)), width = score_width);

            let fixed_width = index_width + 1 + (score_width + separator.len()) * 3;
            let user = match term_width {
                Some(width) if width > fixed_width + 10 => {
                    truncate_name(&entry.user_id, width - fixed_width)
                }
                // Very narrow terminal
                Some(_) => truncate_name(&entry.user_id, 20),
                None => entry.user_id.clone(),
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    total.bold(),
                    separator,
                    unified.cyan(),
                    separator,
                    bonus.green(),
                    separator,
                    user.yellow()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str, total, separator, unified, separator, bonus, separator, user
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format rankings as tab-separated values for scripting
/// Columns: rank, user_id, total, unified, bonus (no headers, no colors)
pub fn format_tsv(entries: &[RankingEntry]) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            format!(
                "{}\t{}\t{:.2}\t{:.2}\t{:.2}",
                idx + 1,
                entry.user_id,
                entry.total_rating,
                entry.unified_rating,
                entry.course_bonus
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format one course's score breakdown (multi-line)
pub fn format_course_bonus(bonus: &CourseBonus, use_colors: bool) -> String {
    let institution = bonus.institution_name.as_deref().unwrap_or("(none)");
    let field = bonus.matched_field.as_deref().unwrap_or("(no match)");
    let skills = if bonus.skill_names.is_empty() {
        "(none)".to_string()
    } else {
        bonus.skill_names.join(", ")
    };

    let title = if use_colors {
        bonus.title.bold().to_string()
    } else {
        bonus.title.clone()
    };
    let total = format!(
        "{} / 45 ({}%)",
        format_score(bonus.total),
        format_score(bonus.percentage)
    );
    let total = if use_colors {
        total.green().to_string()
    } else {
        total
    };

    format!(
        "{}\n  Institution: {} ({})\n  Duration: {}\n  Field: {} ({})\n  Skills: {} ({})\n  Total: {}",
        title,
        format_score(bonus.institution),
        institution,
        format_score(bonus.duration),
        format_score(bonus.field),
        field,
        format_score(bonus.skills),
        skills,
        total
    )
}

/// Format a user's ratings and, when present, their course profile
pub fn format_profile(
    user: &UserProfile,
    courses: Option<&ProfileBonus>,
    use_colors: bool,
) -> String {
    let mut lines = Vec::new();

    let header = if use_colors {
        user.user_id.bold().to_string()
    } else {
        user.user_id.clone()
    };
    lines.push(header);
    lines.push(format!(
        "  Total: {}  (unified {} + bonus {})",
        format_score(user.total_rating),
        format_score(user.unified_rating),
        format_score(user.course_bonus)
    ));

    if user.platform_ratings.is_empty() {
        lines.push("  Ratings: (none)".to_string());
    } else {
        lines.push("  Ratings:".to_string());
        for (platform, rating) in &user.platform_ratings {
            let name = if use_colors {
                platform.cyan().to_string()
            } else {
                platform.clone()
            };
            lines.push(format!("    {}: {}", name, format_score(*rating)));
        }
    }

    if let Some(profile) = courses {
        lines.push(format!(
            "  Courses: {} (avg {}, best {})",
            profile.course_count(),
            format_score(profile.average_bonus),
            format_score(profile.max_bonus)
        ));
        for bonus in &profile.courses {
            lines.push(format!("    {:>5}  {}", format_score(bonus.total), bonus.title));
        }
        if !profile.top_skills.is_empty() {
            let skills: Vec<String> = profile
                .top_skills
                .iter()
                .map(|s| format!("{} x{}", s.name, s.count))
                .collect();
            lines.push(format!("  Top skills: {}", skills.join(", ")));
        }
        if !profile.top_fields.is_empty() {
            let fields: Vec<&str> = profile.top_fields.iter().map(|f| f.name.as_str()).collect();
            lines.push(format!("  Top fields: {}", fields.join(", ")));
        }
        if !profile.career_focus.is_empty() {
            let areas: Vec<&str> = profile.career_focus.iter().map(|c| c.area.as_str()).collect();
            lines.push(format!("  Career focus: {}", areas.join(", ")));
        }
    }

    lines.join("\n")
}
