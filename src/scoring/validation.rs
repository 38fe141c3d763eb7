use super::config::WeightingConfig;
use crate::config::PlatformConfig;
use std::collections::HashSet;

/// Validate weighting configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_weighting(config: &WeightingConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for (name, value) in [
        ("difficulty_weight", config.difficulty_weight),
        ("participation_weight", config.participation_weight),
    ] {
        if let Some(v) = value {
            if !v.is_finite() || v < 0.0 {
                errors.push(format!("weighting.{}: must be non-negative, got {}", name, v));
            }
        }
    }

    if let Some(scale) = config.normalized_scale {
        if !scale.is_finite() || scale <= 0.0 {
            errors.push(format!(
                "weighting.normalized_scale: must be positive, got {}",
                scale
            ));
        }
    }

    if let Some(fraction) = config.imputation_fraction {
        if !(0.0..=1.0).contains(&fraction) {
            errors.push(format!(
                "weighting.imputation_fraction: must be between 0 and 1, got {}",
                fraction
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate the platform catalog: positive maxima, no duplicate names.
pub fn validate_platforms(platforms: &[PlatformConfig]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (i, platform) in platforms.iter().enumerate() {
        if platform.name.trim().is_empty() {
            errors.push(format!("platforms[{}].name: must not be empty", i));
        }
        if !platform.max_rating.is_finite() || platform.max_rating <= 0.0 {
            errors.push(format!(
                "platforms[{}].max_rating: must be positive, got {}",
                i, platform.max_rating
            ));
        }
        if !seen.insert(platform.name.as_str()) {
            errors.push(format!(
                "platforms[{}].name: duplicate platform '{}'",
                i, platform.name
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
