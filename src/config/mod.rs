mod schema;

pub use schema::{default_platforms, Config, PlatformConfig};

use crate::lookup::load_lookup_tables;
use crate::scoring::{validate_platforms, validate_weighting, RankingEngine};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/unirank/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("unirank"))
}

/// Get the default config file path (~/.config/unirank/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   (~/.config/unirank/config.yaml) and falls back to built-in defaults when
///   that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            path
        }
        None => match get_config_path() {
            Some(path) if path.exists() => path,
            _ => {
                tracing::debug!("no config file, using built-in defaults");
                return Ok(Config::default());
            }
        },
    };

    read_config(&config_path)
}

fn read_config(config_path: &Path) -> Result<Config> {
    let config_content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!(
            "Failed to parse config: invalid YAML in {}",
            config_path.display()
        )
    })?;

    tracing::info!(path = %config_path.display(), "loaded config");
    Ok(config)
}

/// Check the whole config, collecting every problem.
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    if let Err(e) = validate_weighting(&config.effective_weighting()) {
        errors.extend(e);
    }
    if let Err(e) = validate_platforms(&config.effective_platforms()) {
        errors.extend(e);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Build an engine with the configured tables and platforms registered.
pub fn build_engine(config: &Config) -> Result<RankingEngine> {
    let tables = load_lookup_tables(config.lookup_tables.as_deref())?;
    let mut engine = RankingEngine::new(&config.effective_weighting(), tables);

    for platform in config.effective_platforms() {
        engine
            .register_platform(&platform.name, platform.max_rating)
            .with_context(|| format!("Failed to register platform {}", platform.name))?;
    }
    Ok(engine)
}
