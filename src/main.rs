use clap::{Parser, Subcommand, ValueEnum};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use unirank::course::ProfileBonus;
use unirank::config::{build_engine, load_config, validate_config};
use unirank::roster::{apply_roster, load_courses, load_roster, save_report, RankingReport};
use unirank::RankingEngine;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
enum OutputFormat {
    #[default]
    Table,
    Tsv,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank every user in a roster by total rating
    Rank {
        /// Roster YAML: users, platform updates and courses
        roster: PathBuf,

        /// Show only the first N users
        #[arg(short, long)]
        top: Option<usize>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Also write the full report as JSON to this path
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Score a YAML list of courses
    Course {
        courses: PathBuf,
    },
    /// Show one user's ratings and course profile
    Profile {
        roster: PathBuf,
        user: String,
    },
    /// Estimate a user's rating on a platform from their other ratings
    Impute {
        roster: PathBuf,
        user: String,
        platform: String,
    },
}

#[derive(Parser, Debug)]
#[command(name = "unirank")]
#[command(about = "Unified competitive programming and course rating CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/unirank/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "unirank=debug,warn" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Feed the roster file into the engine, exiting on failure.
fn load_session(
    engine: &mut RankingEngine,
    roster_path: &Path,
) -> BTreeMap<String, ProfileBonus> {
    let roster = match load_roster(roster_path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Roster error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    match apply_roster(engine, &roster) {
        Ok(profiles) => profiles,
        Err(e) => {
            eprintln!("Roster error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let start_time = Instant::now();

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate config at startup
    if let Err(errors) = validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let mut engine = match build_engine(&config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let use_colors = unirank::output::should_use_colors();

    match cli.command {
        Commands::Rank {
            roster,
            top,
            format,
            save,
        } => {
            let profiles = load_session(&mut engine, &roster);
            let rankings = engine.get_rankings(top);

            match format {
                OutputFormat::Table => {
                    println!("{}", unirank::output::format_rankings_table(&rankings, use_colors));
                }
                OutputFormat::Tsv => {
                    let output = unirank::output::format_tsv(&rankings);
                    if !output.is_empty() {
                        println!("{}", output);
                    }
                }
                OutputFormat::Json => match serde_json::to_string_pretty(&rankings) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Failed to serialize rankings: {}", e);
                        std::process::exit(EXIT_FAILURE);
                    }
                },
            }

            if let Some(path) = save {
                let report = RankingReport::new(engine.weights().clone(), rankings, profiles);
                if let Err(e) = save_report(&path, &report) {
                    eprintln!("Failed to save report: {:#}", e);
                    std::process::exit(EXIT_FAILURE);
                }
            }

            if cli.verbose {
                eprintln!();
                eprintln!(
                    "Total: {} users in {:?}",
                    engine.users().count(),
                    start_time.elapsed()
                );
            }
        }
        Commands::Course { courses } => {
            let courses = match load_courses(&courses) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Course error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            let profile = engine.scorer().score_profile(&courses);
            for bonus in &profile.courses {
                println!("{}", unirank::output::format_course_bonus(bonus, use_colors));
                println!();
            }
            println!(
                "Total bonus: {}",
                unirank::output::format_score(profile.total_bonus)
            );
        }
        Commands::Profile { roster, user } => {
            let profiles = load_session(&mut engine, &roster);
            let Some(profile) = engine.user(&user) else {
                eprintln!("Unknown user: {}", user);
                std::process::exit(EXIT_INPUT);
            };
            println!(
                "{}",
                unirank::output::format_profile(profile, profiles.get(&user), use_colors)
            );
        }
        Commands::Impute {
            roster,
            user,
            platform,
        } => {
            load_session(&mut engine, &roster);
            match engine.impute_rating(&user, &platform) {
                Ok(rating) => println!("{}", unirank::output::format_score(rating)),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(EXIT_INPUT);
                }
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
