use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use kodaventyret::config::Config;
use kodaventyret::hint::{get_hint, Language};
use kodaventyret::level::{builtin_levels, load_levels_from_file, Level};
use kodaventyret::progress::{stars_for_moves, JsonFileStore, ProgressStore};
use kodaventyret::validator::{log_summary, validate_all, Outcome};
use log::{info, warn};
use std::path::PathBuf;
use std::process::ExitCode;

/// Developer tools for the level set
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check every level for a path home and correct optimalMoves
    Validate {
        /// Level JSON to check instead of the configured set
        #[arg(short, long)]
        levels: Option<PathBuf>,
    },
    /// Print the hint a stuck player would get
    Hint {
        /// Level id
        id: u32,

        #[arg(short, long)]
        levels: Option<PathBuf>,

        /// Overrides the configured language
        #[arg(long, value_enum)]
        language: Option<HintLanguage>,
    },
    /// Record a finished level in the progress file
    Complete {
        /// Level id
        id: u32,

        /// Moves the player used
        moves: usize,
    },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum HintLanguage {
    En,
    Sv,
}

impl From<HintLanguage> for Language {
    fn from(language: HintLanguage) -> Self {
        match language {
            HintLanguage::En => Language::En,
            HintLanguage::Sv => Language::Sv,
        }
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let loaded = Config::load(&args.config);
    let filter = if args.debug {
        "debug".to_string()
    } else {
        loaded
            .as_ref()
            .map(|c| c.logging.level.clone())
            .unwrap_or_else(|_| "info".to_string())
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(filter)).init();

    let config = loaded.unwrap_or_else(|e| {
        warn!("{}", e);
        warn!("Using default configuration");
        Config::default()
    });

    match args.command {
        Command::Validate { levels } => {
            let levels = load_levels(levels.as_ref(), &config)?;
            let summary = validate_all(&levels);
            log_summary(&summary);

            for report in summary.metadata_mismatches() {
                if let Outcome::RecordedTooHigh { shortest, recorded }
                | Outcome::RecordedBelowShortest { shortest, recorded } = report.outcome
                {
                    println!(
                        "Level {} ({}): optimalMoves is {}, shortest path is {} moves",
                        report.level_id, report.name, recorded, shortest
                    );
                }
            }
            for report in summary.unsolvable() {
                println!("Level {} ({}): UNSOLVABLE", report.level_id, report.name);
            }

            if summary.all_solvable() {
                println!("All {} levels are solvable", summary.reports.len());
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Hint {
            id,
            levels,
            language,
        } => {
            let levels = load_levels(levels.as_ref(), &config)?;
            let level = find_level(&levels, id)?;
            let language = language.map(Language::from).unwrap_or(config.hints.language);

            match get_hint(level) {
                Some(hint) => println!("{}", hint.message(language)),
                None => println!("No hint available"),
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Complete { id, moves } => {
            let levels = load_levels(None, &config)?;
            let level = find_level(&levels, id)?;
            let stars = stars_for_moves(moves, level.optimal_moves);

            let store = JsonFileStore::new(&config.progress.path);
            let mut progress = store
                .load()
                .with_context(|| format!("Failed to load progress from {}", config.progress.path))?;
            progress.complete_level(id, stars);
            store
                .save(&progress)
                .with_context(|| format!("Failed to save progress to {}", config.progress.path))?;

            info!("Level {} completed in {} moves", id, moves);
            println!(
                "Level {}: {} of {} stars (total {})",
                id, stars, level.max_stars, progress.total_stars
            );
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Command-line path wins over the configured one; otherwise the built-in set
fn load_levels(path: Option<&PathBuf>, config: &Config) -> Result<Vec<Level>> {
    let path = path.cloned().or_else(|| config.levels.path.as_ref().map(PathBuf::from));
    match path {
        Some(path) => load_levels_from_file(&path)
            .with_context(|| format!("Failed to load levels from {}", path.display())),
        None => builtin_levels().context("Built-in levels are malformed"),
    }
}

fn find_level(levels: &[Level], id: u32) -> Result<&Level> {
    match levels.iter().find(|l| l.id == id) {
        Some(level) => Ok(level),
        None => bail!("No level with id {}", id),
    }
}
