use crate::grid::Position;
use crate::level::Level;
use crate::pathfinding::{find_path, format_path};
use log::{error, info, warn};

/// What the solver found for one level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Home cannot be reached from the start
    Unsolvable,
    /// Recorded optimal moves match the shortest path
    Optimal { moves: usize },
    /// A shorter path exists than the recorded optimal moves
    RecordedTooHigh { shortest: usize, recorded: usize },
    /// The recorded optimal moves cannot be achieved; the shortest path is longer
    RecordedBelowShortest { shortest: usize, recorded: usize },
}

impl Outcome {
    pub fn is_solvable(&self) -> bool {
        !matches!(self, Outcome::Unsolvable)
    }

    /// True when the authored optimal moves need correcting
    pub fn is_metadata_mismatch(&self) -> bool {
        matches!(
            self,
            Outcome::RecordedTooHigh { .. } | Outcome::RecordedBelowShortest { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelReport {
    pub level_id: u32,
    pub name: String,
    pub outcome: Outcome,
    /// The shortest path when one exists
    pub path: Option<Vec<Position>>,
}

impl LevelReport {
    /// Number of moves on the shortest path
    pub fn shortest_moves(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }
}

/// Reports for a whole level set, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    pub reports: Vec<LevelReport>,
}

impl ValidationSummary {
    pub fn all_solvable(&self) -> bool {
        self.reports.iter().all(|r| r.outcome.is_solvable())
    }

    pub fn unsolvable(&self) -> impl Iterator<Item = &LevelReport> {
        self.reports.iter().filter(|r| !r.outcome.is_solvable())
    }

    pub fn metadata_mismatches(&self) -> impl Iterator<Item = &LevelReport> {
        self.reports.iter().filter(|r| r.outcome.is_metadata_mismatch())
    }
}

/// Classify a single level
pub fn validate_level(level: &Level) -> LevelReport {
    let path = find_path(level);
    let recorded = level.optimal_moves;

    let outcome = match &path {
        None => Outcome::Unsolvable,
        Some(path) => {
            let shortest = path.len() - 1;
            if shortest == recorded {
                Outcome::Optimal { moves: shortest }
            } else if shortest < recorded {
                Outcome::RecordedTooHigh { shortest, recorded }
            } else {
                Outcome::RecordedBelowShortest { shortest, recorded }
            }
        }
    };

    LevelReport {
        level_id: level.id,
        name: level.name.clone(),
        outcome,
        path,
    }
}

/// Solve every level and compare its authored optimal moves with the shortest path.
///
/// Defects are reported, never raised: a broken level must not stop the rest of
/// the set from being played.
pub fn validate_all(levels: &[Level]) -> ValidationSummary {
    ValidationSummary {
        reports: levels.iter().map(validate_level).collect(),
    }
}

/// Write the summary to the log, one line per level plus a verdict
pub fn log_summary(summary: &ValidationSummary) {
    for report in &summary.reports {
        let path = report.path.as_deref().unwrap_or(&[]);
        match report.outcome {
            Outcome::Unsolvable => error!(
                "Level {} ({}): UNSOLVABLE, no path from start to home",
                report.level_id, report.name
            ),
            Outcome::Optimal { moves } => info!(
                "Level {} ({}): optimal, shortest path {} moves: {}",
                report.level_id,
                report.name,
                moves,
                format_path(path)
            ),
            Outcome::RecordedTooHigh { shortest, recorded } => warn!(
                "Level {} ({}): check optimalMoves, shortest path is {} moves but {} is recorded: {}",
                report.level_id,
                report.name,
                shortest,
                recorded,
                format_path(path)
            ),
            Outcome::RecordedBelowShortest { shortest, recorded } => warn!(
                "Level {} ({}): optimalMoves {} is unreachable, shortest path is {} moves: {}",
                report.level_id,
                report.name,
                recorded,
                shortest,
                format_path(path)
            ),
        }
    }

    if summary.all_solvable() {
        info!("All {} levels are solvable", summary.reports.len());
    } else {
        error!(
            "{} of {} levels are unsolvable",
            summary.unsolvable().count(),
            summary.reports.len()
        );
    }
}
