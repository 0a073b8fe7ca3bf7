use crate::grid::{Cell, Grid, GridShapeError, Position};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const BUILTIN_LEVELS: &str = include_str!("../levels/levels.json");

/// How much help the player gets while solving a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelMode {
    /// Each arrow moves the character immediately
    Guided,
    /// The whole program is written before it runs
    Plan,
    /// Larger boards with coins and water
    Master,
}

/// A static level definition.
///
/// The JSON shape is the authored content format: camelCase keys, the grid as an
/// array of rows, `type` naming each cell's terrain. Deserializing always runs
/// [`Level::check`], so a malformed record never becomes a `Level`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "LevelRecord")]
pub struct Level {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub grid_size: i32,
    pub grid: Grid,
    pub start_position: Position,
    pub home_position: Position,
    pub mode: LevelMode,
    pub stars: u8,
    pub max_stars: u8,
    pub unlocked: bool,
    pub completed: bool,
    /// Authored claim about the shortest solution, in moves
    pub optimal_moves: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("failed to read level file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse level data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("level {id}: grid is not square: {source}")]
    NonSquareGrid { id: u32, source: GridShapeError },
    #[error("level {id}: gridSize is {declared} but the grid is {actual}x{actual}")]
    GridSizeMismatch { id: u32, declared: i32, actual: i32 },
    #[error("level {id}: start position {pos} is outside the grid")]
    StartOutOfBounds { id: u32, pos: Position },
    #[error("level {id}: home position {pos} is outside the grid")]
    HomeOutOfBounds { id: u32, pos: Position },
    #[error("level {id}: start and home are both at {pos}")]
    StartIsHome { id: u32, pos: Position },
    #[error("level {id}: home cell at {pos} is not walkable")]
    HomeNotWalkable { id: u32, pos: Position },
    #[error("level id {id} appears more than once")]
    DuplicateId { id: u32 },
}

/// Level as written in the content files, before the grid shape is checked
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LevelRecord {
    id: u32,
    name: String,
    #[serde(default)]
    description: String,
    grid_size: i32,
    grid: Vec<Vec<Cell>>,
    start_position: Position,
    home_position: Position,
    mode: LevelMode,
    #[serde(default)]
    stars: u8,
    max_stars: u8,
    #[serde(default)]
    unlocked: bool,
    #[serde(default)]
    completed: bool,
    optimal_moves: usize,
}

impl TryFrom<LevelRecord> for Level {
    type Error = LevelError;

    fn try_from(record: LevelRecord) -> Result<Self, Self::Error> {
        let grid = Grid::from_rows(record.grid).map_err(|source| LevelError::NonSquareGrid {
            id: record.id,
            source,
        })?;

        let level = Level {
            id: record.id,
            name: record.name,
            description: record.description,
            grid_size: record.grid_size,
            grid,
            start_position: record.start_position,
            home_position: record.home_position,
            mode: record.mode,
            stars: record.stars,
            max_stars: record.max_stars,
            unlocked: record.unlocked,
            completed: record.completed,
            optimal_moves: record.optimal_moves,
        };
        level.check()?;
        Ok(level)
    }
}

impl Level {
    /// Build a level around a grid with default metadata. Mostly useful for tests and tools.
    pub fn new(id: u32, grid: Grid, start: Position, home: Position, optimal_moves: usize) -> Self {
        Level {
            id,
            name: format!("Level {}", id),
            description: String::new(),
            grid_size: grid.size,
            grid,
            start_position: start,
            home_position: home,
            mode: LevelMode::Guided,
            stars: 0,
            max_stars: 3,
            unlocked: id == 1,
            completed: false,
            optimal_moves,
        }
    }

    /// Reject malformed level records.
    ///
    /// This covers the shape only. Whether home is actually reachable is left to
    /// the validator, since an unsolvable level must not keep the others from loading.
    pub fn check(&self) -> Result<(), LevelError> {
        let actual = self.grid.size;
        if self.grid_size != actual {
            return Err(LevelError::GridSizeMismatch {
                id: self.id,
                declared: self.grid_size,
                actual,
            });
        }
        if !self.grid.in_bounds(self.start_position) {
            return Err(LevelError::StartOutOfBounds {
                id: self.id,
                pos: self.start_position,
            });
        }
        if !self.grid.in_bounds(self.home_position) {
            return Err(LevelError::HomeOutOfBounds {
                id: self.id,
                pos: self.home_position,
            });
        }
        if self.start_position == self.home_position {
            return Err(LevelError::StartIsHome {
                id: self.id,
                pos: self.home_position,
            });
        }
        if !self.grid.is_walkable(self.home_position) {
            return Err(LevelError::HomeNotWalkable {
                id: self.id,
                pos: self.home_position,
            });
        }
        Ok(())
    }
}

/// Parse an ordered level set from JSON and check every level
pub fn load_levels_from_str(json: &str) -> Result<Vec<Level>, LevelError> {
    let records: Vec<LevelRecord> = serde_json::from_str(json)?;

    let mut levels = Vec::with_capacity(records.len());
    let mut seen = HashSet::new();
    for record in records {
        let level = Level::try_from(record)?;
        if !seen.insert(level.id) {
            return Err(LevelError::DuplicateId { id: level.id });
        }
        levels.push(level);
    }

    debug!("Loaded {} levels", levels.len());
    Ok(levels)
}

/// Load an ordered level set from a JSON file
pub fn load_levels_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Level>, LevelError> {
    let path = path.as_ref();
    debug!("Reading levels from {}", path.display());
    let json = fs::read_to_string(path)?;
    load_levels_from_str(&json)
}

/// The ten levels shipped with the game
pub fn builtin_levels() -> Result<Vec<Level>, LevelError> {
    load_levels_from_str(BUILTIN_LEVELS)
}
