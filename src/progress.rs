use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Stars earned for finishing a level in `moves_used` moves.
///
/// Three at or under the recorded optimum, two within two extra moves, one otherwise.
pub fn stars_for_moves(moves_used: usize, optimal_moves: usize) -> u8 {
    if moves_used <= optimal_moves {
        3
    } else if moves_used <= optimal_moves + 2 {
        2
    } else {
        1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Character {
    #[default]
    Mouse,
    Princess,
    Car,
    Cat,
    Robot,
}

/// What the player has achieved so far
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameProgress {
    pub unlocked_levels: Vec<u32>,
    pub level_stars: BTreeMap<u32, u8>,
    pub total_stars: u32,
    pub selected_character: Character,
}

impl Default for GameProgress {
    fn default() -> Self {
        GameProgress {
            unlocked_levels: vec![1],
            level_stars: BTreeMap::new(),
            total_stars: 0,
            selected_character: Character::default(),
        }
    }
}

impl GameProgress {
    /// Record a finished level. Only an improvement on the best result counts
    /// towards the total; the next level is unlocked either way.
    pub fn complete_level(&mut self, level_id: u32, stars: u8) {
        let current = self.level_stars.get(&level_id).copied().unwrap_or(0);
        let best = current.max(stars);
        self.total_stars += u32::from(best - current);
        self.level_stars.insert(level_id, best);

        let next = level_id + 1;
        if !self.unlocked_levels.contains(&next) {
            self.unlocked_levels.push(next);
        }
    }

    /// Back to a fresh player: only level 1, no stars, default character
    pub fn reset(&mut self) {
        *self = GameProgress::default();
    }

    pub fn is_level_unlocked(&self, level_id: u32) -> bool {
        self.unlocked_levels.contains(&level_id)
    }

    pub fn level_stars(&self, level_id: u32) -> u8 {
        self.level_stars.get(&level_id).copied().unwrap_or(0)
    }

    pub fn select_character(&mut self, character: Character) {
        self.selected_character = character;
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    #[error("failed to access progress file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to (de)serialize progress: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where progress lives between sessions
pub trait ProgressStore {
    fn load(&self) -> Result<GameProgress, ProgressError>;
    fn save(&self, progress: &GameProgress) -> Result<(), ProgressError>;
}

/// Progress kept as pretty-printed JSON on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }
}

impl ProgressStore for JsonFileStore {
    /// A missing file means a fresh player
    fn load(&self) -> Result<GameProgress, ProgressError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No progress at {}, starting fresh", self.path.display());
                return Ok(GameProgress::default());
            }
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&json).map_err(|e| {
            warn!("Progress file {} is corrupt: {}", self.path.display(), e);
            e.into()
        })
    }

    fn save(&self, progress: &GameProgress) -> Result<(), ProgressError> {
        let json = serde_json::to_string_pretty(progress)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Progress that lives only as long as the store does
#[derive(Debug, Default)]
pub struct MemoryStore {
    progress: RefCell<Option<GameProgress>>,
}

impl ProgressStore for MemoryStore {
    fn load(&self) -> Result<GameProgress, ProgressError> {
        Ok(self.progress.borrow().clone().unwrap_or_default())
    }

    fn save(&self, progress: &GameProgress) -> Result<(), ProgressError> {
        *self.progress.borrow_mut() = Some(progress.clone());
        Ok(())
    }
}
