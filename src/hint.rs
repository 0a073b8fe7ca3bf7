use crate::level::Level;
use crate::pathfinding::{find_path, Direction};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Language the hint is phrased in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Sv,
}

/// A nudge towards the first move of the shortest path.
///
/// Only the first move is ever revealed; the rest of the route is left to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub direction: Direction,
}

impl Hint {
    pub fn message(&self, language: Language) -> String {
        match language {
            Language::En => format!("Try going {} first!", self.direction),
            Language::Sv => {
                let word = match self.direction {
                    Direction::Up => "upp",
                    Direction::Down => "ned",
                    Direction::Left => "vänster",
                    Direction::Right => "höger",
                };
                format!("Prova att gå {} först!", word)
            }
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message(Language::En))
    }
}

/// Hint for the level as it stands, or `None` if there is no move to suggest
pub fn get_hint(level: &Level) -> Option<Hint> {
    let path = find_path(level)?;
    if path.len() < 2 {
        return None;
    }
    Direction::between(path[0], path[1]).map(|direction| Hint { direction })
}
