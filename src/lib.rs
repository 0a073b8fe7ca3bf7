pub mod config;
pub mod grid;
pub mod hint;
pub mod level;
pub mod pathfinding;
pub mod progress;
pub mod validator;

pub use grid::{Cell, CellKind, Grid, Position};
pub use hint::{get_hint, Hint, Language};
pub use level::{builtin_levels, Level, LevelError, LevelMode};
pub use pathfinding::{find_path, Direction};
pub use validator::{validate_all, validate_level, Outcome, ValidationSummary};
