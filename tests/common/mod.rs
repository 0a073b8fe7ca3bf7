#![allow(dead_code)]

use kodaventyret::pathfinding::format_path;
use kodaventyret::{Cell, CellKind, Grid, Level, Position};

/// Build a grid from one string per row, cells separated by whitespace.
///
/// `P` path, `G` grass, `W` water, `H` home, `C` path with a coin,
/// `O` path with an obstacle, `X` obstacle terrain without the flag.
pub fn grid_from_rows(rows: &[&str]) -> Grid {
    let cells: Vec<Vec<Cell>> = rows
        .iter()
        .map(|row| row.split_whitespace().map(cell_from_char).collect())
        .collect();
    Grid::from_rows(cells).expect("test grid must be square")
}

fn cell_from_char(token: &str) -> Cell {
    match token {
        "P" => Cell::new(CellKind::Path),
        "G" => Cell::new(CellKind::Grass),
        "W" => Cell::new(CellKind::Water),
        "H" => Cell::new(CellKind::Home),
        "C" => Cell::new(CellKind::Path).with_coin(),
        "O" => Cell::new(CellKind::Path).with_obstacle(),
        "X" => Cell::new(CellKind::Obstacle),
        other => panic!("unknown cell token {:?}", other),
    }
}

/// Level around an ASCII grid
pub fn level_from_rows(rows: &[&str], start: (i32, i32), home: (i32, i32), optimal_moves: usize) -> Level {
    Level::new(
        1,
        grid_from_rows(rows),
        Position::new(start.0, start.1),
        Position::new(home.0, home.1),
        optimal_moves,
    )
}

/// The 3x3 first level
pub fn first_steps_level() -> Level {
    level_from_rows(&["G P H", "G P G", "P P G"], (0, 2), (2, 0), 4)
}

/// Visualize a path on a level
pub fn visualize_path(level: &Level, path: &[Position]) -> String {
    let mut result = String::new();
    result.push_str(&format!("\nPath: {}\n", format_path(path)));
    result.push_str(&format!("Length: {} moves\n\n", path.len().saturating_sub(1)));

    for y in 0..level.grid.size {
        for x in 0..level.grid.size {
            let pos = Position::new(x, y);
            let symbol = if pos == level.start_position {
                'S'
            } else if pos == level.home_position {
                'H'
            } else if path.contains(&pos) {
                '*'
            } else if !level.grid.is_walkable(pos) {
                '█'
            } else {
                '.'
            };
            result.push(symbol);
        }
        result.push('\n');
    }

    result
}

/// Each consecutive pair is one cardinal step onto a walkable cell
pub fn assert_valid_walk(level: &Level, path: &[Position]) {
    for step in path.windows(2) {
        let dx = (step[1].x - step[0].x).abs();
        let dy = (step[1].y - step[0].y).abs();
        assert_eq!(dx + dy, 1, "{} -> {} is not a single step", step[0], step[1]);
        assert!(level.grid.is_walkable(step[1]), "{} is not walkable", step[1]);
    }
}
