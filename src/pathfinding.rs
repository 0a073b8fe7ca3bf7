use crate::grid::{Grid, Position};
use crate::level::Level;
use log::trace;
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};
use std::fmt;

/// One of the four moves a character can make
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Search order. Equal-length paths are broken in this order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Grid delta (dx, dy); y grows downward
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Direction of a single step from `from` to `to`.
    ///
    /// Horizontal movement is checked first, so for non-adjacent positions the
    /// result is the dominant axis in that order.
    pub fn between(from: Position, to: Position) -> Option<Direction> {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        if dx > 0 {
            Some(Direction::Right)
        } else if dx < 0 {
            Some(Direction::Left)
        } else if dy > 0 {
            Some(Direction::Down)
        } else if dy < 0 {
            Some(Direction::Up)
        } else {
            None
        }
    }

    pub fn step(self, from: Position) -> Position {
        let (dx, dy) = self.delta();
        from.offset(dx, dy)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// A node in the search; carries the whole prefix since grids are tiny
#[derive(Debug, Clone)]
struct PathNode {
    position: Position,
    path: Vec<Position>,
}

/// Shortest path from the level's start to its home cell
pub fn find_path(level: &Level) -> Option<Vec<Position>> {
    find_path_on(&level.grid, level.start_position, level.home_position)
}

/// Breadth-first search over walkable cells with 4-way movement.
///
/// Returns the path with both endpoints included, or `None` when `goal` cannot
/// be reached. A cell is marked visited when it is queued, so the first time the
/// goal comes off the queue it is via a minimum-length path.
pub fn find_path_on(grid: &Grid, start: Position, goal: Position) -> Option<Vec<Position>> {
    trace!("[find_path] START: {} -> {}, grid {}x{}", start, goal, grid.size, grid.size);

    let mut visited: HashSet<Position> = HashSet::new();
    let mut queue: VecDeque<PathNode> = VecDeque::new();

    visited.insert(start);
    queue.push_back(PathNode {
        position: start,
        path: vec![start],
    });

    let mut iterations = 0;
    while let Some(node) = queue.pop_front() {
        iterations += 1;

        if node.position == goal {
            trace!(
                "[find_path] FOUND PATH after {} iterations: {}",
                iterations,
                format_path(&node.path)
            );
            return Some(node.path);
        }

        for direction in Direction::ALL {
            let next = direction.step(node.position);
            if visited.contains(&next) || !grid.is_walkable(next) {
                continue;
            }

            visited.insert(next);
            let mut path = node.path.clone();
            path.push(next);
            queue.push_back(PathNode {
                position: next,
                path,
            });
        }
    }

    trace!("[find_path] NO PATH FOUND after {} iterations", iterations);
    None
}

/// The moves that walk along `path`, one per edge
pub fn path_moves(path: &[Position]) -> Vec<Direction> {
    path.windows(2)
        .filter_map(|step| Direction::between(step[0], step[1]))
        .collect()
}

/// Format path for display
pub fn format_path(path: &[Position]) -> String {
    if path.is_empty() {
        return "No path".to_string();
    }

    let mut result = String::new();
    for (i, pos) in path.iter().enumerate() {
        if i > 0 {
            result.push_str(" -> ");
        }
        result.push_str(&pos.to_string());
    }
    result
}
