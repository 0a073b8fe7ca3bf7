use serde::{Deserialize, Serialize};
use std::fmt;

/// A position on the grid (x = column, y = row, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Position shifted by (dx, dy)
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Position::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Terrain of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    Grass,
    Path,
    Water,
    Obstacle,
    Home,
    Coin,
}

/// A single grid cell. Coin and obstacle are flags layered on top of the terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    #[serde(rename = "type")]
    pub kind: CellKind,
    #[serde(default)]
    pub has_coin: bool,
    #[serde(default)]
    pub has_obstacle: bool,
}

impl Cell {
    pub fn new(kind: CellKind) -> Self {
        Cell {
            kind,
            has_coin: false,
            has_obstacle: false,
        }
    }

    pub fn with_coin(mut self) -> Self {
        self.has_coin = true;
        self
    }

    pub fn with_obstacle(mut self) -> Self {
        self.has_obstacle = true;
        self
    }

    /// Grass, water and anything flagged as an obstacle block movement.
    pub fn is_walkable(&self) -> bool {
        !matches!(self.kind, CellKind::Grass | CellKind::Water) && !self.has_obstacle
    }
}

/// Square grid of cells stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Grid {
    pub size: i32,
    cells: Vec<Cell>,
}

/// Why a nested cell array could not become a [`Grid`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridShapeError {
    #[error("grid has no rows")]
    Empty,
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
}

impl Grid {
    /// Create a grid with every cell set to `fill`
    pub fn filled(size: i32, fill: Cell) -> Self {
        let side = size.max(0) as usize;
        Grid {
            size: size.max(0),
            cells: vec![fill; side * side],
        }
    }

    /// Build a grid from rows; every row must be as long as there are rows.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GridShapeError> {
        let expected = rows.len();
        if expected == 0 {
            return Err(GridShapeError::Empty);
        }

        let mut cells = Vec::with_capacity(expected * expected);
        for (row, cols) in rows.into_iter().enumerate() {
            if cols.len() != expected {
                return Err(GridShapeError::RaggedRow {
                    row,
                    len: cols.len(),
                    expected,
                });
            }
            cells.extend(cols);
        }

        Ok(Grid {
            size: expected as i32,
            cells,
        })
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.size && pos.y >= 0 && pos.y < self.size
    }

    /// Cell at `pos`, or `None` when out of bounds
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        if !self.in_bounds(pos) {
            return None;
        }
        self.cells.get(self.get_id(pos) as usize)
    }

    /// Out of bounds is treated as blocked
    pub fn is_walkable(&self, pos: Position) -> bool {
        self.cell(pos).map(Cell::is_walkable).unwrap_or(false)
    }

    /// Replace the cell at `pos`; ignored when out of bounds
    pub fn set_cell(&mut self, pos: Position, cell: Cell) {
        if self.in_bounds(pos) {
            let id = self.get_id(pos) as usize;
            self.cells[id] = cell;
        }
    }

    /// Convert a position to its row-major cell ID
    pub fn get_id(&self, pos: Position) -> i32 {
        pos.x + pos.y * self.size
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1) as usize)
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Grid {
    type Error = GridShapeError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        Grid::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<Cell>> {
    fn from(grid: Grid) -> Self {
        grid.rows().map(|row| row.to_vec()).collect()
    }
}
