//! The 5×6 board.
//!
//! Each cell is a tagged union: empty, a castle, or a tile. Once a cell is
//! occupied it is never vacated or overwritten; only the epoch reset builds
//! a fresh empty board.
//!
//! ```
//! use kingdoms::board::{Board, Cell, Position, Tile};
//! use kingdoms::core::TileId;
//!
//! let mut board = Board::new();
//! let pos = Position::new(2, 3);
//!
//! board.place_tile(pos, Tile::mountain(TileId(0))).unwrap();
//!
//! assert!(matches!(board.get(pos), Some(Cell::Tile(_))));
//! assert_eq!(board.empty_count(), 29);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::piece::{Castle, Tile, TileKind};
use crate::core::config::{BOARD_COLS, BOARD_ROWS};
use crate::core::error::MoveRejection;

/// A board coordinate. May be out of bounds until checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Does this position lie on the board?
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < BOARD_ROWS && self.col < BOARD_COLS
    }

    /// In-bounds orthogonal neighbors (up, down, left, right).
    #[must_use]
    pub fn neighbors(self) -> SmallVec<[Position; 4]> {
        let mut out = SmallVec::new();
        if self.row > 0 {
            out.push(Position::new(self.row - 1, self.col));
        }
        if self.row + 1 < BOARD_ROWS {
            out.push(Position::new(self.row + 1, self.col));
        }
        if self.col > 0 {
            out.push(Position::new(self.row, self.col - 1));
        }
        if self.col + 1 < BOARD_COLS {
            out.push(Position::new(self.row, self.col + 1));
        }
        out
    }

    /// Every board position in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_ROWS).flat_map(|row| (0..BOARD_COLS).map(move |col| Position::new(row, col)))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Contents of one board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Castle(Castle),
    Tile(Tile),
}

impl Cell {
    /// Is the cell unoccupied?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The tile in this cell, if any.
    #[must_use]
    pub fn tile(&self) -> Option<&Tile> {
        match self {
            Cell::Tile(tile) => Some(tile),
            _ => None,
        }
    }

    /// The castle in this cell, if any.
    #[must_use]
    pub fn castle(&self) -> Option<&Castle> {
        match self {
            Cell::Castle(castle) => Some(castle),
            _ => None,
        }
    }

    /// Is this cell a tile of the given kind?
    #[must_use]
    pub fn is_tile(&self, kind: TileKind) -> bool {
        self.tile().is_some_and(|t| t.kind == kind)
    }
}

/// The grid of cells.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_COLS]; BOARD_ROWS],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell at `pos`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.cells.get(pos.row)?.get(pos.col)
    }

    /// Check that `pos` is on the board and unoccupied.
    pub fn check_vacant(&self, pos: Position) -> Result<(), MoveRejection> {
        match self.get(pos) {
            None => Err(MoveRejection::OutOfBounds),
            Some(cell) if !cell.is_empty() => Err(MoveRejection::CellOccupied),
            Some(_) => Ok(()),
        }
    }

    /// Put a castle on an empty cell. The castle's position is set to `pos`.
    pub fn place_castle(&mut self, pos: Position, mut castle: Castle) -> Result<Castle, MoveRejection> {
        self.check_vacant(pos)?;
        castle.position = Some(pos);
        self.cells[pos.row][pos.col] = Cell::Castle(castle);
        Ok(castle)
    }

    /// Put a tile on an empty cell. The tile's position is set to `pos`.
    pub fn place_tile(&mut self, pos: Position, mut tile: Tile) -> Result<Tile, MoveRejection> {
        self.check_vacant(pos)?;
        tile.position = Some(pos);
        self.cells[pos.row][pos.col] = Cell::Tile(tile);
        Ok(tile)
    }

    /// Number of unoccupied cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_empty()).count()
    }

    /// Is there at least one unoccupied cell?
    #[must_use]
    pub fn has_empty_cell(&self) -> bool {
        self.cells.iter().flatten().any(Cell::is_empty)
    }

    /// Is every cell occupied?
    #[must_use]
    pub fn is_full(&self) -> bool {
        !self.has_empty_cell()
    }

    /// Unoccupied positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(|&pos| self.cells[pos.row][pos.col].is_empty())
    }

    /// Cells of one row, left to right.
    #[must_use]
    pub fn row(&self, row: usize) -> Vec<(Position, Cell)> {
        (0..BOARD_COLS).map(|col| (Position::new(row, col), self.cells[row][col])).collect()
    }

    /// Cells of one column, top to bottom.
    #[must_use]
    pub fn column(&self, col: usize) -> Vec<(Position, Cell)> {
        (0..BOARD_ROWS).map(|row| (Position::new(row, col), self.cells[row][col])).collect()
    }

    /// Is any orthogonal neighbor of `pos` a tile of the given kind?
    #[must_use]
    pub fn adjacent_to(&self, pos: Position, kind: TileKind) -> bool {
        pos.neighbors()
            .into_iter()
            .any(|n| self.get(n).is_some_and(|cell| cell.is_tile(kind)))
    }
}
