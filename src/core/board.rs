//! The 4x4 grid of tiles.
//!
//! Cells are stored row-major and addressed by `(x, y)`: `x` is the column
//! and `y` is the row, both in `0..SIZE`. Out-of-range access through
//! `get` panics; `try_get` is the checked variant.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::tile::Tile;

/// Side length of the board.
pub const SIZE: usize = 4;

/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// One row (or rotated column) of the board, ordered left to right.
pub type Line = [Tile; SIZE];

/// A cell coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    /// Create a position. Panics if either coordinate is out of range.
    #[must_use]
    pub fn new(x: usize, y: usize) -> Self {
        assert!(
            x < SIZE && y < SIZE,
            "cell ({x}, {y}) is outside the {SIZE}x{SIZE} board"
        );
        Self {
            x: x as u8,
            y: y as u8,
        }
    }

    /// Position of a row-major cell index.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        assert!(index < CELLS, "cell index {index} out of range");
        Self::new(index % SIZE, index / SIZE)
    }

    /// Row-major cell index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.x as usize + self.y as usize * SIZE
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Positions of empty cells. Never more than `CELLS`, so it stays inline.
pub type EmptyCells = SmallVec<[Position; CELLS]>;

/// The board: exactly 16 tiles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Tile; CELLS],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from rows of raw values (`rows[y][x]`).
    ///
    /// Panics if a value is not 0 or a power of two no smaller than 2.
    #[must_use]
    pub fn from_rows(rows: [[u32; SIZE]; SIZE]) -> Self {
        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                let tile = Tile::new(value);
                assert!(tile.is_valid(), "invalid tile value {value} at ({x}, {y})");
                board.cells[x + y * SIZE] = tile;
            }
        }
        board
    }

    /// Raw values as rows (`rows[y][x]`).
    #[must_use]
    pub fn to_rows(&self) -> [[u32; SIZE]; SIZE] {
        let mut rows = [[0; SIZE]; SIZE];
        for (y, row) in rows.iter_mut().enumerate() {
            for (x, value) in row.iter_mut().enumerate() {
                *value = self.cells[x + y * SIZE].value();
            }
        }
        rows
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Tile; CELLS] {
        &self.cells
    }

    // === Cell Access ===

    /// Get the tile at `(x, y)`. Panics when out of range.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Tile {
        self.at(Position::new(x, y))
    }

    /// Get the tile at `(x, y)`, or `None` when out of range.
    #[must_use]
    pub fn try_get(&self, x: usize, y: usize) -> Option<Tile> {
        (x < SIZE && y < SIZE).then(|| self.cells[x + y * SIZE])
    }

    /// Get the tile at a position.
    #[must_use]
    pub fn at(&self, pos: Position) -> Tile {
        self.cells[pos.index()]
    }

    /// Set the tile at a position.
    ///
    /// # Panics
    ///
    /// Panics if `tile` is not a valid tile value.
    pub fn set(&mut self, pos: Position, tile: Tile) {
        assert!(
            tile.is_valid(),
            "invalid tile value {} at ({}, {})",
            tile.value(),
            pos.x,
            pos.y
        );
        self.cells[pos.index()] = tile;
    }

    /// Copy out row `y`.
    #[must_use]
    pub fn row(&self, y: usize) -> Line {
        let start = y * SIZE;
        let mut line = [Tile::EMPTY; SIZE];
        line.copy_from_slice(&self.cells[start..start + SIZE]);
        line
    }

    /// Overwrite row `y`.
    pub fn set_row(&mut self, y: usize, line: Line) {
        let start = y * SIZE;
        self.cells[start..start + SIZE].copy_from_slice(&line);
    }

    // === Queries ===

    /// Positions of all empty cells, row-major.
    #[must_use]
    pub fn empty_positions(&self) -> EmptyCells {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.is_empty())
            .map(|(index, _)| Position::from_index(index))
            .collect()
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|tile| tile.is_empty()).count()
    }

    /// Check if every cell holds a tile.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|tile| !tile.is_empty())
    }

    /// Check if any tile equals its right or down neighbour and can merge.
    #[must_use]
    pub fn has_adjacent_pair(&self) -> bool {
        for y in 0..SIZE {
            for x in 0..SIZE {
                let tile = self.cells[x + y * SIZE];
                if tile.checked_doubled().is_none() {
                    continue;
                }
                if x + 1 < SIZE && self.cells[x + 1 + y * SIZE] == tile {
                    return true;
                }
                if y + 1 < SIZE && self.cells[x + (y + 1) * SIZE] == tile {
                    return true;
                }
            }
        }
        false
    }

    /// Check if some direction could still change the board.
    #[must_use]
    pub fn can_move(&self) -> bool {
        !self.is_full() || self.has_adjacent_pair()
    }

    /// Largest tile on the board.
    #[must_use]
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(Tile::EMPTY)
    }

    /// Sum of all tile values.
    #[must_use]
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|tile| u64::from(tile.value())).sum()
    }

    // === Rotation ===

    /// Rotate clockwise by `quarter_turns` quarter turns.
    ///
    /// The cell at `(x, y)` moves to `(SIZE - 1 - y, x)` on each turn.
    #[must_use]
    pub fn rotated(&self, quarter_turns: u8) -> Self {
        let mut board = *self;
        for _ in 0..quarter_turns % 4 {
            let mut next = Self::new();
            for y in 0..SIZE {
                for x in 0..SIZE {
                    next.cells[(SIZE - 1 - y) + x * SIZE] = board.cells[x + y * SIZE];
                }
            }
            board = next;
        }
        board
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..SIZE {
            for x in 0..SIZE {
                if x > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:>5}", self.cells[x + y * SIZE])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
