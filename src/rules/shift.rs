//! Whole-board moves.
//!
//! Only `Left` is implemented directly. Every other direction rotates the
//! board so that it faces left, slides each row, and rotates back.

use crate::core::{Board, Direction, Tile, SIZE};

use super::line;

/// Result of shifting a whole board, before any spawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shift {
    /// The board after sliding and merging.
    pub board: Board,

    /// Sum of merged tile values.
    pub score: u64,

    /// Number of merges across all rows.
    pub merges: u32,

    /// A merge produced the winning tile.
    pub reached_target: bool,

    /// At least one row changed.
    pub effective: bool,
}

/// Slide and merge `board` in `direction`. Pure; spawns nothing.
#[must_use]
pub fn shift(board: &Board, direction: Direction, target: Tile) -> Shift {
    let facing_left = board.rotated(direction.quarter_turns());
    let moved = shift_left(&facing_left, target);

    Shift {
        board: moved.board.rotated(direction.inverse_turns()),
        ..moved
    }
}

fn shift_left(board: &Board, target: Tile) -> Shift {
    let mut out = *board;
    let mut score = 0;
    let mut merges = 0;
    let mut reached_target = false;
    let mut effective = false;

    for y in 0..SIZE {
        let before = board.row(y);
        let slid = line::slide(before, target);

        effective |= slid.line != before;
        score += slid.score;
        merges += slid.merges;
        reached_target |= slid.reached_target;
        out.set_row(y, slid.line);
    }

    Shift {
        board: out,
        score,
        merges,
        reached_target,
        effective,
    }
}
