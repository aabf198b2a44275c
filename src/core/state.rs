//! Session state: board, score and terminal flags.
//!
//! `GameState` is plain data. Only the engine mutates it during play;
//! consumers read it to render or to record results.

use serde::{Deserialize, Serialize};

use super::board::Board;

/// Everything that describes a session at a point in time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The grid.
    pub board: Board,

    /// Sum of all merged tile values so far. Never decreases.
    pub score: u64,

    /// A merge has produced the winning tile. Only reset clears it.
    pub won: bool,

    /// The board is full and no neighbours match.
    pub lost: bool,

    /// Effective moves made this session.
    pub moves: u32,
}

impl GameState {
    /// Create an empty state: blank board, zero score, no flags.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state around an existing board.
    ///
    /// `lost` is derived from the board; `won` starts false because it is
    /// only ever earned by a merge.
    #[must_use]
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            lost: !board.can_move(),
            ..Self::default()
        }
    }

    /// Check if play has ended, by winning or losing.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.won || self.lost
    }
}
