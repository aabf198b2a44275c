//! # rust-2048
//!
//! A deterministic 2048 board engine.
//!
//! ## Design Principles
//!
//! 1. **One Move Algorithm**: Only sliding left is implemented. Right, up
//!    and down rotate the board onto left and back.
//!
//! 2. **Injected Randomness**: Spawns draw from a `TileRng` supplied by the
//!    caller. Seeded ChaCha8 for play, scripted queues for exact replays.
//!
//! 3. **Pure State Machine**: The engine does no I/O. Rendering, input and
//!    score persistence sit outside it.
//!
//! ## Example
//!
//! ```
//! use rust_2048::{Direction, Game};
//!
//! let mut game = Game::new(7);
//! let outcome = game.apply_move(Direction::Left);
//! if outcome.effective {
//!     assert!(outcome.spawned.is_some());
//! }
//! assert!(!game.is_won());
//! ```
//!
//! ## Modules
//!
//! - `core`: Tiles, board, directions, state, RNG, configuration
//! - `rules`: Line merging, board shifts, the `Game` engine, snapshots
//! - `scores`: Newline-delimited high-score log
//! - `error`: Error type for the fallible edges

pub mod core;
pub mod error;
pub mod rules;
pub mod scores;

// Re-export commonly used types
pub use crate::core::{
    Board, Direction, GameConfig, GameRng, GameRngState, GameState, MoveOutcome, MoveRecord,
    Position, ScriptedRng, Spawn, Tile, TileRng, CELLS, SIZE,
};

pub use crate::error::{Error, Result};

pub use crate::rules::{Game, GameResult, LegalMoves, Shift, Snapshot};

pub use crate::scores::{HighScoreLog, HighScoreUpdate};
