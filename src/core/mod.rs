//! Core engine types: tiles, board, directions, state, RNG, configuration.
//!
//! Nothing in here knows how a move works; the rules live in `rules`.

pub mod tile;
pub mod board;
pub mod action;
pub mod rng;
pub mod config;
pub mod state;

pub use tile::Tile;
pub use board::{Board, EmptyCells, Line, Position, CELLS, SIZE};
pub use action::{Direction, MoveOutcome, MoveRecord, Spawn};
pub use rng::{GameRng, GameRngState, ScriptedRng, TileRng};
pub use config::GameConfig;
pub use state::GameState;
