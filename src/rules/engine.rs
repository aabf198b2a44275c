//! The board engine.
//!
//! `Game` owns one session: its configuration, state, random source and
//! move history. Callers drive it with:
//! - `reset` to start over
//! - `apply_move` for each player input
//! - the query methods to render or decide what to do next
//!
//! Randomness is a type parameter, so tests and replays can plug in a
//! `ScriptedRng` while normal play uses a seeded `GameRng`.

use im::Vector;
use smallvec::SmallVec;
use tracing::{debug, info, trace};

use crate::core::{
    Board, Direction, GameConfig, GameRng, GameState, MoveOutcome, MoveRecord, Spawn, Tile, TileRng,
};

use super::shift::{shift, Shift};
use super::snapshot::Snapshot;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// The winning tile was produced.
    Won,
    /// No move can change the board.
    Lost,
}

/// Directions that would change the board. At most four.
pub type LegalMoves = SmallVec<[Direction; 4]>;

/// A single 2048 session.
#[derive(Clone, Debug)]
pub struct Game<R = GameRng> {
    config: GameConfig,
    state: GameState,
    rng: R,
    history: Vector<MoveRecord>,
}

impl Game<GameRng> {
    /// Start a standard game from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_config(GameConfig::default(), seed)
    }

    /// Start a game with a custom configuration.
    #[must_use]
    pub fn with_config(config: GameConfig, seed: u64) -> Self {
        Self::from_rng(config, GameRng::new(seed))
    }

    /// Rebuild a game by replaying directions from its seed.
    #[must_use]
    pub fn replay(config: GameConfig, seed: u64, directions: &[Direction]) -> Self {
        let mut game = Self::with_config(config, seed);
        for &direction in directions {
            game.apply_move(direction);
        }
        game
    }

    /// Capture a checkpoint.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            config: self.config.clone(),
            state: self.state,
            rng: self.rng.state(),
            history: self.history.clone(),
        }
    }

    /// Resume from a checkpoint.
    #[must_use]
    pub fn restore(snapshot: &Snapshot) -> Self {
        Self {
            config: snapshot.config.clone(),
            state: snapshot.state,
            rng: GameRng::from_state(&snapshot.rng),
            history: snapshot.history.clone(),
        }
    }
}

impl<R: TileRng> Game<R> {
    /// Start a game drawing from `rng`. Resets immediately.
    pub fn from_rng(config: GameConfig, rng: R) -> Self {
        let mut game = Self {
            config,
            state: GameState::new(),
            rng,
            history: Vector::new(),
        };
        game.reset();
        game
    }

    /// Start from a prepared board instead of a reset.
    ///
    /// Score is zero and `won` is false; `lost` follows from the board.
    pub fn from_board(config: GameConfig, rng: R, board: Board) -> Self {
        Self {
            config,
            state: GameState::with_board(board),
            rng,
            history: Vector::new(),
        }
    }

    /// Clear the board, score and flags, then place the starting tiles.
    pub fn reset(&mut self) {
        self.state = GameState::new();
        self.history = Vector::new();

        for _ in 0..self.config.starting_tiles {
            self.place_random_tile();
        }
        self.state.lost = !self.state.board.can_move();

        debug!(tiles = self.config.starting_tiles, "board reset");
    }

    /// Slide the board in `direction`.
    ///
    /// Effective moves add their merge score and spawn one tile. Once the
    /// game is won or lost the call changes nothing. `lost` is recomputed
    /// after every applied move.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.state.is_terminal() {
            trace!(%direction, "move ignored, game is over");
            return MoveOutcome::unchanged();
        }

        let shifted = shift(&self.state.board, direction, self.config.win_tile);
        let mut outcome = MoveOutcome {
            effective: shifted.effective,
            score_gained: shifted.score,
            merges: shifted.merges,
            spawned: None,
        };

        if shifted.effective {
            self.state.board = shifted.board;
            self.state.score += shifted.score;
            self.state.moves += 1;

            if shifted.reached_target && !self.state.won {
                self.state.won = true;
                info!(score = self.state.score, moves = self.state.moves, "winning tile reached");
            }

            outcome.spawned = self.place_random_tile();
            debug!(
                %direction,
                gained = shifted.score,
                merges = shifted.merges,
                score = self.state.score,
                "move applied"
            );
        } else {
            trace!(%direction, "move changed nothing");
        }

        let lost = !self.state.board.can_move();
        if lost && !self.state.lost {
            info!(
                score = self.state.score,
                moves = self.state.moves,
                max_tile = self.state.board.max_tile().value(),
                "no moves left"
            );
        }
        self.state.lost = lost;

        self.history.push_back(MoveRecord::new(direction, outcome));
        outcome
    }

    /// What `direction` would do, without touching the session.
    #[must_use]
    pub fn preview(&self, direction: Direction) -> Shift {
        shift(&self.state.board, direction, self.config.win_tile)
    }

    /// Directions that would change the board, in `Direction::ALL` order.
    ///
    /// Empty once the game is won or lost.
    #[must_use]
    pub fn legal_moves(&self) -> LegalMoves {
        if self.state.is_terminal() {
            return LegalMoves::new();
        }
        Direction::ALL
            .into_iter()
            .filter(|&direction| self.preview(direction).effective)
            .collect()
    }

    /// Place a 2 (or, rarely, a 4) on a random empty cell.
    ///
    /// Does nothing on a full board.
    fn place_random_tile(&mut self) -> Option<Spawn> {
        let empty = self.state.board.empty_positions();
        if empty.is_empty() {
            return None;
        }

        let position = empty[self.rng.pick_index(empty.len())];
        let tile = if self.rng.chance(self.config.four_probability) {
            Tile::new(4)
        } else {
            Tile::new(2)
        };
        self.state.board.set(position, tile);

        trace!(%position, value = tile.value(), "tile spawned");
        Some(Spawn { position, tile })
    }

    // === Queries ===

    /// Tile at `(x, y)`. Panics when out of range.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Tile {
        self.state.board.get(x, y)
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.state.score
    }

    /// The winning tile has been produced.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state.won
    }

    /// No move can change the board.
    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.state.lost
    }

    /// Some direction could still change the board.
    #[must_use]
    pub fn can_move(&self) -> bool {
        self.state.board.can_move()
    }

    /// How the game ended, or `None` while it continues.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if self.state.won {
            Some(GameResult::Won)
        } else if self.state.lost {
            Some(GameResult::Lost)
        } else {
            None
        }
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    /// The full session state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Every move applied since the last reset.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// The random source.
    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }
}
