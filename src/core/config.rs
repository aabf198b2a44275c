//! Game configuration.
//!
//! The board is always 4x4. What a session may tune:
//! - `win_tile`: the merge result that sets `won` (2048)
//! - `four_probability`: chance a spawned tile is a 4 instead of a 2 (0.1)
//! - `starting_tiles`: tiles placed by reset (2)

use serde::{Deserialize, Serialize};

use super::board::CELLS;
use super::tile::Tile;
use crate::error::{Error, Result};

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// A merge producing exactly this tile wins the game.
    pub win_tile: Tile,

    /// Probability that a spawned tile is a 4.
    pub four_probability: f64,

    /// Number of tiles placed on reset.
    pub starting_tiles: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            win_tile: Tile::new(2048),
            four_probability: 0.1,
            starting_tiles: 2,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the winning tile. Must be a power of two of at least 4.
    #[must_use]
    pub fn with_win_tile(self, value: u32) -> Self {
        match self.try_with_win_tile(value) {
            Ok(config) => config,
            Err(_) => panic!("Win tile must be a power of two >= 4, got {value}"),
        }
    }

    /// Set the winning tile, rejecting values that can never be merged into.
    pub fn try_with_win_tile(mut self, value: u32) -> Result<Self> {
        if value < 4 || !value.is_power_of_two() {
            return Err(Error::InvalidWinTile { value });
        }
        self.win_tile = Tile::new(value);
        Ok(self)
    }

    /// Set the probability of spawning a 4.
    #[must_use]
    pub fn with_four_probability(mut self, probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&probability),
            "Probability must be within [0, 1]"
        );
        self.four_probability = probability;
        self
    }

    /// Set how many tiles reset places.
    #[must_use]
    pub fn with_starting_tiles(mut self, count: usize) -> Self {
        assert!(count <= CELLS, "At most {CELLS} starting tiles");
        self.starting_tiles = count;
        self
    }
}
