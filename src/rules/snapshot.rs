//! Checkpoints of a seeded session.
//!
//! A snapshot holds the configuration, the state, the RNG position and
//! the move history. Restoring it resumes the exact same random stream,
//! so play continues as if it had never stopped.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameRngState, GameState, MoveRecord};
use crate::error::Result;

/// A serializable checkpoint of a `Game<GameRng>`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub config: GameConfig,
    pub state: GameState,
    pub rng: GameRngState,
    pub history: Vector<MoveRecord>,
}

impl Snapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    ///
    /// Tiles that are not empty or a power of two >= 2 are rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
