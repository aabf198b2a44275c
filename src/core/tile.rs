//! Tile values.
//!
//! A tile is just a number: `0` is an empty cell, anything else is a
//! power of two between 2 and `Tile::MAX`. Tiles carry no identity, so
//! merging two of them produces a fresh value rather than keeping either
//! input.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A single cell value on the board.
///
/// Deserialization rejects values that are not valid tiles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Tile(pub u32);

impl Tile {
    /// The empty cell.
    pub const EMPTY: Tile = Tile(0);

    /// The largest tile `u32` can hold. It never merges.
    pub const MAX: Tile = Tile(1 << 31);

    /// Create a tile from a raw value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw value (0 when empty).
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Check if this cell is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The tile produced by merging two copies of this one.
    ///
    /// `None` for the empty cell and for `Tile::MAX`.
    #[must_use]
    pub const fn checked_doubled(self) -> Option<Self> {
        if self.0 == 0 {
            return None;
        }
        match self.0.checked_mul(2) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Check the board invariant: empty, or a power of two no smaller than 2.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 == 0 || (self.0 >= 2 && self.0.is_power_of_two())
    }
}

impl TryFrom<u32> for Tile {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        let tile = Self(value);
        if tile.is_valid() {
            Ok(tile)
        } else {
            Err(Error::InvalidTile { value })
        }
    }
}

impl From<Tile> for u32 {
    fn from(tile: Tile) -> Self {
        tile.0
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            f.pad(".")
        } else {
            f.pad(&self.0.to_string())
        }
    }
}
