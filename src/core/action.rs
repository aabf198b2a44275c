//! Move representation: a direction plus what the move did.
//!
//! A `Direction` is the only input the engine takes during play. Applying
//! one yields a `MoveOutcome`, and the pair is kept as a `MoveRecord` in
//! the session history for replay and debugging.

use serde::{Deserialize, Serialize};

use super::board::Position;
use super::tile::Tile;

/// One of the four slide directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Clockwise quarter turns that map this direction onto `Left`.
    ///
    /// Rotating the board by this amount, sliding left, and rotating by
    /// `inverse_turns()` is the same as sliding in this direction.
    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Direction::Left => 0,
            Direction::Down => 1,
            Direction::Right => 2,
            Direction::Up => 3,
        }
    }

    /// Clockwise quarter turns that undo `quarter_turns()`.
    #[must_use]
    pub const fn inverse_turns(self) -> u8 {
        (4 - self.quarter_turns()) % 4
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        f.write_str(name)
    }
}

/// A tile placed by the engine after an effective move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spawn {
    pub position: Position,
    pub tile: Tile,
}

/// What a single `apply_move` call did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// At least one row or column changed.
    pub effective: bool,

    /// Sum of all tiles produced by merges during this move.
    pub score_gained: u64,

    /// Number of merge events.
    pub merges: u32,

    /// Tile placed after the move, if any.
    pub spawned: Option<Spawn>,
}

impl MoveOutcome {
    /// Outcome of a move that changed nothing.
    #[must_use]
    pub const fn unchanged() -> Self {
        Self {
            effective: false,
            score_gained: 0,
            merges: 0,
            spawned: None,
        }
    }
}

/// A recorded move for history tracking.
///
/// Used for:
/// - Replay from a seed
/// - Debugging and statistics
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The direction requested.
    pub direction: Direction,

    /// What happened.
    pub outcome: MoveOutcome,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(direction: Direction, outcome: MoveOutcome) -> Self {
        Self { direction, outcome }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_are_inverse() {
        for direction in Direction::ALL {
            let total = direction.quarter_turns() + direction.inverse_turns();
            assert_eq!(total % 4, 0, "{direction}");
        }
    }

    #[test]
    fn test_left_needs_no_rotation() {
        assert_eq!(Direction::Left.quarter_turns(), 0);
        assert_eq!(Direction::Left.inverse_turns(), 0);
        assert_eq!(Direction::Right.quarter_turns(), 2);
        assert_eq!(Direction::Right.inverse_turns(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Right.to_string(), "right");
    }

    #[test]
    fn test_unchanged_outcome() {
        let outcome = MoveOutcome::unchanged();
        assert!(!outcome.effective);
        assert_eq!(outcome.score_gained, 0);
        assert!(outcome.spawned.is_none());
        assert_eq!(outcome, MoveOutcome::default());
    }

    #[test]
    fn test_move_record_serialization() {
        let record = MoveRecord::new(
            Direction::Down,
            MoveOutcome {
                effective: true,
                score_gained: 8,
                merges: 2,
                spawned: Some(Spawn {
                    position: Position::new(1, 2),
                    tile: Tile::new(4),
                }),
            },
        );

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
