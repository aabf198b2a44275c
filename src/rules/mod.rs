//! Game rules: line sliding, whole-board shifts, and the session engine.
//!
//! - `line`: compact and merge one row, left only
//! - `shift`: any direction, via rotation onto `line`
//! - `engine`: `Game`, which adds scoring, spawning and terminal flags
//! - `snapshot`: checkpoints of seeded sessions

pub mod line;
pub mod shift;
pub mod engine;
pub mod snapshot;

pub use engine::{Game, GameResult, LegalMoves};
pub use line::{compact, merge, slide, LineSlide};
pub use shift::{shift, Shift};
pub use snapshot::Snapshot;
