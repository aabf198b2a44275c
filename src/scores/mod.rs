//! High-score persistence.
//!
//! Lives beside the engine, not inside it: the engine never touches the
//! file system, and a failing log leaves a session fully playable.

pub mod store;

pub use store::{parse_scores, HighScoreLog, HighScoreUpdate};
