//! Errors from the fallible edges of the crate.
//!
//! Moves and queries on a game cannot fail. The score log (file I/O),
//! snapshot decoding and the checked configuration builders return these.

use derive_more::{Display, Error, From};

/// Crate error type.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// Reading or writing the score log failed.
    #[display("score log I/O failed: {_0}")]
    #[from]
    Io(#[error(source)] std::io::Error),

    /// A line of the score log is not an integer.
    #[display("malformed score {value:?} on line {line}")]
    MalformedScore {
        line: usize,
        value: String,
        source: std::num::ParseIntError,
    },

    /// A value is not empty and not a power of two >= 2.
    #[display("invalid tile value {value}")]
    InvalidTile { value: u32 },

    /// A win tile that is not a power of two >= 4.
    #[display("win tile {value} must be a power of two >= 4")]
    InvalidWinTile { value: u32 },

    /// A snapshot could not be encoded or decoded.
    #[display("snapshot encoding failed: {_0}")]
    #[from]
    Snapshot(#[error(source)] bincode::Error),
}

/// Result alias for fallible operations.
pub type Result<T> = std::result::Result<T, Error>;
