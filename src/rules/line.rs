//! Sliding a single line to the left.
//!
//! Every move reduces to this: compact the line, then merge it in one
//! left-to-right scan. A tile produced by a merge is never merged again
//! in the same pass, and the leftmost equal pair always wins.

use crate::core::{Line, Tile, SIZE};

/// Result of sliding one line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineSlide {
    /// The line after compaction and merging.
    pub line: Line,

    /// Sum of the merged tile values.
    pub score: u64,

    /// Number of merges.
    pub merges: u32,

    /// A merge produced the winning tile.
    pub reached_target: bool,
}

/// Move non-empty tiles to the left, keeping their order.
#[must_use]
pub fn compact(line: Line) -> Line {
    let mut out = [Tile::EMPTY; SIZE];
    let mut len = 0;
    for tile in line {
        if !tile.is_empty() {
            out[len] = tile;
            len += 1;
        }
    }
    out
}

/// Merge equal neighbours of a compacted line.
///
/// Expects the output of `compact`; gaps between tiles are not closed.
#[must_use]
pub fn merge(line: Line, target: Tile) -> LineSlide {
    let mut out = [Tile::EMPTY; SIZE];
    let mut len = 0;
    let mut score = 0;
    let mut merges = 0;
    let mut reached_target = false;
    let mut skip_next = false;

    for i in 0..SIZE {
        if skip_next {
            skip_next = false;
            continue;
        }
        let tile = line[i];
        if tile.is_empty() {
            continue;
        }

        let merged = if i + 1 < SIZE && line[i + 1] == tile {
            tile.checked_doubled()
        } else {
            None
        };

        if let Some(merged) = merged {
            score += u64::from(merged.value());
            merges += 1;
            reached_target |= merged == target;
            out[len] = merged;
            skip_next = true;
        } else {
            out[len] = tile;
        }
        len += 1;
    }

    LineSlide {
        line: out,
        score,
        merges,
        reached_target,
    }
}

/// Compact then merge.
#[must_use]
pub fn slide(line: Line, target: Tile) -> LineSlide {
    merge(compact(line), target)
}
