//! File-backed high-score log.
//!
//! The file holds one decimal score per line. A score is appended only
//! when it beats everything already in the file, so the last line is
//! always the best score.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};

/// Result of offering a score to the log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HighScoreUpdate {
    /// Best score in the log before this one was offered.
    pub previous_best: u64,

    /// The offered score beat `previous_best` and was appended.
    pub is_new_best: bool,
}

impl HighScoreUpdate {
    /// Best score after the update.
    #[must_use]
    pub fn best(&self, offered: u64) -> u64 {
        if self.is_new_best {
            offered
        } else {
            self.previous_best
        }
    }
}

/// Parse newline-delimited scores. Blank lines are skipped.
pub fn parse_scores(reader: impl BufRead) -> Result<Vec<u64>> {
    let mut scores = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let score = trimmed.parse::<u64>().map_err(|source| Error::MalformedScore {
            line: index + 1,
            value: trimmed.to_string(),
            source,
        })?;
        scores.push(score);
    }
    Ok(scores)
}

/// A score log on disk.
#[derive(Clone, Debug)]
pub struct HighScoreLog {
    path: PathBuf,
}

impl HighScoreLog {
    /// Open the log at `path`, creating an empty file if needed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        OpenOptions::new().create(true).append(true).open(&path)?;
        debug!(path = %path.display(), "score log opened");
        Ok(Self { path })
    }

    /// Location of the file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every score in file order.
    pub fn scores(&self) -> Result<Vec<u64>> {
        let file = File::open(&self.path)?;
        parse_scores(BufReader::new(file))
    }

    /// Highest score in the log, or 0 when it is empty.
    pub fn best(&self) -> Result<u64> {
        Ok(self.scores()?.into_iter().max().unwrap_or(0))
    }

    /// Offer a finished session's score, appending it if it is a new best.
    pub fn record(&self, score: u64) -> Result<HighScoreUpdate> {
        let contents = fs::read_to_string(&self.path)?;
        let previous_best = parse_scores(contents.as_bytes())?
            .into_iter()
            .max()
            .unwrap_or(0);
        let is_new_best = score > previous_best;

        if is_new_best {
            let mut file = OpenOptions::new().append(true).open(&self.path)?;
            // A hand-edited file may lack the final newline.
            if !contents.is_empty() && !contents.ends_with('\n') {
                writeln!(file)?;
            }
            writeln!(file, "{score}")?;
            info!(score, previous_best, "new high score");
        } else {
            debug!(score, previous_best, "score below high score");
        }

        Ok(HighScoreUpdate {
            previous_best,
            is_new_best,
        })
    }
}
