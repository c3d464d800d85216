//! Score-history module - persistence of finished-game results
//!
//! The engine never touches a filesystem; whoever drives it records each
//! finished game's best tile into a [`HistoryStore`]. The histogram maps a
//! max tile value to the number of games that ended on it.
//!
//! Two stores are provided: [`MemoryHistory`] for tests and embedding, and
//! [`CsvHistory`] for the on-disk `value,count` line format.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

/// Max tile value -> number of games that finished with it
pub type ScoreHistogram = BTreeMap<u32, u32>;

/// Errors from loading or saving a score history
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed history line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

/// Result type alias for history operations
pub type HistoryResult<T> = Result<T, HistoryError>;

/// Where finished-game results go
pub trait HistoryStore {
    /// Load the full histogram
    fn load(&self) -> HistoryResult<ScoreHistogram>;

    /// Replace the stored histogram
    fn save(&self, history: &ScoreHistogram) -> HistoryResult<()>;

    /// Count one finished game ending on `max_tile`
    fn record(&self, max_tile: u32) -> HistoryResult<()> {
        let mut history = self.load()?;
        *history.entry(max_tile).or_insert(0) += 1;
        self.save(&history)
    }
}

/// In-memory store, shared-state safe via an internal mutex
#[derive(Debug, Default)]
pub struct MemoryHistory {
    inner: Mutex<ScoreHistogram>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryHistory {
    fn load(&self) -> HistoryResult<ScoreHistogram> {
        Ok(self.inner.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }

    fn save(&self, history: &ScoreHistogram) -> HistoryResult<()> {
        *self.inner.lock().unwrap_or_else(|e| e.into_inner()) = history.clone();
        Ok(())
    }
}

/// File-backed store using one `value,count` line per histogram entry.
/// A missing file loads as an empty histogram.
#[derive(Debug, Clone)]
pub struct CsvHistory {
    path: PathBuf,
}

impl CsvHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(contents: &str) -> HistoryResult<ScoreHistogram> {
        let mut history = ScoreHistogram::new();
        for (idx, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let (tile, count) = line.split_once(',').ok_or_else(|| HistoryError::Parse {
                line: idx + 1,
                reason: format!("expected 'value,count', got {line:?}"),
            })?;
            let tile: u32 = tile.trim().parse().map_err(|e| HistoryError::Parse {
                line: idx + 1,
                reason: format!("bad tile value {:?}: {e}", tile.trim()),
            })?;
            let count: u32 = count.trim().parse().map_err(|e| HistoryError::Parse {
                line: idx + 1,
                reason: format!("bad count {:?}: {e}", count.trim()),
            })?;
            *history.entry(tile).or_insert(0) += count;
        }
        Ok(history)
    }
}

impl HistoryStore for CsvHistory {
    fn load(&self) -> HistoryResult<ScoreHistogram> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Self::parse(&contents),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(ScoreHistogram::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, history: &ScoreHistogram) -> HistoryResult<()> {
        let mut out = String::new();
        for (tile, count) in history {
            out.push_str(&format!("{tile},{count}\n"));
        }
        fs::write(&self.path, out)?;
        Ok(())
    }
}
