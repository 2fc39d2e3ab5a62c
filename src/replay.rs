// Chunk: docs/chunks/event_replay - Replaying recorded highlight events

//! Replaying a recorded event log into a store.
//!
//! An event log is JSON lines, one [`HighlightEvent`] per line, in the order
//! the editing session produced them:
//!
//! ```text
//! # open main.rs and highlight it
//! {"kind": "tokens_ready", "updates": [{"buffer": 1, "line": 0, "tokens": [{"index": 0}]}]}
//! {"kind": "buffer_edited", "buffer": 1, "start_line": 0, "end_line": 0, "inserted_line_count": 1}
//! {"kind": "buffer_closed", "buffer": 1}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use std::io::{self, BufRead};

use lite_highlight_store::{HighlightEvent, HighlightStore};
use thiserror::Error;
use tracing::debug;

/// Errors that stop a replay.
#[derive(Debug, Error)]
pub enum ReplayError {
    /// The log could not be read.
    #[error("I/O error reading event log: {0}")]
    Io(#[from] io::Error),

    /// A line is not a valid event.
    #[error("invalid event on line {line}: {source}")]
    Parse {
        /// 1-based line number in the log.
        line: usize,
        /// The underlying JSON error.
        source: serde_json::Error,
    },
}

/// Counts of the events applied by [`replay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaySummary {
    /// Token batches applied.
    pub batches: usize,
    /// Edits applied (including no-op edits).
    pub edits: usize,
    /// Buffer closes applied.
    pub closes: usize,
}

impl ReplaySummary {
    /// Total number of events applied.
    pub fn events(&self) -> usize {
        self.batches + self.edits + self.closes
    }
}

/// Applies every event in `reader` to `store`, in order.
///
/// Stops at the first malformed line; events before it stay applied.
pub fn replay<R: BufRead>(
    reader: R,
    store: &mut HighlightStore,
) -> Result<ReplaySummary, ReplayError> {
    let mut summary = ReplaySummary::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let event: HighlightEvent =
            serde_json::from_str(trimmed).map_err(|source| ReplayError::Parse {
                line: idx + 1,
                source,
            })?;

        match &event {
            HighlightEvent::TokensReady { .. } => summary.batches += 1,
            HighlightEvent::BufferEdited(_) => summary.edits += 1,
            HighlightEvent::BufferClosed { .. } => summary.closes += 1,
        }
        store.handle(event);
    }

    debug!(events = summary.events(), "replayed event log");
    Ok(summary)
}
