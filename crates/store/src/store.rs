// Chunk: docs/chunks/highlight_store - Buffer-keyed token cache

//! The highlight store: every open buffer's line token table.
//!
//! One [`HighlightStore`] lives per editor session. It is fed by three kinds
//! of events (token batches, structural edits, buffer closes) and read by the
//! renderer through [`HighlightStore::lookup`], which never fails: a line that
//! has not been highlighted yet renders as plain text until its tokens arrive.
//!
//! # Lifecycle
//!
//! - A buffer's table is created by the first token update naming it.
//! - Edits to a buffer without a table are ignored; they never create one.
//! - [`HighlightStore::drop_buffer`] must be called when a document closes,
//!   otherwise its table lives as long as the store.
//!
//! # Ordering
//!
//! Edits and token batches for the same buffer must be applied in the order
//! the editing session produced them. The store cannot detect a violation:
//! an out-of-order edit silently misaligns lines until they are re-tokenized.

use std::collections::HashMap;

use lite_highlight_tokens::{BufferId, LineEdit, Token};
use tracing::{debug, trace};

use crate::line_table::LineTokenTable;
use crate::update::{fold_updates, TokenUpdate};

/// Size accounting for a [`HighlightStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreStats {
    /// Number of tracked buffers.
    pub buffers: usize,
    /// Number of stored lines across all buffers.
    pub lines: usize,
    /// Number of stored tokens across all buffers.
    pub tokens: usize,
}

/// Token cache for all open buffers.
#[derive(Debug)]
pub struct HighlightStore<T = Token> {
    buffers: HashMap<BufferId, LineTokenTable<T>>,
    #[cfg(feature = "perf-instrumentation")]
    lookup_stats: LookupStats,
}

impl<T> HighlightStore<T> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            buffers: HashMap::new(),
            #[cfg(feature = "perf-instrumentation")]
            lookup_stats: LookupStats::new(),
        }
    }

    /// Returns the tokens for `line` of `buffer`.
    ///
    /// Unknown buffers, unknown lines and lines highlighted with no tokens
    /// all return an empty slice.
    pub fn lookup(&self, buffer: BufferId, line: usize) -> &[T] {
        let tokens = self.buffers.get(&buffer).and_then(|table| table.get(line));

        #[cfg(feature = "perf-instrumentation")]
        self.lookup_stats.record(tokens.is_some());

        tokens.unwrap_or(&[])
    }

    /// Applies a batch of token updates in order.
    ///
    /// Each update overwrites its line wholesale. When the batch names the
    /// same `(buffer, line)` more than once, the later update wins.
    pub fn apply_token_updates<I>(&mut self, batch: I)
    where
        I: IntoIterator<Item = TokenUpdate<T>>,
    {
        fold_updates(&mut self.buffers, batch);
    }

    /// Stores tokens for a single line.
    ///
    /// Equivalent to a one-element [`apply_token_updates`](Self::apply_token_updates).
    pub fn set_line_tokens(&mut self, buffer: BufferId, line: usize, tokens: Vec<T>) {
        fold_updates(
            &mut self.buffers,
            std::iter::once(TokenUpdate::new(buffer, line, tokens)),
        );
    }

    /// Shifts `edit.buffer`'s table to follow a structural edit.
    ///
    /// Does nothing if the buffer has no table yet.
    pub fn apply_edit(&mut self, edit: LineEdit) {
        if edit.is_noop() {
            return;
        }

        let Some(table) = self.buffers.get_mut(&edit.buffer) else {
            trace!(buffer = %edit.buffer, "ignoring edit for untracked buffer");
            return;
        };

        let dropped = table.apply_edit(&edit);
        trace!(
            buffer = %edit.buffer,
            start = edit.start_line,
            end = edit.end_line,
            delta = edit.delta(),
            dropped,
            "shifted line tokens"
        );
    }

    /// Forgets everything stored for `buffer`.
    ///
    /// Returns true if the buffer was tracked.
    pub fn drop_buffer(&mut self, buffer: BufferId) -> bool {
        match self.buffers.remove(&buffer) {
            Some(table) => {
                debug!(%buffer, lines = table.len(), "dropped buffer tokens");
                true
            }
            None => false,
        }
    }

    /// Returns the table for `buffer`, if it is tracked.
    pub fn table(&self, buffer: BufferId) -> Option<&LineTokenTable<T>> {
        self.buffers.get(&buffer)
    }

    /// Returns true if `buffer` has a table.
    pub fn is_tracked(&self, buffer: BufferId) -> bool {
        self.buffers.contains_key(&buffer)
    }

    /// Number of tracked buffers.
    pub fn buffer_count(&self) -> usize {
        self.buffers.len()
    }

    /// Iterates over tracked buffer ids in no particular order.
    pub fn buffers(&self) -> impl Iterator<Item = BufferId> + '_ {
        self.buffers.keys().copied()
    }

    /// Computes size accounting across all buffers.
    pub fn stats(&self) -> StoreStats {
        self.buffers
            .values()
            .fold(StoreStats::default(), |mut stats, table| {
                stats.buffers += 1;
                stats.lines += table.len();
                stats.tokens += table.token_count();
                stats
            })
    }

    /// Drops every buffer.
    pub fn clear(&mut self) {
        self.buffers.clear();
    }

    /// Lookup hit/miss counters.
    #[cfg(feature = "perf-instrumentation")]
    pub fn lookup_stats(&self) -> &LookupStats {
        &self.lookup_stats
    }
}

impl<T> Default for HighlightStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Performance Instrumentation
// =============================================================================

/// Lookup counters for debugging and tuning.
///
/// Counters use `Cell` so that `lookup` can stay `&self`.
#[cfg(feature = "perf-instrumentation")]
#[derive(Debug, Default)]
pub struct LookupStats {
    hits: std::cell::Cell<usize>,
    misses: std::cell::Cell<usize>,
}

#[cfg(feature = "perf-instrumentation")]
impl LookupStats {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, hit: bool) {
        let counter = if hit { &self.hits } else { &self.misses };
        counter.set(counter.get() + 1);
    }

    /// Lookups that found a stored line.
    pub fn hits(&self) -> usize {
        self.hits.get()
    }

    /// Lookups that fell back to the empty sequence.
    pub fn misses(&self) -> usize {
        self.misses.get()
    }

    /// Returns the hit rate as a percentage (0.0 to 100.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits() + self.misses();
        if total == 0 {
            0.0
        } else {
            (self.hits() as f64 / total as f64) * 100.0
        }
    }

    /// Resets both counters to zero.
    pub fn reset(&self) {
        self.hits.set(0);
        self.misses.set(0);
    }
}

// =============================================================================
// Tests
// =============================================================================
