// Chunk: docs/chunks/line_token_table - Per-buffer line token table
// Chunk: docs/chunks/line_shift - Relocating line entries after structural edits
//!
//! Line token table for one buffer.
//!
//! [`LineTokenTable`] maps a zero-based line index to the token sequence the
//! tokenizer produced for that line. It sits between the tokenizer, which
//! fills lines in whatever order it gets to them, and the renderer, which
//! reads the visible lines every frame.
//!
//! # Holes
//!
//! The table is sparse. Large documents are tokenized lazily around the
//! viewport, so most line indices have no entry. An absent line means "not
//! yet highlighted"; a line stored with an empty `Vec` means "highlighted,
//! no tokens". Readers that go through [`LineTokenTable::tokens`] see an empty
//! slice either way.
//!
//! # Shifting
//!
//! When a span of lines `[start, end)` is replaced by a different number of
//! lines, [`LineTokenTable::shift`] rekeys the table in one pass:
//! - lines before `start` keep their index
//! - lines inside `[start, end)` are dropped (their text changed)
//! - lines at or after `end` move by `delta`
//!
//! Only keys at or after `start` are visited, so an edit near the end of a
//! long file costs proportionally little.

use std::collections::BTreeMap;
use std::ops::Range;

use lite_highlight_tokens::{LineEdit, Token};

/// Token sequences keyed by line index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTokenTable<T = Token> {
    /// Stored lines. `BTreeMap` keeps document order and makes the
    /// split-at-line operations used by `shift` cheap.
    lines: BTreeMap<usize, Vec<T>>,
}

impl<T> LineTokenTable<T> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            lines: BTreeMap::new(),
        }
    }

    /// Returns the number of stored lines (holes are not counted).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if no line has been stored.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the stored tokens for `line`, or `None` if the line has never
    /// been highlighted.
    pub fn get(&self, line: usize) -> Option<&[T]> {
        self.lines.get(&line).map(Vec::as_slice)
    }

    /// Returns the stored tokens for `line`, or an empty slice on a miss.
    pub fn tokens(&self, line: usize) -> &[T] {
        self.get(line).unwrap_or(&[])
    }

    /// Returns true if `line` has an entry (possibly an empty one).
    pub fn contains_line(&self, line: usize) -> bool {
        self.lines.contains_key(&line)
    }

    /// Stores `tokens` for `line`, replacing any previous entry wholesale.
    ///
    /// Returns the replaced sequence, if any.
    pub fn set(&mut self, line: usize, tokens: Vec<T>) -> Option<Vec<T>> {
        self.lines.insert(line, tokens)
    }

    /// Removes the entry for `line`.
    pub fn remove(&mut self, line: usize) -> Option<Vec<T>> {
        self.lines.remove(&line)
    }

    /// Iterates over stored lines in document order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[T])> + '_ {
        self.lines
            .iter()
            .map(|(line, tokens)| (*line, tokens.as_slice()))
    }

    /// Iterates over the indices of stored lines in document order.
    pub fn lines(&self) -> impl Iterator<Item = usize> + '_ {
        self.lines.keys().copied()
    }

    /// Total number of tokens across all stored lines.
    pub fn token_count(&self) -> usize {
        self.lines.values().map(Vec::len).sum()
    }

    /// Clears all entries.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Applies a structural edit to the key space.
    ///
    /// Returns the number of entries that were dropped.
    pub fn apply_edit(&mut self, edit: &LineEdit) -> usize {
        self.shift(edit.span(), edit.delta())
    }

    /// Rekeys the table after the lines in `span` were replaced and the
    /// document grew (or shrank) by `delta` lines.
    ///
    /// - keys below `span.start` are untouched
    /// - keys inside `span` are dropped
    /// - keys at or above `span.end` move to `key + delta`
    ///
    /// Token sequences are moved, never modified. If two entries land on the
    /// same line the one processed later (the higher original line) wins. An
    /// entry whose new index would be negative is dropped. An empty span with
    /// a zero delta returns immediately without touching the table.
    ///
    /// Returns the number of entries that were dropped.
    pub fn shift(&mut self, span: Range<usize>, delta: isize) -> usize {
        let start = span.start;
        let end = span.end.max(start);

        if start == end && delta == 0 {
            return 0;
        }

        // Nothing at or after the edit: nothing to drop or move.
        if self.lines.range(start..).next().is_none() {
            return 0;
        }

        let mut replaced = self.lines.split_off(&start);
        let mut moved = replaced.split_off(&end);
        let mut dropped = replaced.len();

        if delta == 0 {
            self.lines.append(&mut moved);
            return dropped;
        }

        for (line, tokens) in moved {
            match line.checked_add_signed(delta) {
                Some(target) => {
                    self.lines.insert(target, tokens);
                }
                None => dropped += 1,
            }
        }

        dropped
    }
}

impl<T> Default for LineTokenTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
