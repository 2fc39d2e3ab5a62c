// Chunk: docs/chunks/line_edits - Line-level edit descriptors

//! Line-level edit descriptors.
//!
//! The highlight cache does not care about columns or bytes: it only needs to
//! know which span of lines was replaced and how many lines took its place.
//! This module provides [`LineEdit`] and helpers that derive one from the
//! usual editor operations (typing text, deleting a range).

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::types::BufferId;

/// A span of lines `[start_line, end_line)` replaced by `inserted_line_count`
/// new lines.
///
/// An `end_line` below `start_line` is treated as an empty span at
/// `start_line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineEdit {
    /// The edited buffer.
    pub buffer: BufferId,
    /// First replaced line.
    pub start_line: usize,
    /// One past the last replaced line.
    pub end_line: usize,
    /// Number of lines that now occupy the replaced span.
    pub inserted_line_count: usize,
}

impl LineEdit {
    /// Creates an edit replacing lines `[start_line, end_line)` with
    /// `inserted_line_count` lines.
    ///
    /// # Example
    ///
    /// ```
    /// use lite_highlight_tokens::{BufferId, LineEdit};
    ///
    /// // Lines 3 and 4 collapse into a single line.
    /// let edit = LineEdit::replace_lines(BufferId(1), 3, 5, 1);
    /// assert_eq!(edit.delta(), -1);
    /// assert_eq!(edit.span(), 3..5);
    /// ```
    pub fn replace_lines(
        buffer: BufferId,
        start_line: usize,
        end_line: usize,
        inserted_line_count: usize,
    ) -> Self {
        Self {
            buffer,
            start_line,
            end_line: end_line.max(start_line),
            inserted_line_count,
        }
    }

    /// Creates an edit for inserting `text` somewhere on line `row`.
    ///
    /// Line `row` itself changes, so it is part of the replaced span; every
    /// newline in `text` adds one line after it.
    ///
    /// # Example
    ///
    /// ```
    /// use lite_highlight_tokens::{BufferId, LineEdit};
    ///
    /// let edit = LineEdit::insert_text(BufferId(1), 2, "a\nb\n");
    /// assert_eq!(edit.span(), 2..3);
    /// assert_eq!(edit.inserted_line_count, 3);
    /// assert_eq!(edit.delta(), 2);
    /// ```
    pub fn insert_text(buffer: BufferId, row: usize, text: &str) -> Self {
        let new_lines = text.bytes().filter(|b| *b == b'\n').count();
        Self::replace_lines(buffer, row, row.saturating_add(1), new_lines + 1)
    }

    /// Creates an edit for deleting a character range that starts on
    /// `start_row` and ends on `end_row`.
    ///
    /// All touched lines are replaced by the single joined line.
    pub fn delete_range(buffer: BufferId, start_row: usize, end_row: usize) -> Self {
        let end_row = end_row.max(start_row);
        Self::replace_lines(buffer, start_row, end_row.saturating_add(1), 1)
    }

    /// The replaced span, normalized so that `start <= end`.
    pub fn span(&self) -> Range<usize> {
        self.start_line..self.end_line.max(self.start_line)
    }

    /// Number of lines the replaced span covered before the edit.
    pub fn removed_line_count(&self) -> usize {
        self.span().len()
    }

    /// Net change in the document's line count.
    pub fn delta(&self) -> isize {
        let inserted = isize::try_from(self.inserted_line_count).unwrap_or(isize::MAX);
        let removed = isize::try_from(self.removed_line_count()).unwrap_or(isize::MAX);
        inserted.saturating_sub(removed)
    }

    /// Returns true for a zero-width edit that inserts nothing.
    ///
    /// Cursor movement and other non-structural notifications arrive in this
    /// shape on every keystroke.
    pub fn is_noop(&self) -> bool {
        self.removed_line_count() == 0 && self.inserted_line_count == 0
    }
}
