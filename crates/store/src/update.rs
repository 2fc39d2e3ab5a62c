// Chunk: docs/chunks/token_updates - Folding tokenizer output into the store

//! Token update batches from the tokenizer.
//!
//! The tokenizer reports results as a flat list of `(buffer, line, tokens)`
//! records. A batch may cover several buffers, arrive in any line order, and
//! repeat a line; folding it left to right gives last-write-wins per
//! `(buffer, line)` without a separate dedup pass.

use std::collections::HashMap;

use lite_highlight_tokens::{BufferId, Token};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::line_table::LineTokenTable;

/// Fresh tokens for one line of one buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUpdate<T = Token> {
    /// The buffer the line belongs to.
    pub buffer: BufferId,
    /// Zero-based line index.
    pub line: usize,
    /// The complete token sequence for the line.
    pub tokens: Vec<T>,
}

impl<T> TokenUpdate<T> {
    pub fn new(buffer: BufferId, line: usize, tokens: Vec<T>) -> Self {
        Self {
            buffer,
            line,
            tokens,
        }
    }
}

/// Applies `batch` in order, creating buffer tables on first sight.
pub(crate) fn fold_updates<T, I>(buffers: &mut HashMap<BufferId, LineTokenTable<T>>, batch: I)
where
    I: IntoIterator<Item = TokenUpdate<T>>,
{
    let mut applied = 0usize;
    for update in batch {
        let table = buffers.entry(update.buffer).or_insert_with(|| {
            trace!(buffer = %update.buffer, "tracking new buffer");
            LineTokenTable::new()
        });
        table.set(update.line, update.tokens);
        applied += 1;
    }
    trace!(applied, "applied token batch");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_interleaved_buffers() {
        let mut buffers: HashMap<BufferId, LineTokenTable<u8>> = HashMap::new();
        fold_updates(
            &mut buffers,
            vec![
                TokenUpdate::new(BufferId(2), 9, vec![1]),
                TokenUpdate::new(BufferId(1), 0, vec![2]),
                TokenUpdate::new(BufferId(2), 3, vec![3]),
            ],
        );
        assert_eq!(buffers.len(), 2);
        assert_eq!(buffers[&BufferId(2)].tokens(9), &[1]);
        assert_eq!(buffers[&BufferId(2)].tokens(3), &[3]);
        assert_eq!(buffers[&BufferId(1)].tokens(0), &[2]);
    }

    #[test]
    fn test_fold_later_entry_wins() {
        let mut buffers: HashMap<BufferId, LineTokenTable<u8>> = HashMap::new();
        fold_updates(
            &mut buffers,
            vec![
                TokenUpdate::new(BufferId(1), 5, vec![1, 1]),
                TokenUpdate::new(BufferId(1), 5, vec![2]),
            ],
        );
        assert_eq!(buffers[&BufferId(1)].tokens(5), &[2]);
        assert_eq!(buffers[&BufferId(1)].len(), 1);
    }

    #[test]
    fn test_fold_empty_batch_creates_nothing() {
        let mut buffers: HashMap<BufferId, LineTokenTable<u8>> = HashMap::new();
        fold_updates(&mut buffers, Vec::new());
        assert!(buffers.is_empty());
    }
}
