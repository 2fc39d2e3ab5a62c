// Chunk: docs/chunks/highlight_store - Buffer-keyed token cache

//! Integration tests for realistic token/edit sequences.
//!
//! These tests drive the store the way an editor session does: token batches
//! interleaved with structural edits, checking that every surviving line
//! still carries the tokens that were produced for its text.

use lite_highlight_store::{HighlightEvent, HighlightStore, StoreStats, TokenUpdate};
use lite_highlight_tokens::{BufferId, Color, LineEdit, Style, Token};

const BUF: BufferId = BufferId(1);

/// A token whose style encodes the line it was produced for, so that a
/// relocated entry can be traced back to its origin.
fn marker(line: usize) -> Vec<Token> {
    vec![Token::new(
        0,
        Style {
            fg: Color::Indexed(line as u8),
            ..Style::default()
        },
    )]
}

fn seed(store: &mut HighlightStore, lines: &[usize]) {
    store.apply_token_updates(
        lines
            .iter()
            .map(|&line| TokenUpdate::new(BUF, line, marker(line))),
    );
}

fn stored_lines(store: &HighlightStore) -> Vec<usize> {
    store
        .table(BUF)
        .map(|table| table.lines().collect())
        .unwrap_or_default()
}

#[test]
fn test_never_written_lines_are_empty() {
    let store: HighlightStore = HighlightStore::new();
    for line in [0, 1, 1_000_000] {
        assert!(store.lookup(BUF, line).is_empty());
        assert!(store.lookup(BufferId(99), line).is_empty());
    }
}

#[test]
fn test_write_then_read() {
    let mut store = HighlightStore::new();
    let tokens = vec![Token::plain(0), Token::plain(3)];
    store.apply_token_updates(vec![TokenUpdate::new(BUF, 5, tokens.clone())]);
    assert_eq!(store.lookup(BUF, 5), tokens.as_slice());
}

#[test]
fn test_last_write_wins_within_batch() {
    let mut store = HighlightStore::new();
    store.apply_token_updates(vec![
        TokenUpdate::new(BUF, 5, vec![Token::plain(1)]),
        TokenUpdate::new(BUF, 5, vec![Token::plain(2)]),
    ]);
    assert_eq!(store.lookup(BUF, 5), &[Token::plain(2)]);
}

#[test]
fn test_pure_insertion_shift() {
    let mut store = HighlightStore::new();
    seed(&mut store, &[3, 4, 5]);

    store.apply_edit(LineEdit::replace_lines(BUF, 4, 4, 2));

    assert_eq!(stored_lines(&store), vec![3, 6, 7]);
    assert_eq!(store.lookup(BUF, 3), marker(3).as_slice());
    assert_eq!(store.lookup(BUF, 6), marker(4).as_slice());
    assert_eq!(store.lookup(BUF, 7), marker(5).as_slice());
}

#[test]
fn test_replacement_with_drop() {
    let mut store = HighlightStore::new();
    seed(&mut store, &[2, 3, 4, 5]);

    store.apply_edit(LineEdit::replace_lines(BUF, 3, 5, 1));

    assert_eq!(stored_lines(&store), vec![2, 4]);
    assert_eq!(store.lookup(BUF, 2), marker(2).as_slice());
    assert!(store.lookup(BUF, 3).is_empty());
    assert_eq!(store.lookup(BUF, 4), marker(5).as_slice());
}

#[test]
fn test_zero_width_edit_is_noop() {
    let mut store = HighlightStore::new();
    seed(&mut store, &[0, 2, 4, 8]);
    let before = store.table(BUF).cloned();

    for line in [0, 3, 8, 500] {
        store.apply_edit(LineEdit::replace_lines(BUF, line, line, 0));
    }

    assert_eq!(store.table(BUF).cloned(), before);
}

#[test]
fn test_buffer_close_frees_table() {
    let mut store = HighlightStore::new();
    seed(&mut store, &[0, 1, 2]);
    store.set_line_tokens(BufferId(2), 0, marker(0));

    store.handle(HighlightEvent::BufferClosed { buffer: BUF });

    for line in 0..3 {
        assert!(store.lookup(BUF, line).is_empty());
    }
    assert!(store.buffers().all(|buffer| buffer != BUF));
    assert_eq!(
        store.stats(),
        StoreStats {
            buffers: 1,
            lines: 1,
            tokens: 1
        }
    );
}

#[test]
fn test_edit_on_untracked_buffer() {
    let mut store = HighlightStore::new();
    seed(&mut store, &[0]);

    store.apply_edit(LineEdit::replace_lines(BufferId(2), 0, 3, 10));
    store.apply_edit(LineEdit::insert_text(BufferId(3), 0, "\n\n"));

    assert_eq!(store.buffers().collect::<Vec<_>>(), vec![BUF]);
    assert!(store.lookup(BufferId(2), 10).is_empty());
}

#[test]
fn test_typing_session() {
    // A five-line file, fully highlighted.
    let mut store = HighlightStore::new();
    seed(&mut store, &[0, 1, 2, 3, 4]);

    // Enter at the end of line 1: line 1 changes, a new line 2 appears.
    store.handle(HighlightEvent::BufferEdited(LineEdit::insert_text(
        BUF, 1, "\n",
    )));
    assert_eq!(stored_lines(&store), vec![0, 3, 4, 5]);
    assert_eq!(store.lookup(BUF, 3), marker(2).as_slice());

    // The tokenizer catches up on the two changed lines.
    store.handle(HighlightEvent::TokensReady {
        updates: vec![
            TokenUpdate::new(BUF, 2, marker(20)),
            TokenUpdate::new(BUF, 1, marker(10)),
        ],
    });
    assert_eq!(stored_lines(&store), vec![0, 1, 2, 3, 4, 5]);

    // Backspace at the start of line 2 joins it onto line 1.
    store.handle(HighlightEvent::BufferEdited(LineEdit::delete_range(
        BUF, 1, 2,
    )));
    assert_eq!(stored_lines(&store), vec![0, 2, 3, 4]);
    assert_eq!(store.lookup(BUF, 2), marker(2).as_slice());
    assert_eq!(store.lookup(BUF, 4), marker(4).as_slice());
    assert!(store.lookup(BUF, 1).is_empty());
}

#[test]
fn test_paste_block_then_delete_it() {
    let mut store = HighlightStore::new();
    seed(&mut store, &[0, 10, 20]);

    // Paste three full lines before line 10.
    store.apply_edit(LineEdit::replace_lines(BUF, 10, 10, 3));
    assert_eq!(stored_lines(&store), vec![0, 13, 23]);

    // Delete them again.
    store.apply_edit(LineEdit::replace_lines(BUF, 10, 13, 0));
    assert_eq!(stored_lines(&store), vec![0, 10, 20]);
    assert_eq!(store.lookup(BUF, 10), marker(10).as_slice());
    assert_eq!(store.lookup(BUF, 20), marker(20).as_slice());
}

#[test]
fn test_explicit_empty_line_survives_shift() {
    let mut store: HighlightStore = HighlightStore::new();
    store.set_line_tokens(BUF, 4, Vec::new());
    store.apply_edit(LineEdit::replace_lines(BUF, 0, 0, 1));

    let table = store.table(BUF).expect("buffer stays tracked");
    assert!(table.contains_line(5));
    assert!(!table.contains_line(4));
    assert!(store.lookup(BUF, 5).is_empty());
}
