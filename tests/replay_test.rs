// Chunk: docs/chunks/event_replay - Replaying recorded highlight events

//! End-to-end replay of a recorded editing session.

use std::fs::{self, File};
use std::io::BufReader;

use lite_highlight::store::{HighlightStore, StoreStats};
use lite_highlight::tokens::{BufferId, Token};
use lite_highlight::{replay, ReplayError};
use tempfile::TempDir;

const SESSION: &str = r#"
# two buffers opened and highlighted
{"kind": "tokens_ready", "updates": [{"buffer": 1, "line": 0, "tokens": [{"index": 0}]}, {"buffer": 1, "line": 1, "tokens": [{"index": 0}, {"index": 4}]}, {"buffer": 2, "line": 0, "tokens": []}]}
{"kind": "tokens_ready", "updates": [{"buffer": 1, "line": 2, "tokens": [{"index": 2}]}]}

# newline typed at the end of line 0 of buffer 1
{"kind": "buffer_edited", "buffer": 1, "start_line": 0, "end_line": 1, "inserted_line_count": 2}
{"kind": "tokens_ready", "updates": [{"buffer": 1, "line": 0, "tokens": [{"index": 1}]}]}

# cursor movement only
{"kind": "buffer_edited", "buffer": 1, "start_line": 3, "end_line": 3, "inserted_line_count": 0}

# buffer 2 closed
{"kind": "buffer_closed", "buffer": 2}
"#;

#[test]
fn test_replay_session_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.jsonl");
    fs::write(&path, SESSION).unwrap();

    let mut store = HighlightStore::new();
    let summary = replay(BufReader::new(File::open(&path).unwrap()), &mut store).unwrap();

    assert_eq!(summary.batches, 3);
    assert_eq!(summary.edits, 2);
    assert_eq!(summary.closes, 1);

    let buffer = BufferId(1);
    assert_eq!(store.lookup(buffer, 0), &[Token::plain(1)]);
    // Line 0's old tokens were dropped; line 1 is the new, not yet highlighted line.
    assert!(store.lookup(buffer, 1).is_empty());
    assert_eq!(store.lookup(buffer, 2), &[Token::plain(0), Token::plain(4)]);
    assert_eq!(store.lookup(buffer, 3), &[Token::plain(2)]);

    assert!(!store.is_tracked(BufferId(2)));
    assert_eq!(
        store.stats(),
        StoreStats {
            buffers: 1,
            lines: 3,
            tokens: 4
        }
    );
}

#[test]
fn test_replay_stops_at_malformed_event() {
    let log = concat!(
        "{\"kind\": \"tokens_ready\", \"updates\": [{\"buffer\": 1, \"line\": 0, \"tokens\": []}]}\n",
        "{\"kind\": \"buffer_edited\", \"buffer\": 1, \"start_line\": -1}\n",
        "{\"kind\": \"buffer_closed\", \"buffer\": 1}\n",
    );

    let mut store = HighlightStore::new();
    let err = replay(log.as_bytes(), &mut store).unwrap_err();

    match err {
        ReplayError::Parse { line, .. } => assert_eq!(line, 2),
        other => panic!("unexpected error: {other}"),
    }
    assert!(store.is_tracked(BufferId(1)));
}
