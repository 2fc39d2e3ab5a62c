// Chunk: docs/chunks/highlight_store - Buffer-keyed token cache

//! lite-highlight-store: incremental per-line token cache.
//!
//! The store keeps the tokenizer's output for every line of every open
//! buffer, and keeps it aligned with the text as lines are inserted, removed
//! or replaced, so the tokenizer only has to revisit lines whose text changed.
//!
//! # Overview
//!
//! - [`HighlightStore`]: buffer id → [`LineTokenTable`], the per-session cache.
//! - [`LineTokenTable`]: line index → token sequence for one buffer, with the
//!   [`shift`](LineTokenTable::shift) operation that rekeys it after an edit.
//! - [`TokenUpdate`]: one line's fresh tokens, as reported by the tokenizer.
//! - [`HighlightEvent`]: the three inbound event kinds (tokens, edits, closes).
//!
//! # Example
//!
//! ```
//! use lite_highlight_store::{HighlightStore, TokenUpdate};
//! use lite_highlight_tokens::{BufferId, LineEdit, Token};
//!
//! let buffer = BufferId(1);
//! let mut store = HighlightStore::new();
//! store.apply_token_updates(vec![
//!     TokenUpdate::new(buffer, 0, vec![Token::plain(0)]),
//!     TokenUpdate::new(buffer, 1, vec![Token::plain(0), Token::plain(4)]),
//! ]);
//!
//! // Two lines inserted above line 1.
//! store.apply_edit(LineEdit::replace_lines(buffer, 1, 1, 2));
//! assert_eq!(store.lookup(buffer, 3).len(), 2);
//! assert!(store.lookup(buffer, 1).is_empty());
//! ```
//!
//! # Concurrency
//!
//! Every operation is synchronous and runs to completion. Hosts that touch a
//! store from several threads must serialize access themselves, for example
//! by keeping it behind a mutex or by funnelling [`HighlightEvent`]s through
//! one channel.

mod event;
mod line_table;
mod store;
mod update;

pub use event::HighlightEvent;
pub use line_table::LineTokenTable;
#[cfg(feature = "perf-instrumentation")]
pub use store::LookupStats;
pub use store::{HighlightStore, StoreStats};
pub use update::TokenUpdate;
