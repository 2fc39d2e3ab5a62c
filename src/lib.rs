// Chunk: docs/chunks/workspace - Workspace layout and shared dependencies

//! lite-highlight: an incremental per-line syntax highlight cache.
//!
//! This crate ties the workspace together:
//!
//! - [`tokens`]: token records and line edit descriptors
//! - [`store`]: the per-buffer line token cache and its shift engine
//! - [`settings`]: default and per-filetype settings resolution
//! - [`replay`](mod@replay): replaying recorded highlight events
//!
//! # Example
//!
//! ```
//! use lite_highlight::store::{HighlightStore, TokenUpdate};
//! use lite_highlight::tokens::{BufferId, LineEdit, Token};
//!
//! let buffer = BufferId(7);
//! let mut store = HighlightStore::new();
//! store.apply_token_updates(vec![TokenUpdate::new(buffer, 3, vec![Token::plain(0)])]);
//!
//! // Delete line 1; line 3 moves up to line 2.
//! store.apply_edit(LineEdit::replace_lines(buffer, 1, 2, 0));
//! assert_eq!(store.lookup(buffer, 2), &[Token::plain(0)]);
//! ```

pub mod replay;

pub use lite_highlight_settings as settings;
pub use lite_highlight_store as store;
pub use lite_highlight_tokens as tokens;

pub use replay::{replay, ReplayError, ReplaySummary};
