// Chunk: docs/chunks/highlight_events - Inbound events for the highlight store
//! Inbound event types for the highlight store.
//!
//! The tokenizer, the buffer core and the document lifecycle each talk to the
//! store through one variant of [`HighlightEvent`]. Routing everything through
//! one type lets the host queue events in a single channel (preserving the
//! per-buffer ordering the store relies on) and lets a session be recorded
//! and replayed as JSON lines.

use lite_highlight_tokens::{BufferId, LineEdit, Token};
use serde::{Deserialize, Serialize};

use crate::store::HighlightStore;
use crate::update::TokenUpdate;

/// Everything that can change the contents of a [`HighlightStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HighlightEvent<T = Token> {
    /// The tokenizer finished a batch of lines.
    TokensReady {
        /// Updates in the order they were produced.
        updates: Vec<TokenUpdate<T>>,
    },

    /// A span of lines was replaced in a buffer.
    BufferEdited(LineEdit),

    /// A document was closed.
    BufferClosed {
        /// The closed buffer.
        buffer: BufferId,
    },
}

impl<T> HighlightEvent<T> {
    /// Returns true if this event moves or removes existing entries.
    ///
    /// Used by hosts that want to schedule re-tokenization after the store
    /// has dropped stale lines.
    pub fn is_structural(&self) -> bool {
        match self {
            HighlightEvent::TokensReady { .. } => false,
            HighlightEvent::BufferEdited(edit) => !edit.is_noop(),
            HighlightEvent::BufferClosed { .. } => true,
        }
    }
}

impl<T> HighlightStore<T> {
    /// Routes an event to the matching store operation.
    pub fn handle(&mut self, event: HighlightEvent<T>) {
        match event {
            HighlightEvent::TokensReady { updates } => self.apply_token_updates(updates),
            HighlightEvent::BufferEdited(edit) => self.apply_edit(edit),
            HighlightEvent::BufferClosed { buffer } => {
                self.drop_buffer(buffer);
            }
        }
    }
}
