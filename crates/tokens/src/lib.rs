// Chunk: docs/chunks/token_records - Token records and line edit descriptors

//! lite-highlight-tokens: the values exchanged with the highlight cache.
//!
//! # Overview
//!
//! - [`Token`], [`Style`], [`Color`]: the opaque token records the tokenizer
//!   produces, one ordered sequence per line.
//! - [`BufferId`]: identity of an open document.
//! - [`LineEdit`]: a span of lines replaced by a different number of lines,
//!   as reported by the editor core after every structural edit.
//!
//! # Example
//!
//! ```
//! use lite_highlight_tokens::{BufferId, LineEdit};
//!
//! // Pressing Enter in the middle of line 4 splits it in two.
//! let edit = LineEdit::insert_text(BufferId(1), 4, "\n");
//! assert_eq!(edit.span(), 4..5);
//! assert_eq!(edit.delta(), 1);
//! ```

mod edit;
mod token;
mod types;

pub use edit::LineEdit;
pub use token::{Color, NamedColor, Style, Token};
pub use types::BufferId;
