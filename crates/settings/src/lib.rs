// Chunk: docs/chunks/settings_resolver - Default and per-filetype settings

//! lite-highlight-settings: settings resolution with per-filetype overrides.
//!
//! A settings document is a JSON object of dotted keys, plus bracketed
//! filetype blocks that override a subset of them:
//!
//! ```
//! use lite_highlight_settings::parse_str;
//!
//! let resolved = parse_str(r#"{
//!     "editor.tabSize": 4,
//!     "editor.insertSpaces": true,
//!     "[makefile]": { "editor.insertSpaces": false }
//! }"#).unwrap();
//!
//! assert!(resolved.default.insert_spaces);
//! let make = resolved.for_filetype("makefile");
//! assert!(!make.insert_spaces);
//! assert_eq!(make.tab_size, 4);
//! ```
//!
//! # Resilience
//!
//! Resolution only fails when the document cannot be read, is not JSON, or
//! is not an object at the root. Unknown keys are ignored, and a value of the
//! wrong type for a known key falls back to that key's built-in default
//! without affecting the rest of the document.

pub mod error;
mod filetype;
mod resolver;
mod settings;
mod value;

pub use error::{Result, SettingsError};
pub use filetype::FiletypeRegistry;
pub use resolver::{
    default_settings_path, load, load_or_default, parse_str, resolve, ResolvedSettings,
};
pub use settings::{known_keys, LineNumbers, RenderWhitespace, Settings};
pub use settings::{
    DEFAULT_COLOR_THEME, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, DEFAULT_MINIMAP_MAX_COLUMN,
    DEFAULT_TAB_SIZE,
};
