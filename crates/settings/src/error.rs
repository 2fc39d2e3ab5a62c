// Chunk: docs/chunks/settings_resolver - Settings errors

//! Error types for settings resolution.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort settings resolution.
///
/// Malformed individual values never produce an error; they fall back to the
/// setting's built-in default. Only a document that cannot be read or is not
/// a JSON object at the root is rejected.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The root of the document is not a JSON object.
    #[error("settings document must be a JSON object, found {found}")]
    NotAnObject {
        /// Kind of JSON value found at the root.
        found: &'static str,
    },

    /// The document is not valid JSON.
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The settings file could not be read.
    #[error("I/O error reading {path}: {error}")]
    Io {
        /// Path to the file that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        error: std::io::Error,
    },
}

/// Result type for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;
