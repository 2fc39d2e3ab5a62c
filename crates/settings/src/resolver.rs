// Chunk: docs/chunks/settings_resolver - Default and per-filetype settings

//! Resolving a settings document into default and per-filetype settings.
//!
//! A settings document is a JSON object. Root keys are either dotted setting
//! names or bracketed filetype names:
//!
//! ```json
//! {
//!     "editor.tabSize": 4,
//!     "editor.rulers": [100],
//!     "[python]": {
//!         "editor.rulers": [80]
//!     }
//! }
//! ```
//!
//! Dotted keys are applied in document order to build the default settings.
//! Each bracketed block is then applied on top of a copy of that default, so
//! a block only needs the keys that differ.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{Result, SettingsError};
use crate::filetype::FiletypeRegistry;
use crate::settings::{setter, Settings};
use crate::value;

/// Application name used for the config directory.
const APP_NAME: &str = "lite-highlight";

/// Settings file name.
const SETTINGS_FILENAME: &str = "settings.json";

/// Default settings plus the settings for every filetype with an override
/// block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedSettings {
    /// Settings for files without an override block.
    pub default: Settings,
    /// Settings per filetype name, each already layered on `default`.
    pub filetypes: BTreeMap<String, Settings>,
}

impl ResolvedSettings {
    /// Returns the settings for `filetype`, or the default settings if the
    /// document had no block for it.
    pub fn for_filetype(&self, filetype: &str) -> &Settings {
        self.filetypes.get(filetype).unwrap_or(&self.default)
    }

    /// Returns the settings for the file at `path`.
    pub fn for_path(&self, registry: &FiletypeRegistry, path: &Path) -> &Settings {
        match registry.filetype_for_path(path) {
            Some(filetype) => self.for_filetype(filetype),
            None => &self.default,
        }
    }
}

/// Returns the filetype name if `key` is a bracketed override key.
fn filetype_section(key: &str) -> Option<&str> {
    let name = key.trim().strip_prefix('[')?.strip_suffix(']')?.trim();
    (!name.is_empty()).then_some(name)
}

/// Applies one dotted key. Unknown keys are ignored.
fn apply_setting(settings: &mut Settings, key: &str, value: &Value) {
    let Some(set) = setter(key) else {
        debug!(key, "ignoring unknown setting");
        return;
    };
    if !set(settings, value) {
        warn!(
            key,
            found = value::kind(value),
            "malformed setting value, using built-in default"
        );
    }
}

fn apply_block(settings: &mut Settings, block: &Map<String, Value>) {
    for (key, value) in block {
        apply_setting(settings, key, value);
    }
}

/// Resolves a parsed settings document.
///
/// Fails only if the root is not a JSON object.
pub fn resolve(document: &Value) -> Result<ResolvedSettings> {
    let Value::Object(root) = document else {
        return Err(SettingsError::NotAnObject {
            found: value::kind(document),
        });
    };

    let mut default = Settings::default();
    let mut overrides: Vec<(&str, &Map<String, Value>)> = Vec::new();

    for (key, value) in root {
        match filetype_section(key) {
            Some(filetype) => match value {
                Value::Object(block) => overrides.push((filetype, block)),
                other => warn!(
                    section = key.as_str(),
                    found = value::kind(other),
                    "ignoring filetype override that is not an object"
                ),
            },
            None => apply_setting(&mut default, key, value),
        }
    }

    let mut filetypes = BTreeMap::new();
    for (filetype, block) in overrides {
        let settings = filetypes
            .entry(filetype.to_string())
            .or_insert_with(|| default.clone());
        apply_block(settings, block);
    }

    debug!(filetypes = filetypes.len(), "resolved settings");
    Ok(ResolvedSettings { default, filetypes })
}

/// Parses and resolves a settings document from a string.
pub fn parse_str(input: &str) -> Result<ResolvedSettings> {
    let document: Value = serde_json::from_str(input)?;
    resolve(&document)
}

/// Loads and resolves a settings file.
pub fn load(path: impl AsRef<Path>) -> Result<ResolvedSettings> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|error| SettingsError::Io {
        path: path.to_path_buf(),
        error,
    })?;
    parse_str(&content)
}

/// Loads a settings file, or returns built-in defaults if it does not exist.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<ResolvedSettings> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(ResolvedSettings::default());
    }
    load(path)
}

/// Returns the path to the user settings file.
///
/// This is `<config dir>/lite-highlight/settings.json`, e.g.
/// `~/.config/lite-highlight/settings.json` on Linux and
/// `~/Library/Application Support/lite-highlight/settings.json` on macOS.
/// Returns `None` if the config directory cannot be determined.
pub fn default_settings_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join(APP_NAME).join(SETTINGS_FILENAME))
}
