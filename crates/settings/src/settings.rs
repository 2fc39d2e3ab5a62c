// Chunk: docs/chunks/settings_resolver - Settings model and key table

//! The settings model and the table of recognized keys.
//!
//! Every recognized key maps to a setter in [`SETTERS`]. A setter parses its
//! JSON value and assigns the field, or assigns the field's built-in default
//! when the value has the wrong shape. Setters report which of the two
//! happened so the resolver can log it.

use serde::Serialize;
use serde_json::Value;

use crate::value;

pub const DEFAULT_FONT_FAMILY: &str = "JetBrains Mono";
pub const DEFAULT_FONT_SIZE: f64 = 14.0;
pub const DEFAULT_TAB_SIZE: usize = 4;
pub const DEFAULT_MINIMAP_MAX_COLUMN: usize = 120;
pub const DEFAULT_COLOR_THEME: &str = "Catppuccin Mocha";

/// Line number gutter mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineNumbers {
    #[default]
    On,
    Off,
    Relative,
}

impl LineNumbers {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "on" => Some(LineNumbers::On),
            "off" => Some(LineNumbers::Off),
            "relative" => Some(LineNumbers::Relative),
            _ => None,
        }
    }
}

/// Which whitespace characters are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderWhitespace {
    All,
    Boundary,
    #[default]
    Selection,
    None,
}

impl RenderWhitespace {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "all" => Some(RenderWhitespace::All),
            "boundary" => Some(RenderWhitespace::Boundary),
            "selection" => Some(RenderWhitespace::Selection),
            "none" => Some(RenderWhitespace::None),
            _ => None,
        }
    }
}

/// Resolved editor settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    /// `editor.fontFamily`
    pub font_family: String,
    /// `editor.fontSize`, always positive.
    pub font_size: f64,
    /// `editor.tabSize`, always at least 1.
    pub tab_size: usize,
    /// `editor.insertSpaces`
    pub insert_spaces: bool,
    /// `editor.detectIndentation`
    pub detect_indentation: bool,
    /// `editor.lineNumbers`
    pub line_numbers: LineNumbers,
    /// `editor.renderWhitespace`
    pub render_whitespace: RenderWhitespace,
    /// `editor.renderIndentGuides`
    pub render_indent_guides: bool,
    /// `editor.rulers`: columns at which to draw vertical rulers.
    pub rulers: Vec<usize>,
    /// `editor.minimap.enabled`
    pub minimap_enabled: bool,
    /// `editor.minimap.maxColumn`
    pub minimap_max_column: usize,
    /// `editor.largeFileOptimizations`: skip highlighting for very large files.
    pub large_file_optimizations: bool,
    /// `files.exclude`: glob patterns hidden from file pickers.
    pub files_exclude: Vec<String>,
    /// `workbench.colorTheme`
    pub color_theme: String,
}

fn default_files_exclude() -> Vec<String> {
    vec![".git".to_string(), "node_modules".to_string(), "target".to_string()]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            tab_size: DEFAULT_TAB_SIZE,
            insert_spaces: true,
            detect_indentation: true,
            line_numbers: LineNumbers::default(),
            render_whitespace: RenderWhitespace::default(),
            render_indent_guides: true,
            rulers: Vec::new(),
            minimap_enabled: true,
            minimap_max_column: DEFAULT_MINIMAP_MAX_COLUMN,
            large_file_optimizations: true,
            files_exclude: default_files_exclude(),
            color_theme: DEFAULT_COLOR_THEME.to_string(),
        }
    }
}

// =============================================================================
// Key Table
// =============================================================================

/// Parses a value into a setting. Returns false if the built-in default was
/// used because the value was malformed.
pub(crate) type Setter = fn(&mut Settings, &Value) -> bool;

fn assign<T>(slot: &mut T, parsed: Option<T>, default: impl FnOnce() -> T) -> bool {
    match parsed {
        Some(value) => {
            *slot = value;
            true
        }
        None => {
            *slot = default();
            false
        }
    }
}

/// Every recognized dotted key and its setter.
pub(crate) static SETTERS: &[(&str, Setter)] = &[
    ("editor.fontFamily", |s, v| {
        assign(
            &mut s.font_family,
            value::string(v).filter(|name| !name.trim().is_empty()),
            || DEFAULT_FONT_FAMILY.to_string(),
        )
    }),
    ("editor.fontSize", |s, v| {
        assign(
            &mut s.font_size,
            value::number(v).filter(|size| *size > 0.0),
            || DEFAULT_FONT_SIZE,
        )
    }),
    ("editor.tabSize", |s, v| {
        assign(
            &mut s.tab_size,
            value::count(v).filter(|n| *n > 0),
            || DEFAULT_TAB_SIZE,
        )
    }),
    ("editor.insertSpaces", |s, v| {
        assign(&mut s.insert_spaces, value::boolean(v), || true)
    }),
    ("editor.detectIndentation", |s, v| {
        assign(&mut s.detect_indentation, value::boolean(v), || true)
    }),
    ("editor.lineNumbers", |s, v| {
        assign(
            &mut s.line_numbers,
            v.as_str().and_then(LineNumbers::parse),
            LineNumbers::default,
        )
    }),
    ("editor.renderWhitespace", |s, v| {
        assign(
            &mut s.render_whitespace,
            v.as_str().and_then(RenderWhitespace::parse),
            RenderWhitespace::default,
        )
    }),
    ("editor.renderIndentGuides", |s, v| {
        assign(&mut s.render_indent_guides, value::boolean(v), || true)
    }),
    ("editor.rulers", |s, v| {
        assign(&mut s.rulers, value::count_list(v), Vec::new)
    }),
    ("editor.minimap.enabled", |s, v| {
        assign(&mut s.minimap_enabled, value::boolean(v), || true)
    }),
    ("editor.minimap.maxColumn", |s, v| {
        assign(
            &mut s.minimap_max_column,
            value::count(v).filter(|n| *n > 0),
            || DEFAULT_MINIMAP_MAX_COLUMN,
        )
    }),
    ("editor.largeFileOptimizations", |s, v| {
        assign(&mut s.large_file_optimizations, value::boolean(v), || true)
    }),
    ("files.exclude", |s, v| {
        assign(&mut s.files_exclude, value::string_list(v), default_files_exclude)
    }),
    ("workbench.colorTheme", |s, v| {
        assign(&mut s.color_theme, value::string(v), || {
            DEFAULT_COLOR_THEME.to_string()
        })
    }),
];

/// Returns the setter for `key`, if the key is recognized.
pub(crate) fn setter(key: &str) -> Option<Setter> {
    SETTERS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, setter)| *setter)
}

/// Returns every recognized setting key, in table order.
pub fn known_keys() -> impl Iterator<Item = &'static str> {
    SETTERS.iter().map(|(name, _)| *name)
}
