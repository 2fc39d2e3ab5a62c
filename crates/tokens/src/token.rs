// Chunk: docs/chunks/token_records - Token record and style types
//!
//! Token records as produced by the tokenizer.
//!
//! A [`Token`] marks the column where a styled run begins; the run extends to
//! the next token's column (or the end of the line). A line's tokens are an
//! ordered `Vec<Token>`. The cache never looks inside a token: it only stores,
//! relocates and hands back whole sequences.
//!
//! # Styling
//!
//! - [`Color`]: Named (16 ANSI), indexed (256), and RGB
//! - [`Style`]: foreground/background plus the font attributes a theme can set
//! - [`Token`]: a column index paired with a style

use serde::{Deserialize, Serialize};

// =============================================================================
// Color Types
// =============================================================================

/// The 16 standard ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

/// Token color.
///
/// `Default` defers to the theme's foreground/background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// Theme default.
    #[default]
    Default,
    /// Named ANSI colors (0-15).
    Named(NamedColor),
    /// 256-color palette index.
    Indexed(u8),
    /// 24-bit RGB color.
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    /// Creates an RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }
}

// =============================================================================
// Style
// =============================================================================

/// Display attributes of a token.
///
/// # Example
///
/// ```
/// use lite_highlight_tokens::{Color, Style};
///
/// let keyword = Style {
///     fg: Color::rgb(0xcb, 0xa6, 0xf7),
///     bold: true,
///     ..Style::default()
/// };
/// assert!(!keyword.italic);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Foreground color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
    /// Bold weight.
    pub bold: bool,
    /// Italic slant.
    pub italic: bool,
    /// Underline.
    pub underline: bool,
}

// =============================================================================
// Token
// =============================================================================

/// One lexical token's display attributes, starting at `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Character column where this token starts.
    pub index: usize,
    /// The style applied from `index` up to the next token.
    #[serde(default)]
    pub style: Style,
}

impl Token {
    /// Creates a token starting at `index` with the given style.
    pub fn new(index: usize, style: Style) -> Self {
        Self { index, style }
    }

    /// Creates an unstyled token (default style).
    pub fn plain(index: usize) -> Self {
        Self {
            index,
            style: Style::default(),
        }
    }
}
