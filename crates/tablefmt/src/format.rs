//! Partially specified formats for tables, rows, and cells.
//!
//! A [`Format`] records only what the caller set. Every field is an
//! `Option`: `None` means "inherit", `Some` is an explicit value that wins
//! over anything with lower precedence, even when the value is `0` or an
//! empty string. An empty border glyph means "draw nothing here".
//!
//! # Example
//!
//! ```rust
//! use tablefmt::{Color, FontAlign, FontStyle, Format};
//!
//! let header = Format::new()
//!     .font_style([FontStyle::Bold])
//!     .font_align(FontAlign::Center)
//!     .color(Color::Yellow)
//!     .padding_top(0);
//!
//! assert_eq!(header.padding.top, Some(0));
//! assert_eq!(header.padding.left, None);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::{Color, FontStyles};
use crate::position::{FontAlign, Sides};
use crate::resolve::{self, ResolvedFormat};

/// Glyph plus its colors for one border edge, the corner, or the column
/// separator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GlyphFormat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glyph: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
}

impl GlyphFormat {
    /// Returns true if nothing is set.
    pub fn is_unset(&self) -> bool {
        self.glyph.is_none() && self.color.is_none() && self.background_color.is_none()
    }
}

/// Visual configuration for a table, a row, or a cell.
///
/// Built by chaining setters that take and return `self`:
///
/// ```rust
/// use tablefmt::{Color, Format};
///
/// let f = Format::new().width(8).border("").corner("+").color(Color::Red);
/// assert_eq!(f.width, Some(8));
/// assert_eq!(f.border.left.glyph.as_deref(), Some(""));
/// assert_eq!(f.corner.color, Some(Color::Red));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Format {
    /// Total cell width including padding. Unset means "fit the content".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,
    /// Total cell height including padding. Unset means "fit the content".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_align: Option<FontAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyles>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_background_color: Option<Color>,

    pub margin: Sides<Option<usize>>,
    pub padding: Sides<Option<usize>>,

    pub border: Sides<GlyphFormat>,
    #[serde(skip_serializing_if = "GlyphFormat::is_unset")]
    pub corner: GlyphFormat,
    #[serde(skip_serializing_if = "GlyphFormat::is_unset")]
    pub column_separator: GlyphFormat,
}

impl Format {
    /// Creates a format with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    // ==================== Geometry ====================

    /// Set the total width, padding included.
    pub fn width(mut self, value: usize) -> Self {
        self.width = Some(value);
        self
    }

    /// Set the total height, padding included.
    pub fn height(mut self, value: usize) -> Self {
        self.height = Some(value);
        self
    }

    // ==================== Margin ====================

    /// Set all four margins.
    pub fn margin(mut self, value: usize) -> Self {
        self.margin = Sides::all(Some(value));
        self
    }

    pub fn margin_left(mut self, value: usize) -> Self {
        self.margin.left = Some(value);
        self
    }

    pub fn margin_right(mut self, value: usize) -> Self {
        self.margin.right = Some(value);
        self
    }

    pub fn margin_top(mut self, value: usize) -> Self {
        self.margin.top = Some(value);
        self
    }

    pub fn margin_bottom(mut self, value: usize) -> Self {
        self.margin.bottom = Some(value);
        self
    }

    // ==================== Padding ====================

    /// Set all four paddings.
    pub fn padding(mut self, value: usize) -> Self {
        self.padding = Sides::all(Some(value));
        self
    }

    pub fn padding_left(mut self, value: usize) -> Self {
        self.padding.left = Some(value);
        self
    }

    pub fn padding_right(mut self, value: usize) -> Self {
        self.padding.right = Some(value);
        self
    }

    pub fn padding_top(mut self, value: usize) -> Self {
        self.padding.top = Some(value);
        self
    }

    pub fn padding_bottom(mut self, value: usize) -> Self {
        self.padding.bottom = Some(value);
        self
    }

    // ==================== Border ====================

    /// Set the glyph of all four border edges. `""` hides the border.
    pub fn border(mut self, glyph: impl Into<String>) -> Self {
        let glyph = glyph.into();
        self.border.top.glyph = Some(glyph.clone());
        self.border.right.glyph = Some(glyph.clone());
        self.border.bottom.glyph = Some(glyph.clone());
        self.border.left.glyph = Some(glyph);
        self
    }

    /// Set the foreground color of all four border edges.
    pub fn border_color(mut self, color: Color) -> Self {
        self.border.top.color = Some(color);
        self.border.right.color = Some(color);
        self.border.bottom.color = Some(color);
        self.border.left.color = Some(color);
        self
    }

    /// Set the background color of all four border edges.
    pub fn border_background_color(mut self, color: Color) -> Self {
        self.border.top.background_color = Some(color);
        self.border.right.background_color = Some(color);
        self.border.bottom.background_color = Some(color);
        self.border.left.background_color = Some(color);
        self
    }

    pub fn border_left(mut self, glyph: impl Into<String>) -> Self {
        self.border.left.glyph = Some(glyph.into());
        self
    }

    pub fn border_left_color(mut self, color: Color) -> Self {
        self.border.left.color = Some(color);
        self
    }

    pub fn border_left_background_color(mut self, color: Color) -> Self {
        self.border.left.background_color = Some(color);
        self
    }

    pub fn border_right(mut self, glyph: impl Into<String>) -> Self {
        self.border.right.glyph = Some(glyph.into());
        self
    }

    pub fn border_right_color(mut self, color: Color) -> Self {
        self.border.right.color = Some(color);
        self
    }

    pub fn border_right_background_color(mut self, color: Color) -> Self {
        self.border.right.background_color = Some(color);
        self
    }

    pub fn border_top(mut self, glyph: impl Into<String>) -> Self {
        self.border.top.glyph = Some(glyph.into());
        self
    }

    pub fn border_top_color(mut self, color: Color) -> Self {
        self.border.top.color = Some(color);
        self
    }

    pub fn border_top_background_color(mut self, color: Color) -> Self {
        self.border.top.background_color = Some(color);
        self
    }

    pub fn border_bottom(mut self, glyph: impl Into<String>) -> Self {
        self.border.bottom.glyph = Some(glyph.into());
        self
    }

    pub fn border_bottom_color(mut self, color: Color) -> Self {
        self.border.bottom.color = Some(color);
        self
    }

    pub fn border_bottom_background_color(mut self, color: Color) -> Self {
        self.border.bottom.background_color = Some(color);
        self
    }

    // ==================== Corner & Separator ====================

    /// Set the glyph drawn where horizontal and vertical borders meet.
    pub fn corner(mut self, glyph: impl Into<String>) -> Self {
        self.corner.glyph = Some(glyph.into());
        self
    }

    pub fn corner_color(mut self, color: Color) -> Self {
        self.corner.color = Some(color);
        self
    }

    pub fn corner_background_color(mut self, color: Color) -> Self {
        self.corner.background_color = Some(color);
        self
    }

    /// Set the glyph drawn between adjacent cells of a row.
    pub fn column_separator(mut self, glyph: impl Into<String>) -> Self {
        self.column_separator.glyph = Some(glyph.into());
        self
    }

    pub fn column_separator_color(mut self, color: Color) -> Self {
        self.column_separator.color = Some(color);
        self
    }

    pub fn column_separator_background_color(mut self, color: Color) -> Self {
        self.column_separator.background_color = Some(color);
        self
    }

    // ==================== Font ====================

    pub fn font_align(mut self, align: FontAlign) -> Self {
        self.font_align = Some(align);
        self
    }

    /// Add decorations. Calling this twice accumulates rather than replaces.
    pub fn font_style(mut self, styles: impl Into<FontStyles>) -> Self {
        let styles = styles.into();
        self.font_style = Some(self.font_style.map_or(styles, |current| current | styles));
        self
    }

    pub fn font_color(mut self, color: Color) -> Self {
        self.font_color = Some(color);
        self
    }

    pub fn font_background_color(mut self, color: Color) -> Self {
        self.font_background_color = Some(color);
        self
    }

    /// Set the font, border and corner foreground color at once.
    pub fn color(self, color: Color) -> Self {
        self.font_color(color)
            .border_color(color)
            .corner_color(color)
    }

    /// Set the font, border and corner background color at once.
    pub fn background_color(self, color: Color) -> Self {
        self.font_background_color(color)
            .border_background_color(color)
            .corner_background_color(color)
    }

    // ==================== Resolution ====================

    /// Merge with a lower-precedence format. See [`resolve::merge`].
    pub fn merge(&self, lower: &Format) -> Format {
        resolve::merge(self, lower)
    }

    /// Fill every unset field from the built-in defaults.
    pub fn resolve(&self) -> ResolvedFormat {
        resolve::resolve([self])
    }

    // ==================== Serialization ====================

    /// Parse a (possibly partial) format from JSON.
    ///
    /// # Errors
    /// Returns `FormatLoadError` if the text is not a valid format document.
    pub fn from_json(json: &str) -> Result<Self, FormatLoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a (possibly partial) format from TOML.
    ///
    /// # Errors
    /// Returns `FormatLoadError` if the text is not a valid format document.
    pub fn from_toml(toml: &str) -> Result<Self, FormatLoadError> {
        Ok(toml::from_str(toml)?)
    }

    /// Serialize the explicitly set fields to JSON.
    ///
    /// # Errors
    /// Returns `FormatSaveError` if serialization fails.
    pub fn to_json(&self) -> Result<String, FormatSaveError> {
        serde_json::to_string_pretty(self).map_err(FormatSaveError::Json)
    }
}

/// Error loading a format document.
#[derive(Error, Debug)]
pub enum FormatLoadError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Error saving a format document.
#[derive(Error, Debug)]
pub enum FormatSaveError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
