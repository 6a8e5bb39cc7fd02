//! Field-by-field format resolution.
//!
//! A cell's effective format is found by merging its own [`Format`] over its
//! row's, the row's over the table's, and finally filling the gaps from the
//! built-in defaults:
//!
//! ```rust
//! use tablefmt::{resolve, Format, FontAlign};
//!
//! let table = Format::new().font_align(FontAlign::Right).padding(2);
//! let row = Format::new().padding_top(0);
//! let cell = Format::new().padding_left(5);
//!
//! let effective = resolve::resolve([&cell, &row, &table]);
//! assert_eq!(effective.font_align, FontAlign::Right);
//! assert_eq!(effective.padding.top, 0);
//! assert_eq!(effective.padding.left, 5);
//! assert_eq!(effective.padding.right, 2);
//! assert_eq!(effective.corner.glyph, "+");
//! ```

use tracing::trace;

use crate::color::{Color, FontStyles};
use crate::format::{Format, GlyphFormat};
use crate::position::{FontAlign, Sides};

/// Merge two formats; `primary` wins wherever it has an explicit value.
///
/// Font styles are the exception: when both sides set them the result is
/// the union, since decorations combine rather than replace each other.
/// Neither input is modified.
pub fn merge(primary: &Format, secondary: &Format) -> Format {
    Format {
        width: primary.width.or(secondary.width),
        height: primary.height.or(secondary.height),
        font_align: primary.font_align.or(secondary.font_align),
        font_style: merge_styles(primary.font_style, secondary.font_style),
        font_color: primary.font_color.or(secondary.font_color),
        font_background_color: primary
            .font_background_color
            .or(secondary.font_background_color),
        margin: primary.margin.zip_with(secondary.margin, Option::or),
        padding: primary.padding.zip_with(secondary.padding, Option::or),
        border: primary
            .border
            .each_ref()
            .zip_with(secondary.border.each_ref(), merge_glyph),
        corner: merge_glyph(&primary.corner, &secondary.corner),
        column_separator: merge_glyph(&primary.column_separator, &secondary.column_separator),
    }
}

fn merge_styles(primary: Option<FontStyles>, secondary: Option<FontStyles>) -> Option<FontStyles> {
    match (primary, secondary) {
        (Some(a), Some(b)) => Some(a | b),
        (a, b) => a.or(b),
    }
}

fn merge_glyph(primary: &GlyphFormat, secondary: &GlyphFormat) -> GlyphFormat {
    GlyphFormat {
        glyph: primary.glyph.clone().or_else(|| secondary.glyph.clone()),
        color: primary.color.or(secondary.color),
        background_color: primary.background_color.or(secondary.background_color),
    }
}

/// Merge a precedence chain, highest first, without applying defaults.
///
/// An empty chain yields an empty format.
pub fn merge_chain<'a>(chain: impl IntoIterator<Item = &'a Format>) -> Format {
    chain
        .into_iter()
        .fold(Format::new(), |acc, lower| merge(&acc, lower))
}

/// Merge a precedence chain (highest first) and fill the gaps from the
/// built-in defaults.
pub fn resolve<'a>(chain: impl IntoIterator<Item = &'a Format>) -> ResolvedFormat {
    let merged = merge(&merge_chain(chain), &defaults());
    trace!(
        width = ?merged.width,
        height = ?merged.height,
        "format resolved"
    );
    ResolvedFormat::from_merged(merged)
}

/// The values used when nothing in the chain sets a field.
///
/// Width and height are deliberately left unset: absent means "fit content".
fn defaults() -> Format {
    Format {
        width: None,
        height: None,
        font_align: Some(FontAlign::Left),
        font_style: Some(FontStyles::empty()),
        font_color: Some(Color::None),
        font_background_color: Some(Color::None),
        margin: Sides::all(Some(0)),
        padding: Sides::new(Some(0), Some(1), Some(0), Some(1)),
        border: Sides::new(
            default_glyph("-"),
            default_glyph("|"),
            default_glyph("-"),
            default_glyph("|"),
        ),
        corner: default_glyph("+"),
        column_separator: default_glyph("|"),
    }
}

fn default_glyph(glyph: &str) -> GlyphFormat {
    GlyphFormat {
        glyph: Some(glyph.to_string()),
        color: Some(Color::None),
        background_color: Some(Color::None),
    }
}

/// A glyph with concrete colors. An empty glyph draws nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedGlyph {
    pub glyph: String,
    pub color: Color,
    pub background_color: Color,
}

impl ResolvedGlyph {
    fn from_merged(g: GlyphFormat) -> Self {
        Self {
            glyph: g.glyph.unwrap_or_default(),
            color: g.color.unwrap_or_default(),
            background_color: g.background_color.unwrap_or_default(),
        }
    }
}

/// A format with every field concrete, ready for layout.
///
/// Only `width` and `height` stay optional; `None` there means the size
/// comes from the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFormat {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub font_align: FontAlign,
    pub font_style: FontStyles,
    pub font_color: Color,
    pub font_background_color: Color,
    pub margin: Sides<usize>,
    pub padding: Sides<usize>,
    pub border: Sides<ResolvedGlyph>,
    pub corner: ResolvedGlyph,
    pub column_separator: ResolvedGlyph,
}

impl ResolvedFormat {
    // `merged` has already been merged over `defaults()`, so the fallbacks
    // below only matter if the defaults themselves change.
    fn from_merged(merged: Format) -> Self {
        Self {
            width: merged.width,
            height: merged.height,
            font_align: merged.font_align.unwrap_or_default(),
            font_style: merged.font_style.unwrap_or_default(),
            font_color: merged.font_color.unwrap_or_default(),
            font_background_color: merged.font_background_color.unwrap_or_default(),
            margin: merged.margin.map(Option::unwrap_or_default),
            padding: merged.padding.map(Option::unwrap_or_default),
            border: merged.border.map(ResolvedGlyph::from_merged),
            corner: ResolvedGlyph::from_merged(merged.corner),
            column_separator: ResolvedGlyph::from_merged(merged.column_separator),
        }
    }

    /// Horizontal padding (left + right).
    pub fn horizontal_padding(&self) -> usize {
        self.padding.left + self.padding.right
    }

    /// Vertical padding (top + bottom).
    pub fn vertical_padding(&self) -> usize {
        self.padding.top + self.padding.bottom
    }
}

impl Default for ResolvedFormat {
    fn default() -> Self {
        resolve([] as [&Format; 0])
    }
}
