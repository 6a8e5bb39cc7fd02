//! Border, corner and column-separator elements of a resolved format.
//!
//! An element whose glyph is the empty string is *suppressed*: it draws
//! nothing and takes no columns. That is different from a border that was
//! never set, which resolves to the default glyph.
//!
//! # Example
//!
//! ```rust
//! use tablefmt::{BorderComposer, Format};
//!
//! let hidden = Format::new().border_left("").resolve();
//! let normal = Format::new().resolve();
//!
//! assert_eq!(BorderComposer::new(&hidden).left().width(), 0);
//! assert_eq!(BorderComposer::new(&normal).left().width(), 1);
//! assert_eq!(BorderComposer::new(&normal).horizontal_rule(tablefmt::Edge::Top, 4), "----");
//! ```

use unicode_width::UnicodeWidthChar;

use crate::color::Color;
use crate::resolve::{ResolvedFormat, ResolvedGlyph};
use crate::wrap::display_width;

/// One side of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

/// Every glyph-bearing part of a cell's frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderPart {
    Top,
    Bottom,
    Left,
    Right,
    Corner,
    ColumnSeparator,
}

impl BorderPart {
    pub const ALL: [BorderPart; 6] = [
        BorderPart::Top,
        BorderPart::Bottom,
        BorderPart::Left,
        BorderPart::Right,
        BorderPart::Corner,
        BorderPart::ColumnSeparator,
    ];
}

impl From<Edge> for BorderPart {
    fn from(edge: Edge) -> Self {
        match edge {
            Edge::Top => BorderPart::Top,
            Edge::Right => BorderPart::Right,
            Edge::Bottom => BorderPart::Bottom,
            Edge::Left => BorderPart::Left,
        }
    }
}

/// A borrowed glyph with its colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderElement<'a> {
    pub glyph: &'a str,
    pub color: Color,
    pub background_color: Color,
}

impl<'a> BorderElement<'a> {
    fn from_resolved(glyph: &'a ResolvedGlyph) -> Self {
        Self {
            glyph: &glyph.glyph,
            color: glyph.color,
            background_color: glyph.background_color,
        }
    }

    /// Returns false for a suppressed (empty) element.
    pub fn is_present(&self) -> bool {
        !self.glyph.is_empty()
    }

    /// Terminal columns this element takes when drawn once.
    pub fn width(&self) -> usize {
        display_width(self.glyph)
    }

    /// Repeat the glyph to fill exactly `columns` terminal columns.
    ///
    /// A suppressed element yields an empty string. A wide char that would
    /// overshoot is replaced by spaces.
    pub fn repeat_to(&self, columns: usize) -> String {
        if self.width() == 0 {
            return String::new();
        }
        let mut out = String::with_capacity(columns * self.glyph.len());
        let mut filled = 0;
        for c in self.glyph.chars().cycle() {
            if filled >= columns {
                break;
            }
            let w = c.width().unwrap_or(0);
            if filled + w > columns {
                out.extend(std::iter::repeat_n(' ', columns - filled));
                break;
            }
            out.push(c);
            filled += w;
        }
        out
    }
}

/// Read-only view over the frame parts of a [`ResolvedFormat`].
///
/// The composer never merges anything; it only reads already-resolved
/// values.
#[derive(Debug, Clone, Copy)]
pub struct BorderComposer<'a> {
    format: &'a ResolvedFormat,
}

impl<'a> BorderComposer<'a> {
    pub fn new(format: &'a ResolvedFormat) -> Self {
        Self { format }
    }

    pub fn top(&self) -> BorderElement<'a> {
        BorderElement::from_resolved(&self.format.border.top)
    }

    pub fn bottom(&self) -> BorderElement<'a> {
        BorderElement::from_resolved(&self.format.border.bottom)
    }

    pub fn left(&self) -> BorderElement<'a> {
        BorderElement::from_resolved(&self.format.border.left)
    }

    pub fn right(&self) -> BorderElement<'a> {
        BorderElement::from_resolved(&self.format.border.right)
    }

    pub fn corner(&self) -> BorderElement<'a> {
        BorderElement::from_resolved(&self.format.corner)
    }

    pub fn column_separator(&self) -> BorderElement<'a> {
        BorderElement::from_resolved(&self.format.column_separator)
    }

    /// Look up a part by name.
    pub fn element(&self, part: BorderPart) -> BorderElement<'a> {
        match part {
            BorderPart::Top => self.top(),
            BorderPart::Bottom => self.bottom(),
            BorderPart::Left => self.left(),
            BorderPart::Right => self.right(),
            BorderPart::Corner => self.corner(),
            BorderPart::ColumnSeparator => self.column_separator(),
        }
    }

    /// The border glyph of `edge` repeated across `columns` columns.
    pub fn horizontal_rule(&self, edge: Edge, columns: usize) -> String {
        self.element(edge.into()).repeat_to(columns)
    }

    /// Total columns taken by the left and right borders.
    pub fn frame_width(&self) -> usize {
        self.left().width() + self.right().width()
    }
}
