//! Table layout: column widths, row heights, alignment and frame assembly.
//!
//! Every cell is resolved (cell, row, table, defaults), wrapped to its
//! column, and framed with the glyphs its own format asks for:
//!
//! - each row draws a top rule; the last row also draws a bottom rule
//! - a rule junction gets the cell's corner glyph only where the row has a
//!   vertical element (left border, column separator, right border)
//! - a rule made entirely of empty glyphs is left out
//! - table margins surround the finished grid
//!
//! Tabs in cell text are expanded to spaces before anything is measured. A
//! column is never narrower than its widest wrapped line plus padding.

use std::borrow::Cow;

use tracing::debug;

use crate::ansi::{self, visible_width};
use crate::border::{BorderComposer, BorderElement, Edge};
use crate::color::{Color, FontStyles};
use crate::format::Format;
use crate::position::Sides;
use crate::resolve::{self, ResolvedFormat};
use crate::table::{Cell, Table};
use crate::wrap::{display_width, wrap_lines};

/// Output switches for [`Printer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit SGR escape sequences for colors and decorations.
    pub colors: bool,
}

impl RenderOptions {
    /// Colors on.
    pub const fn colored() -> Self {
        Self { colors: true }
    }

    /// No escape sequences at all.
    pub const fn plain() -> Self {
        Self { colors: false }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::colored()
    }
}

/// Columns a tab in cell text expands to.
const TAB_WIDTH: usize = 4;

/// A resolved cell with its text already wrapped to the column.
#[derive(Debug)]
struct LaidOutCell {
    format: ResolvedFormat,
    lines: Vec<String>,
}

/// Renders a [`Table`] into terminal text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Printer {
    options: RenderOptions,
}

impl Printer {
    pub const fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Lay out and draw `table`. Lines are joined by `\n` with no trailing
    /// newline; an empty table renders as an empty string.
    pub fn render(&self, table: &Table) -> String {
        let columns = table.column_count();
        if columns == 0 {
            return String::new();
        }

        let empty = Format::new();
        let formats: Vec<Vec<ResolvedFormat>> = table
            .rows()
            .iter()
            .map(|row| {
                (0..columns)
                    .map(|c| {
                        let cell = row.cell(c).map_or(&empty, Cell::format);
                        resolve::resolve([cell, row.format(), table.format()])
                    })
                    .collect()
            })
            .collect();

        let mut widths: Vec<usize> = (0..columns)
            .map(|c| {
                formats
                    .iter()
                    .enumerate()
                    .map(|(r, row)| {
                        let format = &row[c];
                        format.width.unwrap_or_else(|| {
                            content_width(&cell_text(table, r, c)) + format.horizontal_padding()
                        })
                    })
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let grid: Vec<Vec<LaidOutCell>> = formats
            .into_iter()
            .enumerate()
            .map(|(r, row)| {
                row.into_iter()
                    .enumerate()
                    .map(|(c, format)| {
                        let inner = widths[c].saturating_sub(format.horizontal_padding());
                        let lines = wrap_lines(&cell_text(table, r, c), inner);
                        LaidOutCell { format, lines }
                    })
                    .collect()
            })
            .collect();

        // Text that cannot be wrapped narrow enough widens its column.
        for row in &grid {
            for (c, cell) in row.iter().enumerate() {
                let text = cell.lines.iter().map(|l| display_width(l)).max().unwrap_or(0);
                widths[c] = widths[c].max(text + cell.format.horizontal_padding());
            }
        }

        let heights: Vec<usize> = grid
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| {
                        cell.format
                            .height
                            .unwrap_or(cell.lines.len() + cell.format.vertical_padding())
                    })
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        debug!(rows = grid.len(), columns, ?widths, ?heights, "table layout");

        let mut lines = Vec::new();
        for (row, &height) in grid.iter().zip(&heights) {
            if let Some(rule) = self.rule(row, &widths, Edge::Top) {
                lines.push(rule);
            }
            for i in 0..height {
                lines.push(self.content_line(row, &widths, i));
            }
        }
        if let Some(rule) = grid
            .last()
            .and_then(|row| self.rule(row, &widths, Edge::Bottom))
        {
            lines.push(rule);
        }

        let margin = table.format().resolve().margin;
        apply_margin(&lines, margin)
    }

    /// A horizontal rule above (`Edge::Top`) or below (`Edge::Bottom`) a row.
    fn rule(&self, row: &[LaidOutCell], widths: &[usize], edge: Edge) -> Option<String> {
        let mut out = String::new();
        let mut visible = 0;

        for (c, cell) in row.iter().enumerate() {
            let composer = BorderComposer::new(&cell.format);
            let junction = if c == 0 {
                composer.left()
            } else {
                BorderComposer::new(&row[c - 1].format).column_separator()
            };
            if junction.is_present() {
                visible += self.push_element(&mut out, composer.corner(), None);
            }
            visible += self.push_element(&mut out, composer.element(edge.into()), Some(widths[c]));
        }

        if let Some(last) = row.last() {
            let composer = BorderComposer::new(&last.format);
            if composer.right().is_present() {
                visible += self.push_element(&mut out, composer.corner(), None);
            }
        }

        (visible > 0).then_some(out)
    }

    /// Line `i` of a row, including its left border, separators and right
    /// border.
    fn content_line(&self, row: &[LaidOutCell], widths: &[usize], i: usize) -> String {
        let mut out = String::new();
        if let Some(first) = row.first() {
            self.push_element(&mut out, BorderComposer::new(&first.format).left(), None);
        }
        for (c, cell) in row.iter().enumerate() {
            if c > 0 {
                let separator = BorderComposer::new(&row[c - 1].format).column_separator();
                self.push_element(&mut out, separator, None);
            }
            self.push_segment(&mut out, cell, widths[c], i);
        }
        if let Some(last) = row.last() {
            self.push_element(&mut out, BorderComposer::new(&last.format).right(), None);
        }
        out
    }

    /// Append a frame element, drawn once or repeated across `columns`.
    /// Returns the columns it took.
    fn push_element(
        &self,
        out: &mut String,
        element: BorderElement<'_>,
        columns: Option<usize>,
    ) -> usize {
        let text = match columns {
            Some(columns) => element.repeat_to(columns),
            None => element.glyph.to_string(),
        };
        let width = display_width(&text);
        if self.options.colors {
            out.push_str(&ansi::paint(
                &text,
                element.color,
                element.background_color,
                FontStyles::empty(),
            ));
        } else {
            out.push_str(&text);
        }
        width
    }

    /// Append one line of a cell: padding, alignment fill and text.
    fn push_segment(&self, out: &mut String, cell: &LaidOutCell, width: usize, i: usize) {
        let format = &cell.format;
        let text = i
            .checked_sub(format.padding.top)
            .and_then(|j| cell.lines.get(j))
            .map_or("", String::as_str);

        let inner = width.saturating_sub(format.horizontal_padding());
        let extra = inner.saturating_sub(display_width(text));
        let (left_fill, right_fill) = format.font_align.split(extra);
        let left = " ".repeat(format.padding.left + left_fill);
        let right = " ".repeat(right_fill + format.padding.right);

        if self.options.colors {
            // Whitespace only takes the background, like the text around it.
            let bg = format.font_background_color;
            out.push_str(&ansi::paint(&left, Color::None, bg, FontStyles::empty()));
            out.push_str(&ansi::paint(text, format.font_color, bg, format.font_style));
            out.push_str(&ansi::paint(&right, Color::None, bg, FontStyles::empty()));
        } else {
            out.push_str(&left);
            out.push_str(text);
            out.push_str(&right);
        }
    }
}

fn cell_text(table: &Table, row: usize, column: usize) -> Cow<'_, str> {
    expand_tabs(table.cell(row, column).map_or("", Cell::content))
}

fn expand_tabs(text: &str) -> Cow<'_, str> {
    if text.contains('\t') {
        Cow::Owned(text.replace('\t', &" ".repeat(TAB_WIDTH)))
    } else {
        Cow::Borrowed(text)
    }
}

/// Widest line of `text`, in terminal columns.
fn content_width(text: &str) -> usize {
    text.split('\n').map(display_width).max().unwrap_or(0)
}

fn apply_margin(lines: &[String], margin: Sides<usize>) -> String {
    if margin == Sides::all(0) {
        return lines.join("\n");
    }

    let width = lines.iter().map(|l| visible_width(l)).max().unwrap_or(0)
        + margin.left
        + margin.right;
    let blank = " ".repeat(width);
    let left = " ".repeat(margin.left);
    let right = " ".repeat(margin.right);

    let mut out = Vec::with_capacity(lines.len() + margin.top + margin.bottom);
    out.extend(std::iter::repeat_n(blank.clone(), margin.top));
    out.extend(lines.iter().map(|line| format!("{left}{line}{right}")));
    out.extend(std::iter::repeat_n(blank, margin.bottom));
    out.join("\n")
}
