//! Tables, rows and cells, each carrying its own [`Format`].
//!
//! # Example
//!
//! ```rust
//! use tablefmt::{Color, FontStyle, Table};
//!
//! let mut table = Table::new();
//! table.add_row(["Title1", "Title2"]);
//! table.add_row(["1", "2"]);
//! table.update_format(|f| f.color(Color::White).font_style([FontStyle::Bold]));
//! table[1].update_format(|f| f.color(Color::Yellow));
//! table[1][1].update_format(|f| f.background_color(Color::Red));
//!
//! let effective = table.effective_format(1, 1).unwrap();
//! assert_eq!(effective.font_color, Color::Yellow);
//! assert_eq!(effective.font_background_color, Color::Red);
//! ```

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::format::Format;
use crate::printer::{Printer, RenderOptions};
use crate::resolve::{self, ResolvedFormat};

/// A single cell: text plus its own format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    content: String,
    format: Format,
}

impl Cell {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            format: Format::new(),
        }
    }

    /// Builder form of [`Cell::set_format`].
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) -> &mut Self {
        self.content = content.into();
        self
    }

    pub fn format(&self) -> &Format {
        &self.format
    }

    pub fn format_mut(&mut self) -> &mut Format {
        &mut self.format
    }

    pub fn set_format(&mut self, format: Format) -> &mut Self {
        self.format = format;
        self
    }

    /// Run the format through a builder chain in place.
    pub fn update_format(&mut self, f: impl FnOnce(Format) -> Format) -> &mut Self {
        self.format = f(std::mem::take(&mut self.format));
        self
    }
}

impl From<&str> for Cell {
    fn from(content: &str) -> Self {
        Cell::new(content)
    }
}

impl From<String> for Cell {
    fn from(content: String) -> Self {
        Cell::new(content)
    }
}

impl From<&String> for Cell {
    fn from(content: &String) -> Self {
        Cell::new(content.as_str())
    }
}

/// A row of cells plus the row's format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Cell>,
    format: Format,
}

impl Row {
    pub fn new<I>(cells: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Cell>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
            format: Format::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn cell_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }

    pub fn push(&mut self, cell: impl Into<Cell>) -> &mut Self {
        self.cells.push(cell.into());
        self
    }

    pub fn format(&self) -> &Format {
        &self.format
    }

    pub fn format_mut(&mut self) -> &mut Format {
        &mut self.format
    }

    pub fn set_format(&mut self, format: Format) -> &mut Self {
        self.format = format;
        self
    }

    pub fn update_format(&mut self, f: impl FnOnce(Format) -> Format) -> &mut Self {
        self.format = f(std::mem::take(&mut self.format));
        self
    }
}

impl Index<usize> for Row {
    type Output = Cell;

    fn index(&self, index: usize) -> &Cell {
        &self.cells[index]
    }
}

impl IndexMut<usize> for Row {
    fn index_mut(&mut self, index: usize) -> &mut Cell {
        &mut self.cells[index]
    }
}

/// A grid of rows plus the table-wide format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
    format: Format,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row built from `cells` and return it for further setup.
    pub fn add_row<I>(&mut self, cells: I) -> &mut Row
    where
        I: IntoIterator,
        I::Item: Into<Cell>,
    {
        self.rows.push(Row::new(cells));
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }

    pub fn push_row(&mut self, row: Row) -> &mut Self {
        self.rows.push(row);
        self
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns, i.e. the length of the longest row.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Row::len).max().unwrap_or(0)
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn row_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.cell(column))
    }

    pub fn cell_mut(&mut self, row: usize, column: usize) -> Option<&mut Cell> {
        self.rows.get_mut(row).and_then(|r| r.cell_mut(column))
    }

    pub fn format(&self) -> &Format {
        &self.format
    }

    pub fn format_mut(&mut self) -> &mut Format {
        &mut self.format
    }

    pub fn set_format(&mut self, format: Format) -> &mut Self {
        self.format = format;
        self
    }

    pub fn update_format(&mut self, f: impl FnOnce(Format) -> Format) -> &mut Self {
        self.format = f(std::mem::take(&mut self.format));
        self
    }

    /// The fully resolved format of a cell: cell over row over table over
    /// the defaults.
    ///
    /// Positions past the end of a short row resolve as an empty cell of
    /// that row. Returns `None` when `row` or `column` is outside the grid.
    pub fn effective_format(&self, row: usize, column: usize) -> Option<ResolvedFormat> {
        let r = self.rows.get(row)?;
        if column >= self.column_count() {
            return None;
        }
        let empty = Format::new();
        let cell = r.cell(column).map_or(&empty, Cell::format);
        Some(resolve::resolve([cell, r.format(), &self.format]))
    }

    /// Render with the given options.
    pub fn render(&self, options: RenderOptions) -> String {
        Printer::new(options).render(self)
    }

    /// Render without any escape sequences.
    pub fn render_plain(&self) -> String {
        self.render(RenderOptions::plain())
    }
}

impl Index<usize> for Table {
    type Output = Row;

    fn index(&self, index: usize) -> &Row {
        &self.rows[index]
    }
}

impl IndexMut<usize> for Table {
    fn index_mut(&mut self, index: usize) -> &mut Row {
        &mut self.rows[index]
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(RenderOptions::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Color, FontStyle, FontStyles};
    use crate::position::FontAlign;

    fn sample() -> Table {
        let mut table = Table::new();
        table.add_row(["H1", "H2", "H3"]);
        table.add_row(["123", "23456", "3"]);
        table.add_row(["4", "5"]);
        table
    }

    #[test]
    fn test_shape() {
        let table = sample();
        assert_eq!(table.len(), 3);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table[1][1].content(), "23456");
        assert!(table.cell(2, 2).is_none());
        assert!(table.row(3).is_none());
    }

    #[test]
    fn test_update_format_in_place() {
        let mut table = sample();
        table.update_format(|f| f.width(5));
        table.update_format(|f| f.font_align(FontAlign::Right));
        assert_eq!(table.format().width, Some(5));
        assert_eq!(table.format().font_align, Some(FontAlign::Right));
    }

    #[test]
    fn test_effective_format_precedence() {
        let mut table = sample();
        table.update_format(|f| f.color(Color::White).font_style([FontStyle::Bold]));
        table[1].update_format(|f| f.color(Color::Yellow).font_style([FontStyle::Italic]));
        table[1][2].update_format(|f| f.color(Color::White).background_color(Color::Yellow));

        let header = table.effective_format(0, 0).unwrap();
        assert_eq!(header.font_color, Color::White);
        assert_eq!(header.font_style, FontStyles::BOLD);

        let row_cell = table.effective_format(1, 0).unwrap();
        assert_eq!(row_cell.font_color, Color::Yellow);
        assert_eq!(row_cell.font_style, FontStyles::BOLD | FontStyles::ITALIC);

        let cell = table.effective_format(1, 2).unwrap();
        assert_eq!(cell.font_color, Color::White);
        assert_eq!(cell.font_background_color, Color::Yellow);
    }

    #[test]
    fn test_effective_format_of_missing_cell_uses_row() {
        let mut table = sample();
        table[2].update_format(|f| f.padding(0));
        let filler = table.effective_format(2, 2).unwrap();
        assert_eq!(filler.padding.left, 0);
        assert!(table.effective_format(2, 3).is_none());
        assert!(table.effective_format(9, 0).is_none());
    }

    #[test]
    fn test_cell_builder_and_push() {
        let mut table = Table::new();
        let row = table.add_row(Vec::<String>::new());
        row.push("a").push(Cell::new("b").with_format(Format::new().width(9)));
        assert_eq!(table[0].len(), 2);
        assert_eq!(table[0][1].format().width, Some(9));
    }

    #[test]
    fn test_set_content() {
        let mut table = sample();
        table[0][0].set_content("Header");
        assert_eq!(table.cell(0, 0).map(Cell::content), Some("Header"));
    }
}
