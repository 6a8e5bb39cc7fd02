#![forbid(unsafe_code)]
// Allow these clippy lints for builder-style APIs and terminal layout code
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::use_self)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::struct_field_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::similar_names)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::new_without_default)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::uninlined_format_args)]

//! # tablefmt
//!
//! Bordered, colored text tables for the terminal.
//!
//! Formatting is hierarchical: a [`Table`], each [`Row`] and each [`Cell`]
//! carry their own [`Format`], where every property is either unset
//! (inherit) or explicit. The effective format of a cell is the cell's
//! format over its row's over the table's, with built-in defaults for
//! anything still unset.
//!
//! ## Quick Start
//!
//! ```rust
//! use tablefmt::{FontAlign, Table};
//!
//! let mut table = Table::new();
//! table.add_row(["Name", "Qty"]);
//! table.add_row(["apple", "3"]);
//! table[1][1].update_format(|f| f.font_align(FontAlign::Right));
//!
//! assert_eq!(
//!     table.render_plain(),
//!     "+-------+-----+\n\
//!      | Name  | Qty |\n\
//!      +-------+-----+\n\
//!      | apple |   3 |\n\
//!      +-------+-----+"
//! );
//! ```
//!
//! ## Merging formats
//!
//! ```rust
//! use tablefmt::{resolve, FontAlign, Format};
//!
//! let cell = Format::new().width(10);
//! let table = Format::new().width(4).font_align(FontAlign::Center);
//!
//! let effective = resolve::resolve([&cell, &table]);
//! assert_eq!(effective.width, Some(10));
//! assert_eq!(effective.font_align, FontAlign::Center);
//! ```
//!
//! ## Borders
//!
//! An empty glyph hides an element and removes its column; an unset glyph
//! falls back to the ASCII default (`-`, `|` and `+`).
//!
//! ```rust
//! use tablefmt::Table;
//!
//! let mut table = Table::new();
//! table.add_row(["a", "b"]);
//! table.update_format(|f| f.border("").corner("").column_separator(" ").padding(0));
//! assert_eq!(table.render_plain(), "a b");
//! ```

pub mod ansi;
pub mod border;
pub mod color;
pub mod format;
pub mod position;
pub mod printer;
pub mod resolve;
pub mod table;
pub mod wrap;

// Re-exports
pub use border::{BorderComposer, BorderElement, BorderPart, Edge};
pub use color::{Color, FontStyle, FontStyles, ParseColorError, ParseFontStyleError};
pub use format::{Format, FormatLoadError, FormatSaveError, GlyphFormat};
pub use position::{FontAlign, ParseAlignError, Sides};
pub use printer::{Printer, RenderOptions};
pub use resolve::{ResolvedFormat, ResolvedGlyph, merge};
pub use table::{Cell, Row, Table};
pub use wrap::wrap;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::color::{Color, FontStyle, FontStyles};
    pub use crate::format::Format;
    pub use crate::position::FontAlign;
    pub use crate::printer::RenderOptions;
    pub use crate::table::{Cell, Row, Table};
}
