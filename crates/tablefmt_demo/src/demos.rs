//! The demo tables.

use tablefmt::{Color, FontAlign, FontStyle, Table};

use crate::cli::Example;

/// Build the table for one demo.
pub fn build(example: Example) -> Table {
    match example {
        Example::Default => numbers(),
        Example::RightAligned => right_aligned(),
        Example::WarningBox => warning_box(),
        Example::CenterAligned => center_aligned(),
        Example::RowFormatting => row_formatting(),
        Example::CellFormatting => cell_formatting(),
        Example::SingleCellRow => single_cell_row(),
        Example::Borderless => borderless(),
        Example::FormatOverriding => format_overriding(),
    }
}

fn numbers() -> Table {
    let mut table = Table::new();
    table.add_row(["H1", "H2", "H3"]);
    table.add_row(["123", "23456", "3"]);
    table.add_row(["4", "5", "678910"]);
    table
}

fn right_aligned() -> Table {
    let mut table = numbers();
    table.update_format(|f| {
        f.font_style([FontStyle::Bold])
            .color(Color::White)
            .background_color(Color::Green)
            .width(5)
            .font_align(FontAlign::Right)
    });
    table[1][1].update_format(|f| f.color(Color::White).background_color(Color::Red));
    table
}

fn warning_box() -> Table {
    let mut table = Table::new();
    table.add_row([" WARNING "]);
    table.update_format(|f| {
        f.font_style([FontStyle::Bold, FontStyle::Blink])
            .color(Color::Red)
            .padding(0)
            .corner("+")
            .border_left("|")
            .border_right("|")
            .border_top("―")
            .border_bottom("―")
    });
    table
}

fn center_aligned() -> Table {
    let mut table = numbers();
    table.update_format(|f| f.width(5).font_align(FontAlign::Center));
    table
}

fn row_formatting() -> Table {
    let mut table = numbers();
    table[0].update_format(|f| {
        f.padding_top(0)
            .padding_bottom(0)
            .font_style([FontStyle::Bold])
            .font_align(FontAlign::Center)
    });
    table
}

fn cell_formatting() -> Table {
    let mut table = numbers();
    table.update_format(|f| f.width(6));
    table[0][0].update_format(|f| {
        f.color(Color::Yellow)
            .padding_top(0)
            .padding_bottom(0)
            .font_style([FontStyle::Italic, FontStyle::Bold])
            .font_align(FontAlign::Center)
    });
    table
}

fn single_cell_row() -> Table {
    let mut table = Table::new();
    table.add_row(["Title"]);
    table.add_row(["123", "", "3"]);
    table.add_row(["4", "5", "678910"]);
    table
}

fn borderless() -> Table {
    let mut table = Table::new();
    table.update_format(|f| f.column_separator(" ").corner("").border("").padding(0));
    table.add_row(["Title1", "Title2", "Title3"]);
    table.add_row(["123", "", "3"]);
    table.add_row(["4", "5", "678910"]);
    table[0].update_format(|f| f.color(Color::Green).font_style([FontStyle::Bold]));
    table[1].update_format(|f| {
        f.corner("+")
            .border_top("-")
            .font_align(FontAlign::Center)
    });
    table
}

fn format_overriding() -> Table {
    let mut table = Table::new();
    table.add_row(["Title1", "Title2", "Title3"]);
    table.add_row(["1", "2", "3"]);
    table.add_row(["4", "Cell override: 5", "6"]);

    table.update_format(|f| f.color(Color::White).font_style([FontStyle::Bold]));
    table[1].update_format(|f| f.color(Color::Yellow).font_style([FontStyle::Italic]));
    table[2].update_format(|f| f.padding(0));
    table[1][2].update_format(|f| f.color(Color::White).background_color(Color::Yellow));
    table[2][1].update_format(|f| f.background_color(Color::Red));
    table
}
