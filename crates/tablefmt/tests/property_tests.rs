#![allow(clippy::redundant_closure_for_method_calls)]

//! Property-based tests for format merging, word wrapping and rendering.

use proptest::prelude::*;
use tablefmt::ansi::{strip_ansi, visible_width};
use tablefmt::{
    Color, FontAlign, FontStyle, FontStyles, Format, GlyphFormat, RenderOptions, Sides, Table,
    merge, wrap,
};

fn color_strategy() -> impl Strategy<Value = Color> {
    prop::sample::select(Color::ALL.to_vec())
}

fn align_strategy() -> impl Strategy<Value = FontAlign> {
    prop_oneof![
        Just(FontAlign::Left),
        Just(FontAlign::Center),
        Just(FontAlign::Right),
    ]
}

fn styles_strategy() -> impl Strategy<Value = FontStyles> {
    prop::collection::vec(prop::sample::select(FontStyle::ALL.to_vec()), 0..4)
        .prop_map(FontStyles::from)
}

fn glyph_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[-=+|*#]{1,2}"]
}

fn spacing_strategy() -> impl Strategy<Value = Sides<Option<usize>>> {
    let side = || prop::option::of(0usize..4);
    (side(), side(), side(), side())
        .prop_map(|(top, right, bottom, left)| Sides::new(top, right, bottom, left))
}

fn glyph_format_strategy() -> impl Strategy<Value = GlyphFormat> {
    (
        prop::option::of(glyph_strategy()),
        prop::option::of(color_strategy()),
        prop::option::of(color_strategy()),
    )
        .prop_map(|(glyph, color, background_color)| GlyphFormat {
            glyph,
            color,
            background_color,
        })
}

fn border_strategy() -> impl Strategy<Value = Sides<GlyphFormat>> {
    (
        glyph_format_strategy(),
        glyph_format_strategy(),
        glyph_format_strategy(),
        glyph_format_strategy(),
    )
        .prop_map(|(top, right, bottom, left)| Sides::new(top, right, bottom, left))
}

/// A format with a random subset of fields set.
fn format_strategy() -> impl Strategy<Value = Format> {
    (
        prop::option::of(0usize..20),
        prop::option::of(0usize..6),
        prop::option::of(align_strategy()),
        prop::option::of(styles_strategy()),
        prop::option::of(color_strategy()),
        prop::option::of(color_strategy()),
        spacing_strategy(),
        spacing_strategy(),
        border_strategy(),
        glyph_format_strategy(),
        glyph_format_strategy(),
    )
        .prop_map(
            |(width, height, align, styles, color, background, margin, padding, border, corner, separator)| {
                Format {
                    width,
                    height,
                    font_align: align,
                    font_style: styles,
                    font_color: color,
                    font_background_color: background,
                    margin,
                    padding,
                    border,
                    corner,
                    column_separator: separator,
                }
            },
        )
}

fn text_strategy() -> impl Strategy<Value = String> {
    "[a-z \\-\t]{0,40}"
}

fn union_styles(a: Option<FontStyles>, b: Option<FontStyles>) -> Option<FontStyles> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a | b),
        (a, b) => a.or(b),
    }
}

fn or_glyph(a: &GlyphFormat, b: &GlyphFormat) -> GlyphFormat {
    GlyphFormat {
        glyph: a.glyph.clone().or_else(|| b.glyph.clone()),
        color: a.color.or(b.color),
        background_color: a.background_color.or(b.background_color),
    }
}

/// Every char of `s` except whitespace and the split marker.
fn visible_chars(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace() && *c != '-').collect()
}

// =============================================================================
// merge properties
// =============================================================================

proptest! {
    #[test]
    fn merge_primary_wins_when_set(a in format_strategy(), b in format_strategy()) {
        let merged = merge(&a, &b);
        prop_assert_eq!(merged.width, a.width.or(b.width));
        prop_assert_eq!(merged.height, a.height.or(b.height));
        prop_assert_eq!(merged.font_align, a.font_align.or(b.font_align));
        prop_assert_eq!(merged.font_style, union_styles(a.font_style, b.font_style));
        prop_assert_eq!(merged.font_color, a.font_color.or(b.font_color));
        prop_assert_eq!(
            merged.font_background_color,
            a.font_background_color.or(b.font_background_color)
        );
        prop_assert_eq!(merged.margin, a.margin.zip_with(b.margin, Option::or));
        prop_assert_eq!(merged.padding, a.padding.zip_with(b.padding, Option::or));
        prop_assert_eq!(&merged.border.top, &or_glyph(&a.border.top, &b.border.top));
        prop_assert_eq!(&merged.border.right, &or_glyph(&a.border.right, &b.border.right));
        prop_assert_eq!(&merged.border.bottom, &or_glyph(&a.border.bottom, &b.border.bottom));
        prop_assert_eq!(&merged.border.left, &or_glyph(&a.border.left, &b.border.left));
        prop_assert_eq!(&merged.corner, &or_glyph(&a.corner, &b.corner));
        prop_assert_eq!(
            &merged.column_separator,
            &or_glyph(&a.column_separator, &b.column_separator)
        );
    }

    #[test]
    fn merge_with_empty_is_identity(a in format_strategy()) {
        prop_assert_eq!(merge(&a, &Format::new()), a.clone());
        prop_assert_eq!(merge(&Format::new(), &a), a);
    }

    #[test]
    fn merge_is_associative(
        a in format_strategy(),
        b in format_strategy(),
        c in format_strategy(),
    ) {
        prop_assert_eq!(merge(&merge(&a, &b), &c), merge(&a, &merge(&b, &c)));
    }

    #[test]
    fn merge_unions_styles(a in styles_strategy(), b in styles_strategy()) {
        let merged = merge(&Format::new().font_style(a), &Format::new().font_style(b));
        prop_assert_eq!(merged.font_style, Some(a | b));
    }

    #[test]
    fn resolve_fills_every_glyph(a in format_strategy()) {
        let resolved = a.resolve();
        let expected_corner = a.corner.glyph.clone().unwrap_or_else(|| "+".to_string());
        let expected_left = a.border.left.glyph.clone().unwrap_or_else(|| "|".to_string());
        prop_assert_eq!(resolved.corner.glyph, expected_corner);
        prop_assert_eq!(resolved.border.left.glyph, expected_left);
        prop_assert_eq!(resolved.padding.right, a.padding.right.unwrap_or(1));
    }
}

// =============================================================================
// wrap properties
// =============================================================================

proptest! {
    #[test]
    fn wrap_respects_width(text in text_strategy(), width in 2usize..12) {
        let wrapped = wrap(&text, width);
        for line in wrapped.split('\n') {
            prop_assert!(
                tablefmt::wrap::display_width(line) <= width,
                "line {:?} longer than {}", line, width
            );
        }
    }

    #[test]
    fn wrap_keeps_every_visible_char(text in text_strategy(), width in 0usize..12) {
        let wrapped = wrap(&text, width);
        prop_assert_eq!(visible_chars(&wrapped), visible_chars(&text));
    }

    #[test]
    fn wrap_is_idempotent(text in text_strategy(), width in 2usize..12) {
        let once = wrap(&text, width);
        prop_assert_eq!(wrap(&once, width), once);
    }

    #[test]
    fn wrap_fitting_text_is_unchanged(text in "[a-z ]{0,10}") {
        prop_assert_eq!(wrap(&text, 10), text);
    }

    #[test]
    fn wrap_terminates_for_tiny_widths(text in "[a-z -]{0,20}", width in 0usize..3) {
        let wrapped = wrap(&text, width);
        prop_assert!(wrapped.len() <= text.len() * 3 + 1);
    }
}

// =============================================================================
// rendering properties
// =============================================================================

fn grid_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    (1usize..4).prop_flat_map(|columns| {
        prop::collection::vec(prop::collection::vec("[a-z中\\t]{0,8}", columns), 1..5)
    })
}

proptest! {
    #[test]
    fn rendered_lines_share_one_width(grid in grid_strategy(), width in prop::option::of(0usize..10)) {
        let mut table = Table::new();
        for row in &grid {
            table.add_row(row.iter());
        }
        if let Some(width) = width {
            table.update_format(|f| f.width(width));
        }
        let rendered = table.render_plain();
        let widths: Vec<usize> = rendered.lines().map(visible_width).collect();
        prop_assert!(widths.windows(2).all(|w| w[0] == w[1]), "{:?}", widths);
    }

    #[test]
    fn colored_render_strips_to_plain(grid in grid_strategy(), color in color_strategy()) {
        let mut table = Table::new();
        for row in &grid {
            table.add_row(row.iter());
        }
        table.update_format(|f| f.color(color).font_style([FontStyle::Bold]));
        let colored = table.render(RenderOptions::colored());
        prop_assert_eq!(strip_ansi(&colored), table.render_plain());
    }
}
