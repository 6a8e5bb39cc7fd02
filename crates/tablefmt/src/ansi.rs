//! SGR escape sequences for resolved colors and decorations.

use crate::color::{Color, FontStyles};
use crate::wrap::display_width;

/// Resets every attribute.
pub const RESET: &str = "\x1b[0m";

/// The escape sequences that switch on `fg`, `bg` and `styles`.
///
/// Returns an empty string when there is nothing to switch on.
pub fn sgr_prefix(fg: Color, bg: Color, styles: FontStyles) -> String {
    let mut prefix = String::new();
    for style in styles.styles() {
        prefix.push_str(&format!("\x1b[{}m", style.sgr_code()));
    }
    if let Some(code) = fg.fg_code() {
        prefix.push_str(&format!("\x1b[{code}m"));
    }
    if let Some(code) = bg.bg_code() {
        prefix.push_str(&format!("\x1b[{code}m"));
    }
    prefix
}

/// Wrap every line of `text` in the given colors and decorations.
///
/// ```rust
/// use tablefmt::ansi::paint;
/// use tablefmt::{Color, FontStyles};
///
/// assert_eq!(paint("hi", Color::Red, Color::None, FontStyles::empty()), "\x1b[31mhi\x1b[0m");
/// assert_eq!(paint("hi", Color::None, Color::None, FontStyles::empty()), "hi");
/// ```
pub fn paint(text: &str, fg: Color, bg: Color, styles: FontStyles) -> String {
    let prefix = sgr_prefix(fg, bg, styles);
    if prefix.is_empty() || text.is_empty() {
        return text.to_string();
    }
    text.split('\n')
        .map(|line| format!("{prefix}{line}{RESET}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Remove CSI and OSC escape sequences, keeping the visible text.
pub fn strip_ansi(s: &str) -> String {
    #[derive(Clone, Copy, PartialEq)]
    enum State {
        Normal,
        Esc,
        Csi,
        Osc,
    }
    let mut state = State::Normal;
    let mut out = String::with_capacity(s.len());

    for c in s.chars() {
        match state {
            State::Normal => {
                if c == '\x1b' {
                    state = State::Esc;
                } else {
                    out.push(c);
                }
            }
            State::Esc => {
                state = match c {
                    '[' => State::Csi,
                    ']' => State::Osc,
                    _ => State::Normal,
                };
            }
            State::Csi => {
                // Final byte is 0x40-0x7E
                if ('@'..='~').contains(&c) {
                    state = State::Normal;
                }
            }
            State::Osc => {
                if c == '\x07' {
                    state = State::Normal;
                } else if c == '\x1b' {
                    state = State::Esc;
                }
            }
        }
    }
    out
}

/// Terminal columns taken by `s`, ignoring escape sequences.
pub fn visible_width(s: &str) -> usize {
    display_width(&strip_ansi(s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::FontStyle;

    #[test]
    fn test_prefix_order() {
        let styles = FontStyles::from([FontStyle::Italic, FontStyle::Bold]);
        assert_eq!(
            sgr_prefix(Color::White, Color::Green, styles),
            "\x1b[1m\x1b[3m\x1b[37m\x1b[42m"
        );
    }

    #[test]
    fn test_prefix_empty() {
        assert_eq!(sgr_prefix(Color::None, Color::None, FontStyles::empty()), "");
    }

    #[test]
    fn test_paint_each_line() {
        let painted = paint("a\nb", Color::Blue, Color::None, FontStyles::empty());
        assert_eq!(painted, "\x1b[34ma\x1b[0m\n\x1b[34mb\x1b[0m");
    }

    #[test]
    fn test_paint_empty_text() {
        assert_eq!(paint("", Color::Red, Color::Red, FontStyles::BOLD), "");
    }

    #[test]
    fn test_strip_ansi() {
        let painted = paint("hello", Color::Red, Color::Yellow, FontStyles::BLINK);
        assert_eq!(strip_ansi(&painted), "hello");
        assert_eq!(strip_ansi("\x1b]0;title\x07text"), "text");
        assert_eq!(strip_ansi("plain"), "plain");
    }

    #[test]
    fn test_visible_width() {
        let painted = paint("abc", Color::Cyan, Color::None, FontStyles::empty());
        assert_eq!(visible_width(&painted), 3);
    }
}
