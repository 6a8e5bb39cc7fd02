//! Greedy word wrapping and the string helpers behind it.
//!
//! Lengths are terminal columns, so a wide char such as `中` counts as two.
//! Control chars count as one. No grapheme clustering is attempted.
//!
//! # Example
//!
//! ```rust
//! use tablefmt::wrap::wrap;
//!
//! assert_eq!(wrap("well-known-issue", 6), "well-\nknown-\nissue");
//! assert_eq!(wrap("abcdefgh", 4), "abc-\ndef-\ngh");
//! ```

use tracing::trace;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Split points used by [`wrap`]. Whitespace becomes its own token, the
/// hyphen stays on the word before it.
const WRAP_DELIMITERS: [&str; 3] = [" ", "-", "\t"];

/// Inserted after the first half of a word that is split across lines.
const SPLIT_MARKER: char = '-';

/// Wrap `text` so that no line is wider than `width` columns.
///
/// Existing newlines are kept as hard breaks and each line is wrapped on
/// its own. Words that do not fit on a line by themselves are split, with a
/// `-` appended to every piece but the last. Whitespace that lands at the
/// start of a new line is dropped; nothing else is removed or repeated.
///
/// Widths below 2 cannot hold a character plus the split marker. They
/// behave like 1: every word is cut into one-char pieces. A char wider than
/// the line is never split and overflows it.
pub fn wrap(text: &str, width: usize) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut out = String::with_capacity(text.len() + text.len() / width.max(1) * 2);
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        wrap_line_into(&mut out, line, width);
    }
    out
}

/// [`wrap`], returning the resulting lines.
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    wrap(text, width).split('\n').map(str::to_string).collect()
}

fn wrap_line_into(out: &mut String, line: &str, width: usize) {
    let tokens = split_on_delimiters(line, &WRAP_DELIMITERS);
    trace!(width, tokens = tokens.len(), "wrap line");

    let limit = width.max(1);
    let piece = width.saturating_sub(1).max(1);
    let mut line_len = 0usize;

    for token in tokens {
        let mut word = token;
        let mut word_len = columns(word);

        if line_len + word_len > width {
            // Break only after something has been placed, so a wrapped
            // leading space never produces an empty line.
            if line_len > 0 {
                out.push('\n');
                line_len = 0;
            }

            while word_len > limit {
                let (head, tail) = split_at_columns(word, piece);
                if tail.is_empty() {
                    break;
                }
                out.push_str(head);
                out.push(SPLIT_MARKER);
                out.push('\n');
                word = tail;
                word_len -= columns(head);
            }

            word = trim_left(word);
            word_len = columns(word);
        }

        out.push_str(word);
        line_len += word_len;
    }
}

/// Split `text` at every occurrence of any delimiter.
///
/// The leftmost match wins; when several delimiters match at the same
/// index, the one listed first wins. A whitespace delimiter is returned as
/// its own token so wrapping can drop it; any other delimiter stays on the
/// end of the token before it. Concatenating the tokens gives back `text`.
///
/// ```rust
/// use tablefmt::wrap::split_on_delimiters;
///
/// assert_eq!(
///     split_on_delimiters("a well-known fact", &[" ", "-"]),
///     vec!["a", " ", "well-", "known", " ", "fact"],
/// );
/// ```
pub fn split_on_delimiters<'a>(text: &'a str, delimiters: &[&str]) -> Vec<&'a str> {
    let mut tokens = Vec::new();
    let mut start = 0;

    while let Some((index, delimiter)) = index_of_any(text, start, delimiters) {
        let end = index + delimiter.len();
        if delimiter.starts_with(char::is_whitespace) {
            if index > start {
                tokens.push(&text[start..index]);
            }
            tokens.push(&text[index..end]);
        } else {
            tokens.push(&text[start..end]);
        }
        start = end;
    }

    if start < text.len() {
        tokens.push(&text[start..]);
    }
    tokens
}

/// Byte index and delimiter of the earliest match at or after `start`.
fn index_of_any<'d>(text: &str, start: usize, delimiters: &[&'d str]) -> Option<(usize, &'d str)> {
    let rest = &text[start..];
    delimiters
        .iter()
        .filter(|d| !d.is_empty())
        .filter_map(|d| rest.find(d).map(|i| (start + i, *d)))
        // min_by_key keeps the first of equal minima
        .min_by_key(|&(index, _)| index)
}

/// Split on `delimiter`, dropping it. A trailing empty piece is dropped.
///
/// ```rust
/// use tablefmt::wrap::split_lines;
///
/// assert_eq!(split_lines("a\nb\n", "\n"), vec!["a", "b"]);
/// assert_eq!(split_lines("a\n\nb", "\n"), vec!["a", "", "b"]);
/// ```
pub fn split_lines<'a>(text: &'a str, delimiter: &str) -> Vec<&'a str> {
    if delimiter.is_empty() {
        return if text.is_empty() { Vec::new() } else { vec![text] };
    }
    let mut pieces: Vec<&str> = text.split(delimiter).collect();
    if pieces.last().is_some_and(|last| last.is_empty()) {
        pieces.pop();
    }
    pieces
}

/// Remove leading whitespace.
pub fn trim_left(s: &str) -> &str {
    s.trim_start_matches(char::is_whitespace)
}

/// Remove trailing whitespace.
pub fn trim_right(s: &str) -> &str {
    s.trim_end_matches(char::is_whitespace)
}

/// Remove leading and trailing whitespace.
pub fn trim(s: &str) -> &str {
    trim_left(trim_right(s))
}

/// Terminal columns taken by `s`.
pub fn display_width(s: &str) -> usize {
    s.width()
}

fn char_columns(c: char) -> usize {
    c.width().unwrap_or(1)
}

fn columns(s: &str) -> usize {
    s.chars().map(char_columns).sum()
}

/// Split after the longest prefix that fits in `n` columns. The head always
/// holds at least one char.
fn split_at_columns(s: &str, n: usize) -> (&str, &str) {
    let mut used = 0;
    for (i, c) in s.char_indices() {
        used += char_columns(c);
        if used > n && i > 0 {
            return s.split_at(i);
        }
    }
    (s, "")
}
