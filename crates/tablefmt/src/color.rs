//! Color palette and font decorations.
//!
//! These are plain tags attached to a [`Format`](crate::Format). Turning them
//! into terminal escape sequences happens in [`ansi`](crate::ansi).
//!
//! # Example
//!
//! ```rust
//! use tablefmt::{Color, FontStyle, FontStyles};
//!
//! let red: Color = "red".parse().unwrap();
//! assert_eq!(red, Color::Red);
//!
//! let styles: FontStyles = [FontStyle::Bold, FontStyle::Italic, FontStyle::Bold]
//!     .into_iter()
//!     .collect();
//! assert_eq!(styles.len(), 2);
//! ```

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Named terminal colors.
///
/// `None` means "use the terminal's default", which is different from a
/// color that was never set on a [`Format`](crate::Format).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Grey,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    #[default]
    None,
}

impl Color {
    /// All palette entries, `None` last.
    pub const ALL: [Color; 9] = [
        Color::Grey,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::None,
    ];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Grey => "grey",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::None => "none",
        }
    }

    /// SGR parameter for this color as a foreground.
    pub fn fg_code(&self) -> Option<u8> {
        match self {
            Color::Grey => Some(90),
            Color::Red => Some(31),
            Color::Green => Some(32),
            Color::Yellow => Some(33),
            Color::Blue => Some(34),
            Color::Magenta => Some(35),
            Color::Cyan => Some(36),
            Color::White => Some(37),
            Color::None => None,
        }
    }

    /// SGR parameter for this color as a background.
    pub fn bg_code(&self) -> Option<u8> {
        self.fg_code().map(|code| code + 10)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a color name is not in the palette.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown color: {0:?}")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grey" | "gray" => Ok(Color::Grey),
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "yellow" => Ok(Color::Yellow),
            "blue" => Ok(Color::Blue),
            "magenta" => Ok(Color::Magenta),
            "cyan" => Ok(Color::Cyan),
            "white" => Ok(Color::White),
            "none" | "" => Ok(Color::None),
            _ => Err(ParseColorError(s.to_string())),
        }
    }
}

/// A single text decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    Bold,
    Dark,
    Italic,
    Underline,
    Blink,
    Reverse,
    Concealed,
    Crossed,
}

impl FontStyle {
    /// All decorations in SGR order.
    pub const ALL: [FontStyle; 8] = [
        FontStyle::Bold,
        FontStyle::Dark,
        FontStyle::Italic,
        FontStyle::Underline,
        FontStyle::Blink,
        FontStyle::Reverse,
        FontStyle::Concealed,
        FontStyle::Crossed,
    ];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            FontStyle::Bold => "bold",
            FontStyle::Dark => "dark",
            FontStyle::Italic => "italic",
            FontStyle::Underline => "underline",
            FontStyle::Blink => "blink",
            FontStyle::Reverse => "reverse",
            FontStyle::Concealed => "concealed",
            FontStyle::Crossed => "crossed",
        }
    }

    /// SGR parameter that turns this decoration on.
    pub fn sgr_code(&self) -> u8 {
        match self {
            FontStyle::Bold => 1,
            FontStyle::Dark => 2,
            FontStyle::Italic => 3,
            FontStyle::Underline => 4,
            FontStyle::Blink => 5,
            FontStyle::Reverse => 7,
            FontStyle::Concealed => 8,
            FontStyle::Crossed => 9,
        }
    }

    fn flag(self) -> FontStyles {
        match self {
            FontStyle::Bold => FontStyles::BOLD,
            FontStyle::Dark => FontStyles::DARK,
            FontStyle::Italic => FontStyles::ITALIC,
            FontStyle::Underline => FontStyles::UNDERLINE,
            FontStyle::Blink => FontStyles::BLINK,
            FontStyle::Reverse => FontStyles::REVERSE,
            FontStyle::Concealed => FontStyles::CONCEALED,
            FontStyle::Crossed => FontStyles::CROSSED,
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a font style name is unknown.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown font style: {0:?}")]
pub struct ParseFontStyleError(pub String);

impl FromStr for FontStyle {
    type Err = ParseFontStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        FontStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == name)
            .ok_or_else(|| ParseFontStyleError(s.to_string()))
    }
}

bitflags! {
    /// A set of font decorations. The empty set means "no decoration".
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FontStyles: u8 {
        const BOLD = 1 << 0;
        const DARK = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINK = 1 << 4;
        const REVERSE = 1 << 5;
        const CONCEALED = 1 << 6;
        const CROSSED = 1 << 7;
    }
}

impl FontStyles {
    /// Iterate the decorations in this set, in SGR order.
    pub fn styles(self) -> impl Iterator<Item = FontStyle> {
        FontStyle::ALL
            .into_iter()
            .filter(move |style| self.contains(style.flag()))
    }

    /// Returns true if `style` is in the set.
    pub fn has(self, style: FontStyle) -> bool {
        self.contains(style.flag())
    }

    /// Adds `style` to the set.
    pub fn with(self, style: FontStyle) -> Self {
        self | style.flag()
    }

    /// Number of decorations in the set.
    pub fn len(self) -> usize {
        self.bits().count_ones() as usize
    }
}

impl From<FontStyle> for FontStyles {
    fn from(style: FontStyle) -> Self {
        style.flag()
    }
}

impl FromIterator<FontStyle> for FontStyles {
    fn from_iter<I: IntoIterator<Item = FontStyle>>(iter: I) -> Self {
        iter.into_iter()
            .fold(FontStyles::empty(), |set, style| set.with(style))
    }
}

impl Extend<FontStyle> for FontStyles {
    fn extend<I: IntoIterator<Item = FontStyle>>(&mut self, iter: I) {
        for style in iter {
            *self |= style.flag();
        }
    }
}

impl<const N: usize> From<[FontStyle; N]> for FontStyles {
    fn from(styles: [FontStyle; N]) -> Self {
        styles.into_iter().collect()
    }
}

impl From<&[FontStyle]> for FontStyles {
    fn from(styles: &[FontStyle]) -> Self {
        styles.iter().copied().collect()
    }
}

impl From<Vec<FontStyle>> for FontStyles {
    fn from(styles: Vec<FontStyle>) -> Self {
        styles.into_iter().collect()
    }
}

// Serialized as a list of names so config files read naturally.
impl Serialize for FontStyles {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.styles())
    }
}

impl<'de> Deserialize<'de> for FontStyles {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let styles = Vec::<FontStyle>::deserialize(deserializer)?;
        Ok(styles.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_parse() {
        assert_eq!("Red".parse::<Color>(), Ok(Color::Red));
        assert_eq!("gray".parse::<Color>(), Ok(Color::Grey));
        assert_eq!("none".parse::<Color>(), Ok(Color::None));
        assert_eq!(
            "purple".parse::<Color>(),
            Err(ParseColorError("purple".into()))
        );
    }

    #[test]
    fn test_color_codes() {
        assert_eq!(Color::Red.fg_code(), Some(31));
        assert_eq!(Color::Red.bg_code(), Some(41));
        assert_eq!(Color::Grey.fg_code(), Some(90));
        assert_eq!(Color::None.fg_code(), None);
        assert_eq!(Color::None.bg_code(), None);
    }

    #[test]
    fn test_color_names_round_trip_through_from_str() {
        for color in Color::ALL {
            assert_eq!(color.as_str().parse::<Color>(), Ok(color));
        }
    }

    #[test]
    fn test_font_style_parse() {
        assert_eq!("BLINK".parse::<FontStyle>(), Ok(FontStyle::Blink));
        assert!("wavy".parse::<FontStyle>().is_err());
    }

    #[test]
    fn test_font_styles_collapse_duplicates() {
        let set = FontStyles::from([FontStyle::Bold, FontStyle::Bold, FontStyle::Italic]);
        assert_eq!(set.len(), 2);
        assert!(set.has(FontStyle::Bold));
        assert!(set.has(FontStyle::Italic));
        assert!(!set.has(FontStyle::Blink));
    }

    #[test]
    fn test_font_styles_iterate_in_sgr_order() {
        let set = FontStyles::from([FontStyle::Crossed, FontStyle::Bold]);
        let styles: Vec<_> = set.styles().collect();
        assert_eq!(styles, vec![FontStyle::Bold, FontStyle::Crossed]);
    }

    #[test]
    fn test_font_styles_serialize_as_names() {
        let set = FontStyles::from([FontStyle::Italic, FontStyle::Bold]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["bold","italic"]"#);
        let back: FontStyles = serde_json::from_str(r#"["italic","bold","italic"]"#).unwrap();
        assert_eq!(back, set);
    }
}
