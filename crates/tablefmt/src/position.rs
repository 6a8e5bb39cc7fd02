//! Alignment and four-sided spacing types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Horizontal text alignment within a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl FontAlign {
    /// Convert alignment to a factor (0.0, 0.5, or 1.0).
    pub fn factor(&self) -> f64 {
        match self {
            FontAlign::Left => 0.0,
            FontAlign::Center => 0.5,
            FontAlign::Right => 1.0,
        }
    }

    /// Split `extra` columns of slack into (left, right) fill.
    ///
    /// Centered text puts the odd column on the right.
    pub fn split(&self, extra: usize) -> (usize, usize) {
        let left = (extra as f64 * self.factor()).floor() as usize;
        (left, extra - left)
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            FontAlign::Left => "left",
            FontAlign::Center => "center",
            FontAlign::Right => "right",
        }
    }
}

impl fmt::Display for FontAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an alignment name is unknown.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown alignment: {0:?}")]
pub struct ParseAlignError(pub String);

impl FromStr for FontAlign {
    type Err = ParseAlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(FontAlign::Left),
            "center" | "centre" => Ok(FontAlign::Center),
            "right" => Ok(FontAlign::Right),
            _ => Err(ParseAlignError(s.to_string())),
        }
    }
}

/// CSS-like sides record for padding, margin and border edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sides<T> {
    #[serde(default)]
    pub top: T,
    #[serde(default)]
    pub right: T,
    #[serde(default)]
    pub bottom: T,
    #[serde(default)]
    pub left: T,
}

impl<T: Clone> Sides<T> {
    /// Create sides with all values the same.
    pub fn all(value: T) -> Self {
        Self {
            top: value.clone(),
            right: value.clone(),
            bottom: value.clone(),
            left: value,
        }
    }
}

impl<T> Sides<T> {
    /// Create sides from individual values (clockwise from the top).
    pub const fn new(top: T, right: T, bottom: T, left: T) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Combine two records side by side.
    pub fn zip_with<U, V>(self, other: Sides<U>, mut f: impl FnMut(T, U) -> V) -> Sides<V> {
        Sides {
            top: f(self.top, other.top),
            right: f(self.right, other.right),
            bottom: f(self.bottom, other.bottom),
            left: f(self.left, other.left),
        }
    }

    /// Apply `f` to every side.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Sides<U> {
        Sides {
            top: f(self.top),
            right: f(self.right),
            bottom: f(self.bottom),
            left: f(self.left),
        }
    }

    /// Borrow every side.
    pub const fn each_ref(&self) -> Sides<&T> {
        Sides {
            top: &self.top,
            right: &self.right,
            bottom: &self.bottom,
            left: &self.left,
        }
    }
}
