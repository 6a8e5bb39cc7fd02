//! Command-line interface for `tablefmt_demo`.
//!
//! ```bash
//! # Print every demo table
//! tablefmt_demo
//!
//! # One demo, no escape sequences, narrower columns
//! tablefmt_demo --example center-aligned --no-color --width 4
//!
//! # Apply a table format loaded from a file to every demo
//! tablefmt_demo --format theme.toml -vv
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Prints a gallery of formatted tables.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "tablefmt_demo",
    author,
    version,
    about = "Print a gallery of tablefmt tables"
)]
pub struct Cli {
    /// Run a single demo instead of all of them
    #[arg(long, short = 'e', value_enum)]
    pub example: Option<Example>,

    /// Disable colors and decorations
    ///
    /// Respects the `NO_COLOR` environment variable
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    /// Override the table-level cell width of every demo
    #[arg(long, short = 'w')]
    pub width: Option<usize>,

    /// JSON or TOML table format applied over every demo's own format
    #[arg(long, short = 'f')]
    pub format: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// The demo tables, in the order they are printed.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Example {
    /// Default formatting
    Default,
    /// Fixed width, right aligned, colored
    RightAligned,
    /// A single-cell warning box
    WarningBox,
    /// Fixed width, centered
    CenterAligned,
    /// Header row formatting
    RowFormatting,
    /// Formatting on a single cell
    CellFormatting,
    /// A one-cell first row above full rows
    SingleCellRow,
    /// No borders except above the second row
    Borderless,
    /// Cell over row over table precedence
    FormatOverriding,
}

impl Example {
    pub const ALL: [Example; 9] = [
        Example::Default,
        Example::RightAligned,
        Example::WarningBox,
        Example::CenterAligned,
        Example::RowFormatting,
        Example::CellFormatting,
        Example::SingleCellRow,
        Example::Borderless,
        Example::FormatOverriding,
    ];

    /// Heading printed above the table.
    pub const fn title(self) -> &'static str {
        match self {
            Example::Default => "Default table",
            Example::RightAligned => "Right aligned",
            Example::WarningBox => "Custom single row, single col box",
            Example::CenterAligned => "Center aligned",
            Example::RowFormatting => "Row formatting",
            Example::CellFormatting => "Cell formatting",
            Example::SingleCellRow => "Single cell in first row",
            Example::Borderless => "No border except row 1 top border",
            Example::FormatOverriding => "Format overriding",
        }
    }
}

impl Cli {
    /// Parse command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create CLI from iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if argument parsing fails.
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// The demos selected on the command line.
    pub fn examples(&self) -> Vec<Example> {
        self.example.map_or_else(|| Example::ALL.to_vec(), |e| vec![e])
    }

    /// Default filter directive for the log subscriber.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::try_parse_from(["tablefmt_demo"]).unwrap();
        assert!(cli.example.is_none());
        assert!(cli.width.is_none());
        assert!(cli.format.is_none());
        assert_eq!(cli.examples().len(), 9);
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn cli_parses_example() {
        let cli = Cli::try_parse_from(["tablefmt_demo", "--example", "warning-box"]).unwrap();
        assert_eq!(cli.examples(), vec![Example::WarningBox]);

        let cli = Cli::try_parse_from(["tablefmt_demo", "-e", "borderless"]).unwrap();
        assert_eq!(cli.example, Some(Example::Borderless));
    }

    #[test]
    fn cli_rejects_unknown_example() {
        assert!(Cli::try_parse_from(["tablefmt_demo", "--example", "nope"]).is_err());
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::try_parse_from([
            "tablefmt_demo",
            "--no-color",
            "--width",
            "7",
            "--format",
            "f.toml",
            "-vv",
        ])
        .unwrap();
        assert!(cli.no_color);
        assert_eq!(cli.width, Some(7));
        assert_eq!(cli.format, Some(PathBuf::from("f.toml")));
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn example_titles_are_distinct() {
        let mut titles: Vec<_> = Example::ALL.iter().map(|e| e.title()).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), Example::ALL.len());
    }
}
