//! Runtime settings for the demo, resolved from the command line.

use std::fs;
use std::path::{Path, PathBuf};

use tablefmt::{Format, FormatLoadError, RenderOptions, Table};
use tracing::debug;

use crate::cli::Cli;

/// Everything the demo needs besides the tables themselves.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub render: RenderOptions,
    /// Table-level width forced onto every demo.
    pub width: Option<usize>,
    /// Table format applied over every demo's own table format.
    pub format: Option<Format>,
}

impl Config {
    /// Build from parsed arguments, loading `--format` if given.
    ///
    /// # Errors
    ///
    /// Returns an error if the format file cannot be read or parsed.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let format = cli.format.as_deref().map(load_format).transpose()?;
        Ok(Self {
            render: if cli.no_color {
                RenderOptions::plain()
            } else {
                RenderOptions::colored()
            },
            width: cli.width,
            format,
        })
    }

    /// Apply the overrides to a demo table.
    pub fn apply(&self, table: &mut Table) {
        if let Some(format) = &self.format {
            let merged = format.merge(table.format());
            table.set_format(merged);
        }
        if let Some(width) = self.width {
            table.update_format(|f| f.width(width));
        }
    }
}

/// Read a format document, choosing the parser by file extension.
///
/// # Errors
///
/// Returns an error if the extension is not `json` or `toml`, the file
/// cannot be read, or its contents are not a valid format.
pub fn load_format(path: &Path) -> Result<Format, ConfigError> {
    let kind = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => FileKind::Json,
        Some(ext) if ext.eq_ignore_ascii_case("toml") => FileKind::Toml,
        _ => return Err(ConfigError::UnknownExtension(path.to_path_buf())),
    };
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let format = parse_format(&text, kind).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), ?kind, "loaded table format");
    Ok(format)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileKind {
    Json,
    Toml,
}

fn parse_format(text: &str, kind: FileKind) -> Result<Format, FormatLoadError> {
    match kind {
        FileKind::Json => Format::from_json(text),
        FileKind::Toml => Format::from_toml(text),
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The format file is neither JSON nor TOML.
    #[error("unsupported format file (expected .json or .toml): {}", .0.display())]
    UnknownExtension(PathBuf),

    /// The format file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The format file is not a valid format document.
    #[error("invalid format in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: FormatLoadError,
    },
}
