#![forbid(unsafe_code)]

//! # tablefmt demo
//!
//! Prints a gallery of tables showing table, row and cell formats,
//! alignment, wrapping, borders and colors.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p tablefmt_demo
//! cargo run -p tablefmt_demo -- --example borderless --no-color
//! ```

mod cli;
mod config;
mod demos;

use std::io::{self, Write};

use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;
use config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    init_logging(&cli);

    let config = Config::from_cli(&cli)?;
    let examples = cli.examples();
    info!(count = examples.len(), colors = config.render.colors, "rendering demos");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for example in examples {
        let mut table = demos::build(example);
        config.apply(&mut table);
        writeln!(out, "{}:", example.title())?;
        writeln!(out, "{}\n", table.render(config.render))?;
    }
    out.flush()?;

    Ok(())
}

fn init_logging(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
