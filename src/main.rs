//! # saw
//!
//! A command-line tool for saving and inspecting sawtable directories.
//!
//! ## Usage
//!
//! ```bash
//! # Build and save a small demo table, then read it back
//! saw demo /tmp/demo-tables
//!
//! # Print a saved table's Metadata.json in human-readable form
//! saw info /tmp/demo-tables/0_events
//! ```

mod cli;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
