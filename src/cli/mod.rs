use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod demo;
mod info;

pub use config::Config;

/// saw - a compact, compressed, column-oriented table storage engine
#[derive(Parser)]
#[command(name = "saw")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a small in-memory demo table and save/read it back
    Demo {
        /// Directory to save the demo table under
        #[arg(value_name = "DIR", default_value = "demo_tables")]
        output: PathBuf,

        /// Load worker pool / flush-interval settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Print a saved table's Metadata.json in human-readable form
    Info {
        /// Path to a table directory previously produced by `save_table`
        #[arg(value_name = "TABLE_DIR")]
        table_dir: PathBuf,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Demo { output, config } => demo::run(output, config),
        Commands::Info { table_dir } => info::run(table_dir),
    }
}
