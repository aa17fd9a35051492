//! CLI argument parsing for airnet
//!
//! Global flags: --network, --strict, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod format;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use airnet_core::format::OutputFormat;

/// Airnet - airport network route queries
#[derive(Parser, Debug)]
#[command(name = "airnet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Network description file (TOML); defaults to the built-in reference network
    #[arg(long, global = true, env = "AIRNET_NETWORK")]
    pub network: Option<PathBuf>,

    /// Fail if any route in the network description is rejected
    #[arg(long, global = true)]
    pub strict: bool,

    /// Output format: human or json
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug", "airnet_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show every airport and its routes
    Show,

    /// Shortest distance between two airports
    Distance {
        /// Departure airport code
        from: String,

        /// Arrival airport code
        to: String,

        /// Also print the airports along the route
        #[arg(long)]
        path: bool,
    },

    /// Minimum spanning tree of the network
    Mst,

    /// Breadth-first order of airports reachable from a start airport
    Bfs {
        /// Start airport code
        start: String,
    },
}
