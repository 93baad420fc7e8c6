//! Command-line interface definition for taskcost-server.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "taskcost-server",
    version = env!("CARGO_PKG_VERSION"),
    about = "HTTP reporting service: per-task labor costs aggregated from logged time",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the listen port
    #[arg(global = true, long = "port")]
    pub port: Option<u16>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(global = true, short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the database schema
    Init {
        /// Populate the database with a small demo dataset
        #[arg(long = "seed")]
        seed: bool,
    },

    /// Start the HTTP report server
    Serve,
}
