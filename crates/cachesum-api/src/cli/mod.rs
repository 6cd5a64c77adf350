//! CLI command definitions and dispatch for the `cachesum` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod hash;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Cached digest service.
#[derive(Parser)]
#[command(name = "cachesum", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of plain text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server.
    Serve {
        /// Port to listen on (overrides config).
        #[arg(long)]
        port: Option<u16>,

        /// Host interface to bind (overrides config).
        #[arg(long)]
        host: Option<String>,
    },

    /// Compute (or fetch from the local cache) a digest.
    Hash {
        /// The input string to digest.
        input: String,

        /// Digest algorithm (md5 or sha256).
        #[arg(short, long, default_value = "md5")]
        algorithm: String,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}
