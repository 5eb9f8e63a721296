use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Compile legacy multi-byte encoding indexes and inspect the results.
#[derive(Debug, Parser)]
#[command(name = "mbindex", about, version)]
pub struct Cli {
    /// Emit tracing diagnostics to stderr (filter with RUST_LOG)
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compile a registry and report per-encoding table statistics
    Stats {
        /// Directory holding the registry index files
        #[arg(value_name = "REGISTRY")]
        registry: PathBuf,

        /// Restrict the report to one encoding (e.g. 'big5')
        #[arg(long)]
        encoding: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Compile a registry and check the compiled tables' guarantees
    Verify {
        /// Directory holding the registry index files
        #[arg(value_name = "REGISTRY")]
        registry: PathBuf,
    },
}

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated rows with a header line
    Text,
    /// A JSON array of per-encoding objects
    Json,
}
