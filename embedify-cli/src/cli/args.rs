use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::{NamingArg, OutputFormat};

/// Vendor remote and local assets into generated embed sources
#[derive(Parser, Debug)]
#[command(name = "embedify")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Run as if started in <path> instead of the current working directory
    #[arg(short = 'C', global = true, value_name = "PATH")]
    pub directory: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the manifest's files and write the generated embed source
    Generate {
        /// Manifest path (defaults to embed.toml in the current directory)
        #[arg(short, long, value_name = "PATH")]
        manifest: Option<PathBuf>,

        /// Variable naming convention, overriding the manifest
        #[arg(long, value_enum)]
        naming: Option<NamingArg>,

        /// Resolve paths and names without downloading or writing anything
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "summary")]
        output: OutputFormat,

        /// Suppress non-error output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show version information
    Version {
        /// Output format
        #[arg(short, long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },
}
