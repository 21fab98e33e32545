use anyhow::{Context, Result};
use clap::Parser;
use embedify_core::{OutputFormatter, VersionResult};
use std::process;

mod cli;
mod generate;

use cli::{Cli, Commands, OutputFormat};

fn main() {
    let cli = Cli::parse();

    // Handle -C directory flag
    if let Some(ref dir) = cli.directory {
        if let Err(e) = std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to change to directory: {}", dir.display()))
        {
            eprintln!("Error: {e:#}");
            process::exit(2);
        }
    }

    let result = match cli.command {
        Commands::Generate {
            manifest,
            naming,
            dry_run,
            output,
            quiet,
        } => generate::handle_generate(manifest, naming, dry_run, output, quiet),

        Commands::Version { output } => handle_version(output),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn handle_version(output: OutputFormat) -> Result<()> {
    let result = VersionResult {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    println!("{}", result.format(output.into()));
    Ok(())
}
