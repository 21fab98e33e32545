use anyhow::Result;
use embedify_core::{generate_operation, OutputFormatter, Style};
use std::path::PathBuf;

use crate::cli::{NamingArg, OutputFormat};

pub fn handle_generate(
    manifest: Option<PathBuf>,
    naming: Option<NamingArg>,
    dry_run: bool,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let naming: Option<Style> = naming.map(Into::into);

    let result = generate_operation(manifest, naming, dry_run, None)?;

    if !quiet {
        println!("{}", result.format(output.into()));
    }
    Ok(())
}
