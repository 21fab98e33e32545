use crate::expand::{expand, EnvOverrides};
use crate::fetch::materialize;
use crate::generate::{
    detect_package_name, plan_layout, render_source, write_source, EmbedEntry,
};
use crate::manifest::Manifest;
use crate::naming::Style;
use crate::output::{GenerateResult, GeneratedEntry};
use crate::reference::FileReference;
use crate::resolve::{resolve_unique_names, resolve_unique_paths};
use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Generate operation - returns structured data
///
/// Loads the manifest, resolves collision-free asset paths and variable
/// names, vendors every file under the output directory and writes the
/// generated embed source. Under `dry_run` nothing is written; the result
/// reports what would happen.
pub fn generate_operation(
    manifest_path: Option<PathBuf>,
    naming_override: Option<Style>,
    dry_run: bool,
    working_dir: Option<&Path>,
) -> Result<GenerateResult> {
    let current_dir = match working_dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().context("failed to get current directory")?,
    };

    let env = EnvOverrides::load(&current_dir).context("failed to load .env")?;

    let manifest = match manifest_path {
        Some(path) => Manifest::load_from_path(&current_dir.join(path))?,
        None => Manifest::load(&current_dir)?,
    };
    manifest.validate()?;

    let naming = naming_override.unwrap_or(manifest.naming);
    let auth_token = manifest
        .auth_token
        .as_deref()
        .map(|token| expand(token, &env))
        .filter(|token| !token.is_empty());

    let refs = manifest
        .files
        .iter()
        .map(|entry| {
            let resolved = expand(entry, &env);
            FileReference::parse(entry, &resolved)
        })
        .collect::<Result<Vec<_>>>()?;

    let unique_paths = resolve_unique_paths(&refs);
    let layout = plan_layout(
        &manifest.output,
        &manifest.source_output,
        &refs,
        &unique_paths,
    );

    // The disambiguators fall back to their longest candidate when a group
    // cannot be told apart; here that residue becomes a hard error instead
    // of one file silently overwriting another.
    ensure_distinct(
        layout.iter().map(|l| l.asset_path.as_str()),
        &refs,
        "output path",
    )?;

    // Name resolution runs before any transfer so a bad identifier aborts
    // the run with nothing downloaded.
    let source_paths: Vec<String> = refs.iter().map(|r| r.source_path.clone()).collect();
    let variables = resolve_unique_names(&source_paths, naming)?;
    ensure_distinct(variables.iter().map(String::as_str), &refs, "variable name")?;

    if !dry_run {
        for (reference, asset) in refs.iter().zip(&layout) {
            let dest = current_dir.join(&asset.asset_path);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            materialize(reference, &current_dir, &dest, auth_token.as_deref())?;
        }
    }

    let package = detect_package_name(&current_dir, manifest.package.as_deref());
    let entries: Vec<EmbedEntry> = variables
        .iter()
        .zip(&layout)
        .map(|(variable, asset)| EmbedEntry {
            variable: variable.clone(),
            include_path: asset.include_path.clone(),
        })
        .collect();

    if !dry_run {
        let source = render_source(&package, &entries);
        write_source(&current_dir.join(&manifest.source_output), &source)?;
    }

    Ok(GenerateResult {
        package,
        source_output: manifest.source_output.clone(),
        files: refs.len(),
        dry_run,
        entries: refs
            .iter()
            .zip(&layout)
            .zip(&variables)
            .map(|((reference, asset), variable)| GeneratedEntry {
                source: reference.original.clone(),
                asset_path: asset.asset_path.clone(),
                variable: variable.clone(),
            })
            .collect(),
    })
}

fn ensure_distinct<'a>(
    values: impl Iterator<Item = &'a str>,
    refs: &[FileReference],
    what: &str,
) -> Result<()> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (i, value) in values.enumerate() {
        if let Some(&first) = seen.get(value) {
            bail!(
                "{what} collision: '{}' and '{}' both resolve to '{}'",
                refs[first].original,
                refs[i].original,
                value
            );
        }
        seen.insert(value, i);
    }
    Ok(())
}
