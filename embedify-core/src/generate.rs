use crate::naming::strip_extension;
use crate::reference::FileReference;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Placeholder in the output directory template.
pub const SHORT_NAME_PLACEHOLDER: &str = "<short_name>";

/// Where one vendored asset lands and how the generated source reaches it.
/// Both paths are slash-separated and relative to the manifest directory
/// (`include_path` relative to the generated source file instead, since
/// `include_str!` resolves against the containing file).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetLayout {
    pub asset_path: String,
    pub include_path: String,
}

/// Apply the `<short_name>` placeholder to an output directory template.
pub fn apply_template(template: &str, short_name: &str) -> String {
    template.replace(SHORT_NAME_PLACEHOLDER, strip_extension(short_name))
}

/// Decide the on-disk location of every asset and the include path the
/// generated source will use. `unique_paths` is the path disambiguator's
/// output, parallel to `refs`; its directory components are appended under
/// the templated output directory so colliding filenames land apart.
pub fn plan_layout(
    output_template: &str,
    source_output: &str,
    refs: &[FileReference],
    unique_paths: &[String],
) -> Vec<AssetLayout> {
    let source_dir = parent_dir(source_output);

    refs.iter()
        .zip(unique_paths)
        .map(|(reference, unique_path)| {
            let out_dir = apply_template(output_template, &reference.short_name);
            let full_dir = if unique_path == &reference.short_name {
                out_dir
            } else {
                join_rel(&out_dir, &parent_dir(unique_path))
            };
            let asset_path = join_rel(&full_dir, &reference.short_name);
            let include_path = relative_to(&asset_path, &source_dir);
            AssetLayout {
                asset_path,
                include_path,
            }
        })
        .collect()
}

/// Crate name for the generated header: manifest override first, else the
/// `[package].name` of a Cargo.toml next to the manifest (dashes mapped to
/// underscores), else `crate`.
pub fn detect_package_name(dir: &Path, requested: Option<&str>) -> String {
    if let Some(name) = requested {
        let name = name.trim();
        if !name.is_empty() {
            return name.to_string();
        }
    }

    if let Ok(content) = fs::read_to_string(dir.join("Cargo.toml")) {
        if let Ok(value) = content.parse::<toml::Value>() {
            if let Some(name) = value
                .get("package")
                .and_then(|p| p.get("name"))
                .and_then(toml::Value::as_str)
            {
                return name.replace('-', "_");
            }
        }
    }

    "crate".to_string()
}

/// One generated item per vendored file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedEntry {
    pub variable: String,
    pub include_path: String,
}

/// Render the generated source: a header naming the crate, then one embed
/// directive and one variable declaration per file.
pub fn render_source(package: &str, entries: &[EmbedEntry]) -> String {
    let mut out = String::new();
    writeln!(
        out,
        "// Embedded assets for `{package}`. Generated by embedify; do not edit."
    )
    .unwrap();
    writeln!(out, "#![allow(non_upper_case_globals)]").unwrap();
    writeln!(out).unwrap();
    for entry in entries {
        writeln!(
            out,
            "pub static {}: &str = include_str!(\"{}\");",
            entry.variable, entry.include_path
        )
        .unwrap();
    }
    out
}

/// Write the rendered source, creating parent directories as needed.
pub fn write_source(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

/// Directory part of a slash-separated relative path, or `""`.
fn parent_dir(path: &str) -> String {
    path.rfind('/').map_or(String::new(), |i| path[..i].to_string())
}

/// Join two slash-separated relative paths, eliding `.` and empty parts.
fn join_rel(a: &str, b: &str) -> String {
    let parts: Vec<&str> = a
        .split('/')
        .chain(b.split('/'))
        .filter(|p| !p.is_empty() && *p != ".")
        .collect();
    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}

/// `target` expressed relative to `base`, both slash-separated paths
/// relative to the same root. Mirrors what a build tool needs for an
/// include path: strip the common prefix, then climb with `..`.
fn relative_to(target: &str, base: &str) -> String {
    let target_parts: Vec<&str> = target
        .split('/')
        .filter(|p| !p.is_empty() && *p != ".")
        .collect();
    let base_parts: Vec<&str> = base
        .split('/')
        .filter(|p| !p.is_empty() && *p != ".")
        .collect();

    let common = target_parts
        .iter()
        .zip(&base_parts)
        .take_while(|(t, b)| t == b)
        .count();

    let mut parts: Vec<&str> = Vec::new();
    for _ in common..base_parts.len() {
        parts.push("..");
    }
    parts.extend(&target_parts[common..]);
    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}
