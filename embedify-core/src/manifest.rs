use crate::naming::Style;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const MANIFEST_NAME: &str = "embed.toml";

/// Declarative manifest describing what to vendor and how to name it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Manifest {
    /// Generated source file, relative to the manifest directory.
    #[serde(default = "default_source_output")]
    pub source_output: String,

    /// Output directory template for the vendored assets. `<short_name>` is
    /// replaced with the extension-stripped filename of each entry.
    #[serde(default = "default_output")]
    pub output: String,

    /// File references: URLs or local paths, `$VAR`/`${VAR}` placeholders
    /// allowed.
    #[serde(default)]
    pub files: Vec<String>,

    /// Crate name for the generated header. Auto-detected from a sibling
    /// Cargo.toml when absent.
    #[serde(default)]
    pub package: Option<String>,

    /// Bearer token for GitHub downloads; usually `${GITHUB_TOKEN}`.
    #[serde(default)]
    pub auth_token: Option<String>,

    /// Variable naming convention: `pascal` (default) or `snake`.
    #[serde(default)]
    pub naming: Style,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            source_output: default_source_output(),
            output: default_output(),
            files: Vec::new(),
            package: None,
            auth_token: None,
            naming: Style::default(),
        }
    }
}

fn default_source_output() -> String {
    "embedded.rs".to_string()
}

fn default_output() -> String {
    ".".to_string()
}

impl Manifest {
    /// Load `embed.toml` from a directory.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_NAME);
        anyhow::ensure!(
            path.exists(),
            "{} not found in {}",
            MANIFEST_NAME,
            dir.display()
        );
        Self::load_from_path(&path)
    }

    /// Load a manifest from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let manifest: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(manifest)
    }

    /// A manifest with nothing to vendor is a configuration error, not a
    /// successful no-op.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(!self.files.is_empty(), "no files specified in manifest");
        Ok(())
    }
}
