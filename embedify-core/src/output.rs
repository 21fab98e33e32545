use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// One vendored file as reported to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedEntry {
    pub source: String,
    pub asset_path: String,
    pub variable: String,
}

/// Result of a generate operation
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResult {
    pub package: String,
    pub source_output: String,
    pub files: usize,
    pub dry_run: bool,
    pub entries: Vec<GeneratedEntry>,
}

/// Result of a version command
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String;
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for GenerateResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "generate",
            "package": self.package,
            "source_output": self.source_output,
            "dry_run": self.dry_run,
            "summary": {
                "files": self.files,
            },
            "entries": self.entries,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();

        if self.dry_run {
            writeln!(output, "Embedify plan for `{}` (dry run)", self.package).unwrap();
        } else {
            writeln!(output, "Embedify generated `{}`", self.source_output).unwrap();
        }
        writeln!(output, "Package: {}", self.package).unwrap();
        writeln!(output, "Files: {}", self.files).unwrap();
        for entry in &self.entries {
            writeln!(
                output,
                "  {} -> {} as {}",
                entry.source, entry.asset_path, entry.variable
            )
            .unwrap();
        }
        output
    }
}

impl OutputFormatter for VersionResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "name": self.name,
            "version": self.version,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}
