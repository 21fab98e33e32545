use anyhow::{bail, Result};

/// One manifest entry, resolved to the path data the disambiguators and the
/// materializer need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReference {
    /// The raw manifest string, retained for error messages.
    pub original: String,
    /// The string after environment-variable expansion; decides
    /// remote-vs-local and is what gets materialized.
    pub resolved: String,
    /// Normalized slash-separated path used for uniqueness comparison. For
    /// remote references this is the URL path after scheme and host; for
    /// local references it is the path as given.
    pub source_path: String,
    /// Final path segment: the literal on-disk filename.
    pub short_name: String,
}

impl FileReference {
    /// Build a reference from a manifest entry and its expanded form.
    ///
    /// Fails when no filename can be extracted (e.g. a URL ending in `/`),
    /// since every downstream decision keys off `short_name`.
    pub fn parse(original: &str, resolved: &str) -> Result<Self> {
        let (source_path, short_name) = if is_remote(resolved) {
            let parts: Vec<&str> = resolved.split('/').collect();
            let short_name = (*parts.last().unwrap_or(&"")).to_string();
            // Skip scheme and host ("https:", "", "example.com").
            let source_path = if parts.len() > 3 {
                parts[3..].join("/")
            } else {
                short_name.clone()
            };
            (source_path, short_name)
        } else {
            let source_path = resolved.replace('\\', "/");
            let short_name = source_path
                .rsplit('/')
                .next()
                .unwrap_or_default()
                .to_string();
            (source_path, short_name)
        };

        if short_name.is_empty() {
            bail!("'{original}' does not name a file");
        }

        Ok(Self {
            original: original.to_string(),
            resolved: resolved.to_string(),
            source_path,
            short_name,
        })
    }

    /// Whether this reference is fetched over HTTP rather than copied from
    /// the local filesystem.
    pub fn is_remote(&self) -> bool {
        is_remote(&self.resolved)
    }
}

fn is_remote(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}
