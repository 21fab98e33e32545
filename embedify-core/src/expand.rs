use anyhow::Result;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Environment lookup for `$VAR` / `${VAR}` expansion.
///
/// Values from a `.env` file shadow the process environment, and the whole
/// thing is an explicit value rather than process-wide state so expansion
/// stays a pure function of (input, overrides).
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    vars: BTreeMap<String, String>,
}

impl EnvOverrides {
    /// Load overrides from `<dir>/.env` if it exists. A missing file is not
    /// an error; a malformed line is skipped.
    pub fn load(dir: &Path) -> Result<Self> {
        let env_path = dir.join(".env");
        if !env_path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&env_path)?;
        Ok(Self::parse(&content))
    }

    /// Parse `.env`-style content: `KEY=VALUE` lines, `#` comments, blank
    /// lines, optional surrounding single or double quotes on the value.
    pub fn parse(content: &str) -> Self {
        let mut vars = BTreeMap::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let mut value = value.trim();
            if value.len() >= 2
                && ((value.starts_with('"') && value.ends_with('"'))
                    || (value.starts_with('\'') && value.ends_with('\'')))
            {
                value = &value[1..value.len() - 1];
            }
            vars.insert(key.to_string(), value.to_string());
        }
        Self { vars }
    }

    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self { vars }
    }

    /// Look up a variable, `.env` first, then the process environment.
    /// Unset variables resolve to the empty string.
    pub fn get(&self, key: &str) -> String {
        if let Some(value) = self.vars.get(key) {
            return value.clone();
        }
        std::env::var(key).unwrap_or_default()
    }
}

/// Expand `$VAR` and `${VAR}` placeholders. A lone `$` (or a `$` followed by
/// a character that cannot start a variable name) is kept literally.
pub fn expand(input: &str, env: &EnvOverrides) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some(&(_, '{')) => {
                chars.next();
                let mut name = String::new();
                let mut closed = false;
                for (_, c) in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    name.push(c);
                }
                if closed {
                    out.push_str(&env.get(&name));
                } else {
                    // Unterminated `${`: keep the rest literally.
                    out.push_str(&input[i..]);
                    break;
                }
            },
            Some(&(_, c)) if c.is_ascii_alphanumeric() || c == '_' => {
                let mut name = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if c.is_ascii_alphanumeric() || c == '_' {
                        name.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                out.push_str(&env.get(&name));
            },
            _ => out.push('$'),
        }
    }
    out
}
