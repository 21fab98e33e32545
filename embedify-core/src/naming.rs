use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Naming convention for generated variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Capitalized words concatenated with no separator: `my-file.txt` -> `MyFile`.
    Pascal,
    /// Separators mapped to underscores, only the leading character
    /// capitalized: `my-file.txt` -> `My_file`.
    Snake,
}

impl Default for Style {
    fn default() -> Self {
        Self::Pascal
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NamingError {
    /// The input contained no usable characters (e.g. only separators or
    /// only an extension). Emitting an empty variable name would produce
    /// invalid source, so this aborts the run.
    #[error("cannot derive an identifier from '{0}'")]
    EmptyIdentifier(String),
}

/// Convert a file name (or slash-separated path) to a variable name under
/// the given style. The trailing extension of the final component is
/// stripped before synthesis.
pub fn to_identifier(name: &str, style: Style) -> Result<String, NamingError> {
    let stem = strip_extension(name);
    let result = match style {
        Style::Pascal => to_pascal(stem),
        Style::Snake => capitalize_first(&snakeify(stem)),
    };
    if result.is_empty() {
        return Err(NamingError::EmptyIdentifier(name.to_string()));
    }
    Ok(result)
}

/// Synthesize an identifier from a multi-segment path suffix. Used by the
/// identifier disambiguator when a base name collides and directory
/// segments must be pulled in.
///
/// The final segment arrives extension-stripped. Pascal runs the whole
/// joined suffix through ordinary synthesis; Snake capitalizes each prefix
/// segment independently and keeps the final segment lowercase, joining
/// everything with underscores.
pub fn suffix_identifier(segments: &[&str], style: Style) -> String {
    match style {
        Style::Pascal => to_pascal(&segments.join("/")),
        Style::Snake => {
            let Some((last, prefix)) = segments.split_last() else {
                return String::new();
            };
            if prefix.is_empty() {
                return capitalize_first(&snakeify(last));
            }
            let mut parts: Vec<String> = prefix
                .iter()
                .map(|p| capitalize_first(&snakeify(p)))
                .collect();
            parts.push(snakeify(last));
            parts.join("_")
        },
    }
}

/// Strip the extension from the final path component: everything after the
/// last `.`, including a leading dot (`.gitignore` -> ``).
pub fn strip_extension(name: &str) -> &str {
    let last_slash = name.rfind('/').map_or(0, |i| i + 1);
    match name[last_slash..].rfind('.') {
        Some(dot) => &name[..last_slash + dot],
        None => name,
    }
}

fn to_pascal(name: &str) -> String {
    name.split(['-', '_', '.', '/'])
        .filter(|part| !part.is_empty())
        .map(|part| capitalize_first(&part.to_lowercase()))
        .collect()
}

fn snakeify(name: &str) -> String {
    name.replace(['-', '.'], "_")
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_identifiers() {
        let cases = [
            ("hello.txt", "Hello"),
            ("my-file.txt", "MyFile"),
            ("some.config.yaml", "SomeConfig"),
            ("simple", "Simple"),
            ("with-many-dashes.go", "WithManyDashes"),
            ("file.name.with.dots.txt", "FileNameWithDots"),
            ("config_xml.xml", "ConfigXml"),
            ("create_tables.sql", "CreateTables"),
        ];
        for (input, expected) in cases {
            assert_eq!(
                to_identifier(input, Style::Pascal).unwrap(),
                expected,
                "pascal({input})"
            );
        }
    }

    #[test]
    fn test_pascal_paths() {
        let cases = [
            ("hello", "Hello"),
            ("hello-world", "HelloWorld"),
            ("hello_world", "HelloWorld"),
            ("hello.world", "HelloWorld"),
            ("hello/world", "HelloWorld"),
            ("mapping/session_tokens", "MappingSessionTokens"),
            ("a/b/c", "ABC"),
        ];
        for (input, expected) in cases {
            assert_eq!(suffix_identifier(&[input], Style::Pascal), expected);
        }
    }

    #[test]
    fn test_snake_identifiers() {
        let cases = [
            ("hello.txt", "Hello"),
            ("my-file.txt", "My_file"),
            ("some.config.yaml", "Some_config"),
            ("simple", "Simple"),
            ("with-many-dashes.go", "With_many_dashes"),
            ("file.name.with.dots.txt", "File_name_with_dots"),
        ];
        for (input, expected) in cases {
            assert_eq!(
                to_identifier(input, Style::Snake).unwrap(),
                expected,
                "snake({input})"
            );
        }
    }

    #[test]
    fn test_snake_suffix_with_prefix_segments() {
        assert_eq!(
            suffix_identifier(&["mapping", "session_tokens"], Style::Snake),
            "Mapping_session_tokens"
        );
        assert_eq!(
            suffix_identifier(&["settings", "session_tokens"], Style::Snake),
            "Settings_session_tokens"
        );
    }

    #[test]
    fn test_strip_extension() {
        assert_eq!(strip_extension("hello.txt"), "hello");
        assert_eq!(strip_extension("some.config.yaml"), "some.config");
        assert_eq!(strip_extension("no_ext"), "no_ext");
        assert_eq!(strip_extension(".schemas/visitors"), ".schemas/visitors");
        assert_eq!(strip_extension(".schemas/visitors.json"), ".schemas/visitors");
        assert_eq!(strip_extension(".gitignore"), "");
    }

    #[test]
    fn test_empty_identifier_is_an_error() {
        assert_eq!(
            to_identifier("---.txt", Style::Pascal),
            Err(NamingError::EmptyIdentifier("---.txt".to_string()))
        );
        assert_eq!(
            to_identifier(".txt", Style::Snake),
            Err(NamingError::EmptyIdentifier(".txt".to_string()))
        );
    }

    #[test]
    fn test_uppercase_input_is_flattened_by_pascal_only() {
        assert_eq!(to_identifier("SESSION-tokens.json", Style::Pascal).unwrap(), "SessionTokens");
        // Snake only touches the first character and the separators.
        assert_eq!(to_identifier("SESSION-tokens.json", Style::Snake).unwrap(), "SESSION_tokens");
    }

    #[test]
    fn test_style_serde_round_trip() {
        assert_eq!(serde_json::to_string(&Style::Pascal).unwrap(), "\"pascal\"");
        let style: Style = serde_json::from_str("\"snake\"").unwrap();
        assert_eq!(style, Style::Snake);
    }
}
