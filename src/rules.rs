//! Rules-file loading.
//!
//! The candidate rules live in a JSON or JSONC (comment-annotated JSON)
//! file: a flat object mapping rule ids to arbitrary configuration values.
//! Values are opaque here; only the mapping shape is validated.

use crate::models::RuleSet;
use serde_json::Value as Json;
use std::fs;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("failed to read rules file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse rules JSON: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("invalid rules format: expected an object mapping rule ids to configurations, got {found}")]
    Validation { found: &'static str },
}

/// Load and validate the rules file at `path`.
pub fn parse_rules_file(path: &Path) -> Result<RuleSet, RulesError> {
    let content = fs::read_to_string(path).map_err(|source| RulesError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_rules(&content)
}

/// Parse rules from raw file content.
pub fn parse_rules(content: &str) -> Result<RuleSet, RulesError> {
    let stripped = strip_json_comments(content);
    let value: Json = serde_json::from_str(&stripped).map_err(RulesError::Parse)?;
    match value {
        Json::Object(map) => Ok(map),
        other => Err(RulesError::Validation {
            found: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "a boolean",
        Json::Number(_) => "a number",
        Json::String(_) => "a string",
        Json::Array(_) => "an array",
        Json::Object(_) => "an object",
    }
}

/// Blank out `//` and `/* */` comments, leaving string literals and their
/// escapes untouched. Comments become spaces (newlines kept) so positions
/// in parse errors still point into the original text.
fn strip_json_comments(src: &str) -> String {
    enum State {
        Normal,
        InString,
        LineComment,
        BlockComment,
    }

    let mut out = String::with_capacity(src.len());
    let mut state = State::Normal;
    let mut chars = src.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            State::Normal => match c {
                '"' => {
                    state = State::InString;
                    out.push(c);
                }
                '/' => match chars.peek() {
                    Some('/') => {
                        chars.next();
                        state = State::LineComment;
                        out.push_str("  ");
                    }
                    Some('*') => {
                        chars.next();
                        state = State::BlockComment;
                        out.push_str("  ");
                    }
                    _ => out.push(c),
                },
                _ => out.push(c),
            },
            State::InString => {
                out.push(c);
                match c {
                    '\\' => {
                        if let Some(next) = chars.next() {
                            out.push(next);
                        }
                    }
                    '"' => state = State::Normal,
                    _ => {}
                }
            }
            State::LineComment => {
                if c == '\n' {
                    state = State::Normal;
                    out.push('\n');
                } else {
                    out.push(' ');
                }
            }
            State::BlockComment => {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    state = State::Normal;
                    out.push_str("  ");
                } else if c == '\n' {
                    out.push('\n');
                } else {
                    out.push(' ');
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_parse_plain_json() {
        let rules = parse_rules(r#"{"no-console": "error"}"#).unwrap();
        assert_eq!(rules.get("no-console"), Some(&json!("error")));
    }

    #[test]
    fn test_parse_jsonc_comments() {
        let src = r#"{
            // trial the strict set first
            "no-console": "error",
            /* keep this one
               on warn for now */
            "eqeqeq": ["warn", "smart"]
        }"#;
        let rules = parse_rules(src).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.get("eqeqeq"), Some(&json!(["warn", "smart"])));
    }

    #[test]
    fn test_comment_markers_inside_strings_survive() {
        let rules = parse_rules(r#"{"id": "http://example.com/*x*/"}"#).unwrap();
        assert_eq!(rules.get("id"), Some(&json!("http://example.com/*x*/")));
    }

    #[test]
    fn test_declaration_order_is_preserved() {
        let rules = parse_rules(r#"{"b-rule": 1, "a-rule": 2}"#).unwrap();
        let keys: Vec<&String> = rules.keys().collect();
        assert_eq!(keys, ["b-rule", "a-rule"]);
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        let err = parse_rules("not json").unwrap_err();
        assert!(matches!(err, RulesError::Parse(_)));
        assert!(err.to_string().contains("parse rules JSON"));
    }

    #[test]
    fn test_non_object_top_level_is_a_validation_error() {
        let err = parse_rules("[]").unwrap_err();
        assert!(matches!(err, RulesError::Validation { found: "an array" }));
        let err = parse_rules("\"error\"").unwrap_err();
        assert!(err.to_string().contains("a string"));
    }

    #[test]
    fn test_reads_rules_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rules.jsonc");
        let mut f = fs::File::create(&path).unwrap();
        writeln!(f, "{}", r#"{ "no-console": "error" } // candidates"#).unwrap();
        let rules = parse_rules_file(&path).unwrap();
        assert_eq!(rules.len(), 1);
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let dir = tempdir().unwrap();
        let err = parse_rules_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, RulesError::Read { .. }));
    }
}
