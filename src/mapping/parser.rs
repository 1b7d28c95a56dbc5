//! JSON and YAML decoding of redirect tables.
//!
//! Both formats describe a sequence of mappings with `path` and `url` keys:
//!
//! ```yaml
//! - path: /some-path
//!   url: https://www.some-url.com/demo
//! ```
//!
//! ```json
//! [{"path": "/some-path", "url": "https://www.some-url.com/demo"}]
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::mapping::record::Record;

/// Error returned when the redirect table cannot be decoded.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid JSON redirect table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML redirect table: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Encoding of a redirect table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Json,
    Yaml,
}

impl Format {
    /// Pick a format from a file extension.
    ///
    /// `.yaml` and `.yml` select YAML; everything else, including files
    /// without an extension, is treated as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Format::Yaml,
            _ => Format::Json,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => f.write_str("json"),
            Format::Yaml => f.write_str("yaml"),
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            other => Err(format!("unknown mapping format '{}' (expected json or yaml)", other)),
        }
    }
}

/// Decode `bytes` in the given format.
pub fn parse(bytes: &[u8], format: Format) -> Result<Vec<Record>, ParseError> {
    match format {
        Format::Json => parse_json(bytes),
        Format::Yaml => parse_yaml(bytes),
    }
}

/// Decode a JSON array of `{"path", "url"}` objects.
///
/// A top-level `null` yields no records.
pub fn parse_json(bytes: &[u8]) -> Result<Vec<Record>, ParseError> {
    let records: Option<Vec<Record>> = serde_json::from_slice(bytes)?;
    Ok(records.unwrap_or_default())
}

/// Decode a YAML sequence of `path`/`url` mappings.
///
/// Tabs are rewritten to spaces before decoding: a tab in a line's leading
/// indentation becomes two spaces (the width of a `- ` entry marker), any
/// other tab a single space. `- path: /x` followed by `\turl: y` therefore
/// reads like the space-indented document.
pub fn parse_yaml(bytes: &[u8]) -> Result<Vec<Record>, ParseError> {
    let normalized = normalize_tabs(bytes);
    if normalized.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    let records: Option<Vec<Record>> = serde_yaml::from_slice(&normalized)?;
    Ok(records.unwrap_or_default())
}

// Width of one indentation tab; lines up with the content after `- `.
const INDENT_TAB_WIDTH: usize = 2;

fn normalize_tabs(bytes: &[u8]) -> Vec<u8> {
    let mut normalized = Vec::with_capacity(bytes.len());
    let mut in_indent = true;

    for &b in bytes {
        match b {
            b'\t' if in_indent => {
                normalized.extend(std::iter::repeat(b' ').take(INDENT_TAB_WIDTH));
            }
            b'\t' => normalized.push(b' '),
            b'\n' | b'\r' => {
                in_indent = true;
                normalized.push(b);
            }
            b' ' => normalized.push(b),
            _ => {
                in_indent = false;
                normalized.push(b);
            }
        }
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_preserves_order() {
        let input = br#"[
            {"path": "/urlshort", "url": "https://github.com/gophercises/urlshort"},
            {"path": "/urlshort-final", "url": "https://github.com/gophercises/urlshort/tree/solution"}
        ]"#;

        let records = parse_json(input).unwrap();
        assert_eq!(
            records,
            vec![
                Record::new("/urlshort", "https://github.com/gophercises/urlshort"),
                Record::new(
                    "/urlshort-final",
                    "https://github.com/gophercises/urlshort/tree/solution"
                ),
            ]
        );
    }

    #[test]
    fn test_parse_yaml() {
        let input = b"
- path: /urlshort
  url: https://github.com/gophercises/urlshort
- path: /urlshort-final
  url: https://github.com/gophercises/urlshort/tree/solution
";
        let records = parse_yaml(input).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], Record::new("/urlshort", "https://github.com/gophercises/urlshort"));
        assert_eq!(records[1].path, "/urlshort-final");
    }

    #[test]
    fn test_yaml_tabs_match_spaces() {
        let spaced = parse_yaml(b"- path: /x\n  url: y").unwrap();
        assert_eq!(spaced, vec![Record::new("/x", "y")]);

        let tabbed = parse_yaml(b"- path: /x\n\turl: y").unwrap();
        assert_eq!(tabbed, spaced);

        let tab_after_marker = parse_yaml(b"-\tpath: /x\n\turl: y").unwrap();
        assert_eq!(tab_after_marker, spaced);

        let tab_after_colon = parse_yaml(b"- path:\t/x\n\turl:\ty").unwrap();
        assert_eq!(tab_after_colon, spaced);
    }

    #[test]
    fn test_tab_indented_document() {
        let input = b"- path: /urlshort\n\turl: https://github.com/gophercises/urlshort\n\
- path: /urlshort-final\n\turl: https://github.com/gophercises/urlshort/tree/solution\n";
        let records = parse_yaml(input).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].url, "https://github.com/gophercises/urlshort/tree/solution");
    }

    #[test]
    fn test_normalize_tabs_widths() {
        assert_eq!(normalize_tabs(b"\tkey:\tv\n \tk"), b"  key: v\n   k".to_vec());
        assert_eq!(normalize_tabs(b"\r\n\tx"), b"\r\n  x".to_vec());
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let records = parse_json(br#"[{"path": "/only-path"}, {"url": "https://only-url"}, {}]"#).unwrap();
        assert_eq!(records[0], Record::new("/only-path", ""));
        assert_eq!(records[1], Record::new("", "https://only-url"));
        assert_eq!(records[2], Record::default());

        let records = parse_yaml(b"- path: /only-path\n- url: https://only-url\n").unwrap();
        assert_eq!(records[0], Record::new("/only-path", ""));
        assert_eq!(records[1], Record::new("", "https://only-url"));
    }

    #[test]
    fn test_null_fields_are_empty() {
        let records = parse_json(br#"[{"path": null, "url": "https://x"}]"#).unwrap();
        assert_eq!(records[0], Record::new("", "https://x"));
    }

    #[test]
    fn test_empty_documents() {
        assert!(parse_json(b"[]").unwrap().is_empty());
        assert!(parse_json(b"null").unwrap().is_empty());
        assert!(parse_yaml(b"[]").unwrap().is_empty());
        assert!(parse_yaml(b"").unwrap().is_empty());
        assert!(parse_yaml(b"\t\n").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_input_fails() {
        assert!(matches!(
            parse_json(br#"[{"path": "/a", "url": "#),
            Err(ParseError::Json(_))
        ));
        assert!(matches!(
            parse_yaml(b"- path: /a\n  url: [unclosed"),
            Err(ParseError::Yaml(_))
        ));
    }

    #[test]
    fn test_wrong_shape_fails() {
        assert!(parse_json(br#"{"path": "/a", "url": "b"}"#).is_err());
        assert!(parse_json(br#"["/a", "b"]"#).is_err());
        assert!(parse_yaml(b"path: /a\nurl: b\n").is_err());
    }

    #[test]
    fn test_format_selection() {
        assert_eq!(Format::from_path(Path::new("paths.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("paths.yaml")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("conf/paths.YML")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("paths")), Format::Json);

        assert_eq!("yaml".parse::<Format>(), Ok(Format::Yaml));
        assert_eq!("JSON".parse::<Format>(), Ok(Format::Json));
        assert!("toml".parse::<Format>().is_err());
    }

    #[test]
    fn test_parse_dispatches_on_format() {
        let records = parse(b"- path: /a\n  url: b\n", Format::Yaml).unwrap();
        assert_eq!(records, vec![Record::new("/a", "b")]);
        assert!(parse(b"- path: /a\n  url: b\n", Format::Json).is_err());
    }
}
