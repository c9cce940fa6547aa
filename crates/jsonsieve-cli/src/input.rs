//! Loading records and settings.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use jsonsieve::{records_from_json, FilterConfig};
use serde_json::Value;

/// Reads the record collection from a file, or from stdin for `None`/`-`.
pub fn load_records(path: Option<&Path>) -> Result<Vec<Value>> {
    let text = match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read records from stdin")?;
            buf
        }
    };
    parse_records(&text, path)
}

fn parse_records(text: &str, path: Option<&Path>) -> Result<Vec<Value>> {
    let source = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdin".to_string());
    records_from_json(text).with_context(|| format!("failed to load records from {}", source))
}

/// Reads a filter config file, or returns the defaults.
pub fn load_config(path: Option<&Path>) -> Result<FilterConfig> {
    let Some(path) = path else {
        return Ok(FilterConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("invalid config in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonsieve::TermSyntax;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_records_from_file() {
        let file = temp_file(r#"[{"name": "Apple"}, {"name": "Banana"}]"#);
        let records = load_records(Some(file.path())).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["name"], "Banana");
    }

    #[test]
    fn rejects_non_array_documents() {
        let file = temp_file(r#"{"name": "Apple"}"#);
        let err = load_records(Some(file.path())).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("expected a JSON array of records, got object"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_records(Some(Path::new("/definitely/not/here.json"))).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn loads_config() {
        let file = temp_file(r#"{"title_property": "label", "term_syntax": "pattern"}"#);
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.title_property, "label");
        assert_eq!(config.term_syntax, TermSyntax::Pattern);
        assert_eq!(config.min_search_term_length, 0);
    }

    #[test]
    fn default_config_without_file() {
        assert_eq!(load_config(None).unwrap(), FilterConfig::default());
    }

    #[test]
    fn invalid_config_is_error() {
        let file = temp_file("not json");
        assert!(load_config(Some(file.path())).is_err());
    }
}
