//! Loads the list of checks to run from a JSON file.

use crate::checks::Check;
use log::debug;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_CHECKS_FILE: &str = "checks.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Check #{index} has an empty name")]
    EmptyName { index: usize },
    #[error("Check '{check}' has no URLs")]
    NoUrls { check: String },
    #[error("Check '{check}' expects invalid status code {code}")]
    InvalidStatusCode { check: String, code: u16 },
}

/// Loads the checks from the given file, or from `checks.json` next to the executable.
///
/// Either every check is returned in file order, or an error is returned.
pub fn load(path: Option<&Path>) -> Result<Vec<Check>, ConfigError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => default_path(),
    };
    debug!("Reading checks from {}", path.display());
    let json = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    parse(&json)
}

/// Parses and validates checks from a JSON literal.
pub fn parse(json: &str) -> Result<Vec<Check>, ConfigError> {
    let checks: Vec<Check> = serde_json::from_str(json)?;
    for (index, check) in checks.iter().enumerate() {
        validate(index, check)?;
    }
    Ok(checks)
}

fn validate(index: usize, check: &Check) -> Result<(), ConfigError> {
    if check.name.trim().is_empty() {
        return Err(ConfigError::EmptyName { index });
    }
    if check.urls.is_empty() {
        return Err(ConfigError::NoUrls {
            check: check.name.clone(),
        });
    }
    if reqwest::StatusCode::from_u16(check.expected_code).is_err() {
        return Err(ConfigError::InvalidStatusCode {
            check: check.name.clone(),
            code: check.expected_code,
        });
    }
    Ok(())
}

fn default_path() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_default()
        .join(DEFAULT_CHECKS_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_preserves_order_and_defaults_body() {
        let checks = parse(
            r#"[
                {"name": "Homepage", "urls": ["https://a.example", "https://b.example"], "code": 200, "body": "Welcome"},
                {"name": "API", "urls": ["https://api.example/health"], "code": 204}
            ]"#,
        )
        .unwrap();
        assert_eq!(checks.len(), 2);
        assert_eq!(checks[0].name, "Homepage");
        assert_eq!(
            checks[0].urls,
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
        assert_eq!(checks[0].expected_body, "Welcome");
        assert_eq!(checks[1].name, "API");
        assert_eq!(checks[1].expected_code, 204);
        assert!(checks[1].expected_body.is_empty());
    }

    #[test]
    fn test_parse_empty_list() {
        assert!(parse("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_malformed_json() {
        assert!(matches!(parse("[{"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_parse_missing_required_field() {
        let result = parse(r#"[{"name": "Homepage", "urls": ["https://a.example"]}]"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_parse_rejects_empty_urls() {
        let result = parse(r#"[{"name": "Homepage", "urls": [], "code": 200}]"#);
        assert!(matches!(result, Err(ConfigError::NoUrls { check }) if check == "Homepage"));
    }

    #[test]
    fn test_parse_rejects_invalid_status_code() {
        let result = parse(r#"[{"name": "Homepage", "urls": ["https://a.example"], "code": 42}]"#);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidStatusCode { code: 42, .. })
        ));
    }

    #[test]
    fn test_parse_rejects_empty_name() {
        let result = parse(
            r#"[
                {"name": "Homepage", "urls": ["https://a.example"], "code": 200},
                {"name": " ", "urls": ["https://b.example"], "code": 200}
            ]"#,
        );
        assert!(matches!(result, Err(ConfigError::EmptyName { index: 1 })));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"[{{"name": "Homepage", "urls": ["https://a.example"], "code": 200}}]"#
        )
        .unwrap();
        let checks = load(Some(file.path())).unwrap();
        assert_eq!(checks.len(), 1);
        assert_eq!(checks[0].name, "Homepage");
    }

    #[test]
    fn test_load_non_existing_file() {
        let result = load(Some(Path::new("non_existing_checks.json")));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_default_path_is_next_to_executable() {
        let path = default_path();
        assert_eq!(path.file_name().unwrap(), DEFAULT_CHECKS_FILE);
        let exe = env::current_exe().unwrap();
        assert_eq!(path.parent(), exe.parent());
    }
}
