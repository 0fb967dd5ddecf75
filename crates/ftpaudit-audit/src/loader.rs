//! Baseline loader - loads custom baseline definitions from TOML files
//!
//! A baseline file is an array of settings:
//!
//! ```toml
//! [[setting]]
//! key = "anonymous_enable"
//! expected = "NO"
//! severity = "high"
//! rationale = "Anonymous FTP access should be disabled."
//! ```
//!
//! `severity` and `rationale` are optional.

use crate::baseline::{Baseline, RecommendedSetting};
use ftpaudit_core::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

#[derive(Debug, Deserialize)]
struct BaselineFile {
    #[serde(default, rename = "setting")]
    settings: Vec<RecommendedSetting>,
}

/// Load a baseline from a TOML file
pub fn load_baseline(path: impl AsRef<Path>) -> Result<Baseline> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::FileNotFound {
            path: path.display().to_string(),
        },
        _ => Error::FileUnreadable {
            path: path.display().to_string(),
            source: e,
        },
    })?;

    let baseline = parse_baseline(&content)?;

    info!("Loaded {} settings from {}", baseline.len(), path.display());
    Ok(baseline)
}

fn parse_baseline(content: &str) -> Result<Baseline> {
    let file: BaselineFile = toml::from_str(content).map_err(|e| Error::InvalidBaseline {
        message: e.to_string(),
    })?;

    if file.settings.is_empty() {
        return Err(Error::InvalidBaseline {
            message: String::from("baseline defines no settings"),
        });
    }

    Baseline::new(file.settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ftpaudit_core::Severity;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"
[[setting]]
key = "anonymous_enable"
expected = "NO"
severity = "high"
rationale = "Anonymous FTP access should be disabled."

[[setting]]
key = "local_enable"
expected = "YES"
"#;

    #[test]
    fn test_load_baseline_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let baseline = load_baseline(file.path()).unwrap();
        assert_eq!(baseline.len(), 2);

        let setting = baseline.get("anonymous_enable").unwrap();
        assert_eq!(setting.expected, "NO");
        assert_eq!(setting.severity, Severity::High);

        // Optional fields fall back to defaults
        let setting = baseline.get("local_enable").unwrap();
        assert_eq!(setting.severity, Severity::Medium);
        assert!(setting.rationale.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = load_baseline("/nonexistent/baseline.toml").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_unreadable_baseline_is_distinct_error() {
        // A directory path fails to read with something other than NotFound
        let dir = tempfile::tempdir().unwrap();
        let err = load_baseline(dir.path()).unwrap_err();
        assert!(matches!(err, Error::FileUnreadable { .. }));
    }

    #[test]
    fn test_empty_baseline_rejected() {
        let err = parse_baseline("").unwrap_err();
        assert!(matches!(err, Error::InvalidBaseline { .. }));
        assert!(err.to_string().contains("no settings"));
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let toml = r#"
[[setting]]
key = "pasv_enable"
expected = "YES"

[[setting]]
key = "PASV_ENABLE"
expected = "NO"
"#;
        let err = parse_baseline(toml).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(parse_baseline("[[setting]\nkey=").is_err());
    }
}
