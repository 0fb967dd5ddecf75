//! Finding definitions - the result of checking one recommended setting

use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// Outcome of comparing one recognized key's observed state in a config file
/// against its recommended value.
///
/// `observed = None` means the key never appeared in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Configuration key that was checked
    pub key: String,

    /// Value found in the file, trimmed; `None` if the key was absent
    pub observed: Option<String>,

    /// Recommended value from the baseline
    pub expected: String,

    /// Whether the observed value exactly equals the expected value
    pub matches: bool,

    /// Severity of a deviation for this setting
    pub severity: Severity,

    /// Why the recommended value is recommended
    pub rationale: String,
}

impl Finding {
    /// Finding for a key present with the recommended value
    pub fn matched(
        key: impl Into<String>,
        observed: impl Into<String>,
        expected: impl Into<String>,
        severity: Severity,
        rationale: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            observed: Some(observed.into()),
            expected: expected.into(),
            matches: true,
            severity,
            rationale: rationale.into(),
        }
    }

    /// Finding for a key present with a value other than the recommended one
    pub fn mismatched(
        key: impl Into<String>,
        observed: impl Into<String>,
        expected: impl Into<String>,
        severity: Severity,
        rationale: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            observed: Some(observed.into()),
            expected: expected.into(),
            matches: false,
            severity,
            rationale: rationale.into(),
        }
    }

    /// Finding for a key absent from the file
    pub fn missing(
        key: impl Into<String>,
        expected: impl Into<String>,
        severity: Severity,
        rationale: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            observed: None,
            expected: expected.into(),
            matches: false,
            severity,
            rationale: rationale.into(),
        }
    }

    /// True if the key was absent from the file
    pub fn is_missing(&self) -> bool {
        self.observed.is_none()
    }
}
