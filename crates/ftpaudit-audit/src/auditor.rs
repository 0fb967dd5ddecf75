//! Configuration auditor - scans a config file against a baseline

use crate::baseline::Baseline;
use chrono::{DateTime, Utc};
use ftpaudit_core::{Error, Finding, Result, Severity};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Auditor that compares a vsftpd-style config file against a baseline.
///
/// Matching is structural: a line is considered only if it has the shape
/// `key=value` for a key in the baseline. Key lookup is case-insensitive,
/// value comparison is exact. Comments, blank lines, and unknown keys are
/// ignored.
pub struct ConfigAuditor {
    baseline: Baseline,
}

/// Result of a full audit run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    /// Where the audited content came from (path or label)
    pub source: String,
    /// When the audit ran
    pub generated_at: DateTime<Utc>,
    /// All findings: scan-order matches first, then missing keys in table order
    pub findings: Vec<Finding>,
    /// Summary statistics
    pub summary: AuditSummary,
}

/// Summary of audit results
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditSummary {
    /// Settings in the baseline
    pub settings: usize,
    /// Findings with the recommended value
    pub matched: usize,
    /// Findings present but with a different value
    pub mismatched: usize,
    /// Baseline keys absent from the file
    pub missing: usize,
    /// Non-matching findings by severity
    #[serde(default)]
    pub by_severity: HashMap<Severity, usize>,
}

impl AuditReport {
    /// All non-matching findings
    pub fn failures(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| !f.matches)
    }

    /// True when every baseline key is present with the recommended value
    pub fn is_clean(&self) -> bool {
        self.summary.mismatched == 0 && self.summary.missing == 0
    }
}

impl ConfigAuditor {
    /// Create an auditor for the given baseline
    pub fn new(baseline: Baseline) -> Self {
        Self { baseline }
    }

    /// The baseline this auditor checks against
    pub fn baseline(&self) -> &Baseline {
        &self.baseline
    }

    /// Audit the config file at `path`.
    ///
    /// A missing or unreadable file is an error, never an empty report, so
    /// callers can tell "could not read" apart from "fully compliant".
    pub fn audit_file(&self, path: impl AsRef<Path>) -> Result<AuditReport> {
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

        Ok(self.audit_str(&content, &path.display().to_string()))
    }

    /// Audit already-loaded config content. `source` labels the report.
    pub fn audit_str(&self, content: &str, source: &str) -> AuditReport {
        info!("Auditing {} against {} settings", source, self.baseline.len());

        let mut findings = Vec::with_capacity(self.baseline.len());
        let mut seen = vec![false; self.baseline.len()];

        for line in content.lines() {
            let line = line.trim();

            // Comments and blank lines never match a known key
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            let Some((index, setting)) = self
                .baseline
                .iter()
                .enumerate()
                .find(|(_, s)| s.key.eq_ignore_ascii_case(key))
            else {
                debug!("Ignoring unrecognized key: {}", key);
                continue;
            };
            seen[index] = true;

            if value == setting.expected {
                findings.push(Finding::matched(
                    &setting.key,
                    value,
                    &setting.expected,
                    setting.severity,
                    &setting.rationale,
                ));
            } else {
                debug!(
                    "Mismatch: {} is {:?}, recommended {:?}",
                    setting.key, value, setting.expected
                );
                findings.push(Finding::mismatched(
                    &setting.key,
                    value,
                    &setting.expected,
                    setting.severity,
                    &setting.rationale,
                ));
            }
        }

        // Every never-seen baseline key gets a synthetic missing finding,
        // in table order
        for (setting, was_seen) in self.baseline.iter().zip(&seen) {
            if !was_seen {
                findings.push(Finding::missing(
                    &setting.key,
                    &setting.expected,
                    setting.severity,
                    &setting.rationale,
                ));
            }
        }

        let summary = summarize(&self.baseline, &findings);

        info!(
            "Audit complete: {} matched, {} mismatched, {} missing",
            summary.matched, summary.mismatched, summary.missing
        );

        AuditReport {
            source: source.to_string(),
            generated_at: Utc::now(),
            findings,
            summary,
        }
    }
}

fn summarize(baseline: &Baseline, findings: &[Finding]) -> AuditSummary {
    let mut summary = AuditSummary {
        settings: baseline.len(),
        ..Default::default()
    };

    for finding in findings {
        if finding.matches {
            summary.matched += 1;
        } else {
            if finding.is_missing() {
                summary.missing += 1;
            } else {
                summary.mismatched += 1;
            }
            *summary.by_severity.entry(finding.severity).or_insert(0) += 1;
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::baseline::RecommendedSetting;
    use std::io::Write;

    fn auditor() -> ConfigAuditor {
        ConfigAuditor::new(Baseline::vsftpd())
    }

    fn finding<'a>(report: &'a AuditReport, key: &str) -> &'a Finding {
        report
            .findings
            .iter()
            .find(|f| f.key == key)
            .unwrap_or_else(|| panic!("no finding for {}", key))
    }

    #[test]
    fn test_exact_value_matches() {
        let report = auditor().audit_str("local_enable=YES\n", "test");
        let f = finding(&report, "local_enable");
        assert!(f.matches);
        assert_eq!(f.observed.as_deref(), Some("YES"));
    }

    #[test]
    fn test_wrong_value_is_mismatch() {
        let report = auditor().audit_str("anonymous_enable=YES\n", "test");
        let f = finding(&report, "anonymous_enable");
        assert!(!f.matches);
        assert_eq!(f.observed.as_deref(), Some("YES"));
        assert_eq!(f.expected, "NO");
    }

    #[test]
    fn test_value_comparison_is_case_sensitive() {
        let report = auditor().audit_str("local_enable=yes\n", "test");
        let f = finding(&report, "local_enable");
        assert!(!f.matches);
        assert_eq!(f.observed.as_deref(), Some("yes"));
    }

    #[test]
    fn test_key_lookup_is_case_insensitive() {
        let report = auditor().audit_str("LOCAL_ENABLE=YES\n", "test");
        let f = finding(&report, "local_enable");
        assert!(f.matches);
    }

    #[test]
    fn test_whitespace_trimmed() {
        let report = auditor().audit_str("  local_enable =  YES  \n", "test");
        let f = finding(&report, "local_enable");
        assert!(f.matches);
        assert_eq!(f.observed.as_deref(), Some("YES"));
    }

    #[test]
    fn test_absent_key_yields_one_missing_finding() {
        let report = auditor().audit_str("", "test");
        let missing: Vec<_> = report
            .findings
            .iter()
            .filter(|f| f.key == "chroot_local_user")
            .collect();
        assert_eq!(missing.len(), 1);
        assert!(missing[0].is_missing());
        assert!(!missing[0].matches);
    }

    #[test]
    fn test_empty_file_yields_all_missing() {
        let report = auditor().audit_str("", "test");
        assert_eq!(report.findings.len(), 27);
        assert!(report.findings.iter().all(|f| f.is_missing()));
        assert!(report.findings.iter().all(|f| !f.matches));
        assert_eq!(report.summary.missing, 27);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_comments_blanks_and_unknown_keys_ignored() {
        let content = "\
# anonymous_enable=YES

listen=YES
listen_port=2121
";
        let report = auditor().audit_str(content, "test");
        // Nothing matched: only the 27 synthetic missing findings remain
        assert_eq!(report.findings.len(), 27);
        assert!(report.findings.iter().all(|f| f.is_missing()));
    }

    #[test]
    fn test_full_file_yields_exactly_one_finding_per_key() {
        let content: String = Baseline::vsftpd()
            .iter()
            .map(|s| format!("{}={}\n", s.key, s.expected))
            .collect();

        let report = auditor().audit_str(&content, "test");
        assert_eq!(report.findings.len(), 27);
        assert_eq!(report.summary.matched, 27);
        assert_eq!(report.summary.mismatched, 0);
        assert_eq!(report.summary.missing, 0);
        assert!(report.is_clean());
    }

    #[test]
    fn test_duplicate_occurrences_each_yield_a_finding() {
        let content = "pasv_enable=YES\npasv_enable=NO\n";
        let report = auditor().audit_str(content, "test");

        let occurrences: Vec<_> = report
            .findings
            .iter()
            .filter(|f| f.key == "pasv_enable")
            .collect();
        assert_eq!(occurrences.len(), 2);
        assert!(occurrences[0].matches);
        assert!(!occurrences[1].matches);
        // No extra missing finding for a key that was seen
        assert!(occurrences.iter().all(|f| !f.is_missing()));
    }

    #[test]
    fn test_missing_findings_follow_table_order() {
        let report = auditor().audit_str("local_enable=YES\n", "test");
        let missing_keys: Vec<_> = report
            .findings
            .iter()
            .filter(|f| f.is_missing())
            .map(|f| f.key.as_str())
            .collect();

        let expected: Vec<_> = Baseline::vsftpd()
            .iter()
            .map(|s| s.key.clone())
            .filter(|k| k != "local_enable")
            .collect();
        assert_eq!(missing_keys, expected);
    }

    #[test]
    fn test_reference_scenario() {
        // anonymous_enable wrong, local_enable right, 25 keys missing
        let report = auditor().audit_str("anonymous_enable=YES\nlocal_enable=YES\n", "test");

        let anon = finding(&report, "anonymous_enable");
        assert!(!anon.matches);
        assert_eq!(anon.expected, "NO");

        assert!(finding(&report, "local_enable").matches);

        assert_eq!(report.summary.matched, 1);
        assert_eq!(report.summary.mismatched, 1);
        assert_eq!(report.summary.missing, 25);
        assert_eq!(report.findings.len(), 27);
    }

    #[test]
    fn test_severity_tally() {
        let report = auditor().audit_str("anonymous_enable=YES\n", "test");
        assert!(report.summary.by_severity[&Severity::High] >= 1);
        let total: usize = report.summary.by_severity.values().sum();
        assert_eq!(total, report.summary.mismatched + report.summary.missing);
    }

    #[test]
    fn test_nonexistent_path_is_an_error() {
        let err = auditor().audit_file("/nonexistent/vsftpd.conf").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
        assert_eq!(err.code(), "FILE_NOT_FOUND");
    }

    #[test]
    fn test_unreadable_path_is_distinct_error() {
        // Reading a directory fails with something other than NotFound,
        // so it must surface as FileUnreadable, not FileNotFound
        let dir = tempfile::tempdir().unwrap();
        let err = auditor().audit_file(dir.path()).unwrap_err();
        assert!(matches!(err, Error::FileUnreadable { .. }));
        assert_eq!(err.code(), "FILE_UNREADABLE");
    }

    #[test]
    fn test_audit_file_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"anonymous_enable=NO\nlocal_enable=YES\n")
            .unwrap();

        let report = auditor().audit_file(file.path()).unwrap();
        assert_eq!(report.summary.matched, 2);
        assert_eq!(report.summary.missing, 25);
        assert_eq!(report.source, file.path().display().to_string());
    }

    #[test]
    fn test_custom_baseline() {
        let baseline = Baseline::new(vec![RecommendedSetting::new(
            "listen",
            "YES",
            Severity::Low,
            "",
        )])
        .unwrap();
        let auditor = ConfigAuditor::new(baseline);

        let report = auditor.audit_str("listen=YES\n", "test");
        assert_eq!(report.findings.len(), 1);
        assert!(report.is_clean());
    }

    #[test]
    fn test_report_serializes() {
        let report = auditor().audit_str("local_enable=YES\n", "test");
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"local_enable\""));
        assert!(json.contains("\"summary\""));
    }
}
