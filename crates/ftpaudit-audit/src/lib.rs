//! ftpaudit Audit - vsftpd baseline auditing
//!
//! This crate provides the comparison engine and report rendering:
//! - A built-in baseline of recommended vsftpd settings
//! - A TOML loader for custom baselines
//! - The auditor that scans a config file against a baseline
//! - Text (colorized) and JSON report renderers
//!
//! # Example
//!
//! ```no_run
//! use ftpaudit_audit::{Baseline, ConfigAuditor};
//!
//! let auditor = ConfigAuditor::new(Baseline::vsftpd());
//! let report = auditor.audit_file("/etc/vsftpd.conf").unwrap();
//!
//! println!("matched: {}", report.summary.matched);
//! for finding in report.failures() {
//!     println!("{}: expected {}", finding.key, finding.expected);
//! }
//! ```

pub mod auditor;
pub mod baseline;
pub mod loader;
pub mod report;

pub use auditor::{AuditReport, AuditSummary, ConfigAuditor};
pub use baseline::{Baseline, RecommendedSetting};
pub use report::{render_json, ReportRenderer};
