//! Report rendering - turns an audit report into human or machine output
//!
//! Pure presentation: all decisions were made by the auditor.

use crate::auditor::AuditReport;
use colored::Colorize;
use ftpaudit_core::{Finding, Result};
use std::io::Write;

const RULE: &str = "------------------------------------------------------------";
const HEADER_RULE: &str = "============================================================";

/// Renders an audit report as colorized text
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportRenderer;

impl ReportRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Write the full text report
    pub fn render(&self, report: &AuditReport, out: &mut impl Write) -> Result<()> {
        writeln!(out, "{}", HEADER_RULE)?;
        writeln!(
            out,
            "{}",
            format!("vsftpd Configuration Audit Results - {}", report.source)
                .blue()
                .bold()
        )?;
        writeln!(out, "{}", HEADER_RULE)?;

        if report.findings.is_empty() {
            writeln!(out, "{}", "No issues found in vsftpd configuration.".green())?;
            return Ok(());
        }

        for finding in &report.findings {
            self.render_finding(finding, out)?;
            writeln!(out, "{}", RULE)?;
        }

        self.render_summary(report, out)?;
        Ok(())
    }

    fn render_finding(&self, finding: &Finding, out: &mut impl Write) -> Result<()> {
        if finding.matches {
            let observed = finding.observed.as_deref().unwrap_or_default();
            writeln!(
                out,
                "{}",
                format!("✔ {} is correctly set to {}", finding.key, observed).green()
            )?;
            return Ok(());
        }

        match finding.observed.as_deref() {
            None => {
                writeln!(
                    out,
                    "{}",
                    format!(
                        "✘ [{}] {} is missing. Recommended setting: {}",
                        finding.severity, finding.key, finding.expected
                    )
                    .red()
                )?;
            }
            Some(observed) => {
                writeln!(
                    out,
                    "{}",
                    format!(
                        "✘ [{}] {} is set to {}. Recommended setting: {}",
                        finding.severity, finding.key, observed, finding.expected
                    )
                    .red()
                )?;
            }
        }

        if !finding.rationale.is_empty() {
            writeln!(out, "   {}", finding.rationale.cyan())?;
        }
        Ok(())
    }

    fn render_summary(&self, report: &AuditReport, out: &mut impl Write) -> Result<()> {
        let line = format!(
            "Scan complete: {} matched, {} mismatched, {} missing out of {} recommended settings.",
            report.summary.matched,
            report.summary.mismatched,
            report.summary.missing,
            report.summary.settings
        );

        if report.is_clean() {
            writeln!(out, "{}", line.green())?;
        } else {
            writeln!(out, "{}", line.yellow())?;
            writeln!(
                out,
                "{}",
                "Please review the results and update your configuration as necessary.".yellow()
            )?;
        }
        Ok(())
    }
}

/// Write the report as pretty-printed JSON
pub fn render_json(report: &AuditReport, out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
