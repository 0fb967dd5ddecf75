//! ftpaudit - vsftpd configuration auditor
//!
//! Audits a vsftpd configuration file against a baseline of recommended
//! security settings and prints a colorized report.

mod logging;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use ftpaudit_audit::{loader, Baseline, ConfigAuditor, ReportRenderer};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// vsftpd configuration auditor
#[derive(Parser, Debug)]
#[command(name = "ftpaudit")]
#[command(version)]
#[command(about = "Audit a vsftpd configuration file against recommended security settings")]
struct Args {
    /// Path to the vsftpd configuration file to audit
    config: PathBuf,

    /// Custom baseline TOML file (defaults to the built-in vsftpd baseline)
    #[arg(short, long)]
    baseline: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Log format (pretty, json, compact)
    #[arg(long, default_value = "pretty")]
    log_format: String,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_config = logging::LogConfig::new()
        .level(&args.log_level)
        .format(logging::LogFormat::parse(&args.log_format));
    logging::init_logging(log_config);

    if args.no_color || args.format == OutputFormat::Json {
        colored::control::set_override(false);
    }

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!("{:#}", e);
            eprintln!("{}", format!("Audit aborted: {:#}", e).red());
            ExitCode::from(2)
        }
    }
}

/// Run the audit; returns whether the file was fully compliant
fn run(args: &Args) -> Result<bool> {
    info!("ftpaudit {} starting", env!("CARGO_PKG_VERSION"));

    let baseline = match &args.baseline {
        Some(path) => loader::load_baseline(path)
            .with_context(|| format!("loading baseline from {}", path.display()))?,
        None => Baseline::vsftpd(),
    };

    let auditor = ConfigAuditor::new(baseline);
    let report = auditor
        .audit_file(&args.config)
        .with_context(|| format!("auditing {}", args.config.display()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.format {
        OutputFormat::Text => {
            print_banner(&mut out)?;
            ReportRenderer::new().render(&report, &mut out)?;
        }
        OutputFormat::Json => {
            ftpaudit_audit::render_json(&report, &mut out)?;
        }
    }

    Ok(report.is_clean())
}

fn print_banner(out: &mut impl std::io::Write) -> Result<()> {
    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(
        out,
        "{}",
        format!("ftpaudit {} - vsftpd Configuration Auditor", env!("CARGO_PKG_VERSION"))
            .blue()
            .bold()
    )?;
    writeln!(
        out,
        "{}",
        "Checks a vsftpd configuration file against recommended security settings.".yellow()
    )?;
    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(out)?;
    Ok(())
}
