// src/lib.rs

pub mod batch;
pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod types;

use std::io::{self, Write};

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::{BatchFile, resolve_batch};
use crate::engine::{BatchReport, Dispatcher};
use crate::errors::{Result, StatsBatchError};
use crate::exec::{ExecutorBackend, RealExecutorBackend};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - batch loading (file or built-in) + CLI overrides
/// - dry-run printing
/// - sequential dispatch through the real process backend
pub async fn run(args: CliArgs) -> Result<()> {
    let batch = resolve_batch(&args)?;

    if args.dry_run {
        write_dry_run(&batch, &mut io::stdout().lock())?;
        return Ok(());
    }

    let report = run_batch(&batch, RealExecutorBackend::new()).await;
    report_to_result(&report)
}

/// Dispatch `batch` through any backend and return the report.
pub async fn run_batch<B: ExecutorBackend>(batch: &BatchFile, backend: B) -> BatchReport {
    let mut dispatcher = Dispatcher::new(backend);
    dispatcher.run(batch).await
}

/// Map a finished batch to the process result: any failed or skipped
/// invocation makes the whole run fail. Skipped entries are counted as
/// `not_run`, never as failed.
pub fn report_to_result(report: &BatchReport) -> Result<()> {
    if report.is_success() {
        return Ok(());
    }

    Err(StatsBatchError::InvocationsFailed {
        failed: report.failed_count(),
        total: report.results.len() + report.not_run,
        not_run: report.not_run,
    })
}

/// Dry-run output: the shared settings and every resolved command line.
///
/// Disabled entries are listed with a leading `#`.
pub fn write_dry_run(batch: &BatchFile, out: &mut impl Write) -> io::Result<()> {
    let cfg = batch.config();

    writeln!(out, "statsbatch dry-run")?;
    writeln!(
        out,
        "  config.interpreter = {}",
        cfg.effective_interpreter().unwrap_or("(none)")
    )?;
    writeln!(out, "  config.script = {}", cfg.script)?;
    writeln!(out, "  config.log_dir = {}", cfg.log_dir)?;
    if let Some(ref dir) = cfg.working_dir {
        writeln!(out, "  config.working_dir = {dir}")?;
    }
    writeln!(out, "  config.on_failure = {:?}", cfg.on_failure)?;
    writeln!(out)?;

    writeln!(
        out,
        "invocations ({} enabled of {}):",
        batch.enabled_count(),
        batch.invocations().len()
    )?;
    for (idx, inv) in batch.invocations().iter().enumerate() {
        let marker = if inv.enabled { " " } else { "#" };
        writeln!(out, "{marker} {:>2}. {}", idx + 1, cfg.command_for(inv))?;
        if let Some(ref name) = inv.name {
            writeln!(out, "       name: {name}")?;
        }
    }

    debug!("dry-run complete (no execution)");
    Ok(())
}
