// src/engine/dispatcher.rs

use tracing::{debug, error, info, warn};

use crate::config::BatchFile;
use crate::engine::report::{BatchReport, InvocationResult};
use crate::exec::{ExecutorBackend, InvocationOutcome};
use crate::types::FailureBehaviour;

/// Runs a batch one invocation at a time.
pub struct Dispatcher<B: ExecutorBackend> {
    backend: B,
}

impl<B: ExecutorBackend> Dispatcher<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Run every enabled entry of `batch` in order.
    ///
    /// Failures never abort with `Err`: they are recorded in the report, and
    /// `[config].on_failure` decides whether later entries still run.
    pub async fn run(&mut self, batch: &BatchFile) -> BatchReport {
        let mut report = BatchReport::default();
        let total = batch.enabled_count();
        let on_failure = batch.config().on_failure;

        info!(total, ?on_failure, "starting batch");

        let mut position = 0;
        for (index, invocation) in batch.invocations().iter().enumerate() {
            if !invocation.enabled {
                debug!(index, label = %invocation.label(), "invocation disabled; skipping");
                report.disabled += 1;
                continue;
            }

            if report.halted {
                report.not_run += 1;
                continue;
            }

            position += 1;
            let label = invocation.label();
            let command = batch.config().command_for(invocation);

            info!(index, label = %label, "[{position}/{total}] {command}");

            let outcome = match self.backend.run_invocation(&command).await {
                Ok(outcome) => outcome,
                Err(err) => {
                    error!(index, label = %label, error = %err, "invocation could not be run");
                    InvocationOutcome::Failed(-1)
                }
            };

            if let InvocationOutcome::Failed(code) = outcome {
                warn!(index, label = %label, exit_code = code, "invocation failed");
                if on_failure == FailureBehaviour::Halt {
                    warn!("halting batch after failure");
                    report.halted = true;
                }
            }

            report.results.push(InvocationResult {
                index,
                label,
                command,
                outcome,
            });
        }

        info!(
            succeeded = report.succeeded_count(),
            failed = report.failed_count(),
            disabled = report.disabled,
            not_run = report.not_run,
            "batch finished"
        );

        report
    }
}
