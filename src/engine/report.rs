// src/engine/report.rs

use crate::batch::CommandLine;
use crate::exec::InvocationOutcome;

/// What happened to one invocation that was actually started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationResult {
    /// Zero-based position of the entry in the batch (disabled entries count).
    pub index: usize,
    pub label: String,
    pub command: CommandLine,
    pub outcome: InvocationOutcome,
}

/// Summary of a whole batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Started invocations, in run order.
    pub results: Vec<InvocationResult>,
    /// Entries with `enabled = false`.
    pub disabled: usize,
    /// Enabled entries skipped because the batch halted early.
    pub not_run: usize,
    pub halted: bool,
}

impl BatchReport {
    pub fn failed(&self) -> impl Iterator<Item = &InvocationResult> {
        self.results.iter().filter(|r| !r.outcome.is_success())
    }

    pub fn failed_count(&self) -> usize {
        self.failed().count()
    }

    pub fn succeeded_count(&self) -> usize {
        self.results.len() - self.failed_count()
    }

    /// True iff every started invocation succeeded and none were skipped.
    pub fn is_success(&self) -> bool {
        self.failed_count() == 0 && self.not_run == 0
    }
}
