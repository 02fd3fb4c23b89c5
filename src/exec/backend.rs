// src/exec/backend.rs

//! Pluggable executor backend abstraction.

use std::future::Future;
use std::pin::Pin;

use crate::batch::CommandLine;
use crate::errors::Result;

/// Result of one child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationOutcome {
    Success,
    /// Exit code; `-1` when the process could not be spawned or was killed
    /// by a signal.
    Failed(i32),
}

impl InvocationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, InvocationOutcome::Success)
    }
}

/// Trait abstracting how a single command line is executed.
///
/// Production code uses [`super::RealExecutorBackend`]; tests provide an
/// implementation that records command lines and replays canned outcomes.
pub trait ExecutorBackend: Send {
    /// Run `command` to completion.
    ///
    /// `Err` means the process never ran (e.g. the program was not found);
    /// a process that ran and exited non-zero is `Ok(Failed(code))`.
    fn run_invocation<'a>(
        &'a mut self,
        command: &'a CommandLine,
    ) -> Pin<Box<dyn Future<Output = Result<InvocationOutcome>> + Send + 'a>>;
}
