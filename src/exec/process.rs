// src/exec/process.rs

//! Real child-process execution.

use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info};

use crate::batch::CommandLine;
use crate::errors::{Result, StatsBatchError};
use crate::exec::backend::{ExecutorBackend, InvocationOutcome};

/// Executor backend used in production.
///
/// The child inherits stdin/stdout/stderr, so whatever the statistics
/// program prints reaches the terminal untouched.
#[derive(Debug, Default)]
pub struct RealExecutorBackend;

impl RealExecutorBackend {
    pub fn new() -> Self {
        Self
    }
}

impl ExecutorBackend for RealExecutorBackend {
    fn run_invocation<'a>(
        &'a mut self,
        command: &'a CommandLine,
    ) -> Pin<Box<dyn Future<Output = Result<InvocationOutcome>> + Send + 'a>> {
        Box::pin(run_command(command))
    }
}

async fn run_command(command: &CommandLine) -> Result<InvocationOutcome> {
    let mut cmd = Command::new(&command.program);
    cmd.args(&command.args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .kill_on_drop(true);

    if let Some(ref dir) = command.working_dir {
        cmd.current_dir(dir);
    }

    debug!(program = %command.program, args = ?command.args, "spawning process");

    let mut child = cmd.spawn().map_err(|source| StatsBatchError::Spawn {
        program: command.program.clone(),
        source,
    })?;

    let status = child.wait().await?;
    let code = status.code().unwrap_or(-1);

    info!(
        program = %command.program,
        exit_code = code,
        success = status.success(),
        "process exited"
    );

    Ok(if status.success() {
        InvocationOutcome::Success
    } else {
        InvocationOutcome::Failed(code)
    })
}
