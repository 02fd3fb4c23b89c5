use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use statsbatch::batch::CommandLine;
use statsbatch::errors::{Result, StatsBatchError};
use statsbatch::exec::{ExecutorBackend, InvocationOutcome};

/// Canned result for one fake run.
#[derive(Debug, Clone, Copy)]
pub enum FakeOutcome {
    Exit(InvocationOutcome),
    SpawnError,
}

/// A fake executor that:
/// - records every command line it was asked to run
/// - replays scripted outcomes in order, then succeeds for the rest.
pub struct FakeExecutor {
    executed: Arc<Mutex<Vec<CommandLine>>>,
    outcomes: VecDeque<FakeOutcome>,
}

impl FakeExecutor {
    pub fn new(executed: Arc<Mutex<Vec<CommandLine>>>) -> Self {
        Self {
            executed,
            outcomes: VecDeque::new(),
        }
    }

    pub fn with_outcomes(mut self, outcomes: impl IntoIterator<Item = FakeOutcome>) -> Self {
        self.outcomes.extend(outcomes);
        self
    }
}

impl ExecutorBackend for FakeExecutor {
    fn run_invocation<'a>(
        &'a mut self,
        command: &'a CommandLine,
    ) -> Pin<Box<dyn Future<Output = Result<InvocationOutcome>> + Send + 'a>> {
        let executed = Arc::clone(&self.executed);
        let next = self
            .outcomes
            .pop_front()
            .unwrap_or(FakeOutcome::Exit(InvocationOutcome::Success));

        Box::pin(async move {
            executed.lock().unwrap().push(command.clone());

            match next {
                FakeOutcome::Exit(outcome) => Ok(outcome),
                FakeOutcome::SpawnError => Err(StatsBatchError::Spawn {
                    program: command.program.clone(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "fake spawn error"),
                }),
            }
        })
    }
}
