#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use statsbatch::batch::CommandLine;
use statsbatch_test_utils::{FakeExecutor, FakeOutcome};

pub type Recorded = Arc<Mutex<Vec<CommandLine>>>;

/// Fake executor plus a handle to the command lines it receives.
pub fn fake_executor(outcomes: Vec<FakeOutcome>) -> (FakeExecutor, Recorded) {
    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
    let executor = FakeExecutor::new(Arc::clone(&recorded)).with_outcomes(outcomes);
    (executor, recorded)
}

/// Argument vectors as the statistics script sees them.
pub fn script_argvs(recorded: &Recorded) -> Vec<Vec<String>> {
    recorded
        .lock()
        .unwrap()
        .iter()
        .map(|c| c.args.clone())
        .collect()
}
