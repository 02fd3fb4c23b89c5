#![allow(dead_code)]

use statsbatch::batch::Invocation;
use statsbatch::config::{BatchFile, ConfigSection, RawBatchFile};
use statsbatch::types::FailureBehaviour;

/// Builder for `BatchFile` to simplify test setup.
pub struct BatchBuilder {
    batch: RawBatchFile,
}

impl BatchBuilder {
    pub fn new() -> Self {
        Self {
            batch: RawBatchFile {
                config: ConfigSection::default(),
                invocation: Vec::new(),
            },
        }
    }

    pub fn builtin() -> Self {
        Self {
            batch: RawBatchFile::builtin(),
        }
    }

    pub fn with_invocation(mut self, invocation: Invocation) -> Self {
        self.batch.invocation.push(invocation);
        self
    }

    pub fn with_disabled(mut self, invocation: Invocation) -> Self {
        self.batch.invocation.push(Invocation {
            enabled: false,
            ..invocation
        });
        self
    }

    pub fn interpreter(mut self, interpreter: Option<&str>) -> Self {
        self.batch.config.interpreter = interpreter.map(str::to_string);
        self
    }

    pub fn script(mut self, script: &str) -> Self {
        self.batch.config.script = script.to_string();
        self
    }

    pub fn log_dir(mut self, dir: &str) -> Self {
        self.batch.config.log_dir = dir.to_string();
        self
    }

    pub fn working_dir(mut self, dir: &str) -> Self {
        self.batch.config.working_dir = Some(dir.to_string());
        self
    }

    pub fn on_failure(mut self, behaviour: FailureBehaviour) -> Self {
        self.batch.config.on_failure = behaviour;
        self
    }

    pub fn build(self) -> BatchFile {
        BatchFile::try_from(self.batch).expect("Failed to build valid batch from builder")
    }
}

impl Default for BatchBuilder {
    fn default() -> Self {
        Self::new()
    }
}
