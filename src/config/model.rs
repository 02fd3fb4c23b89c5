// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::batch::{
    CommandLine, DEFAULT_INTERPRETER, DEFAULT_LOG_DIR, DEFAULT_SCRIPT, Invocation,
    builtin_invocations,
};
use crate::types::FailureBehaviour;

/// Batch file exactly as read from TOML, before validation.
///
/// ```toml
/// [config]
/// interpreter = "python3"
/// script = "stats.py"
/// log_dir = "./apilogs/"
/// on_failure = "continue"
///
/// [[invocation]]
/// plot = true
/// normalize = true
/// ignore = ["dotnet", "nonc"]
/// min_apis = 2
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawBatchFile {
    #[serde(default)]
    pub config: ConfigSection,

    /// `[[invocation]]` entries, in run order.
    #[serde(default)]
    pub invocation: Vec<Invocation>,
}

impl RawBatchFile {
    /// The batch used when no file is given on the command line.
    pub fn builtin() -> Self {
        Self {
            config: ConfigSection::default(),
            invocation: builtin_invocations(),
        }
    }
}

/// `[config]` section: settings shared by every invocation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigSection {
    /// Program that runs the script. An empty string means the script is
    /// executed directly.
    #[serde(default = "default_interpreter")]
    pub interpreter: Option<String>,

    #[serde(default = "default_script")]
    pub script: String,

    /// First positional argument of every invocation.
    #[serde(default = "default_log_dir")]
    pub log_dir: String,

    /// Directory the child processes are started in; inherits ours if unset.
    #[serde(default)]
    pub working_dir: Option<String>,

    #[serde(default)]
    pub on_failure: FailureBehaviour,
}

fn default_interpreter() -> Option<String> {
    Some(DEFAULT_INTERPRETER.to_string())
}

fn default_script() -> String {
    DEFAULT_SCRIPT.to_string()
}

fn default_log_dir() -> String {
    DEFAULT_LOG_DIR.to_string()
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter(),
            script: default_script(),
            log_dir: default_log_dir(),
            working_dir: None,
            on_failure: FailureBehaviour::default(),
        }
    }
}

impl ConfigSection {
    pub fn effective_interpreter(&self) -> Option<&str> {
        self.interpreter
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Resolve one invocation into the process to spawn.
    pub fn command_for(&self, invocation: &Invocation) -> CommandLine {
        CommandLine::resolve(
            self.effective_interpreter(),
            invocation.argv(&self.script, &self.log_dir),
            self.working_dir.as_ref().map(PathBuf::from),
        )
    }
}

/// A validated batch.
///
/// Only obtainable through `TryFrom<RawBatchFile>` (see `validate.rs`) and
/// read-only afterwards, so holders can rely on the invariants checked there.
#[derive(Debug, Clone)]
pub struct BatchFile {
    config: ConfigSection,
    invocation: Vec<Invocation>,
}

impl BatchFile {
    pub(crate) fn new_unchecked(config: ConfigSection, invocation: Vec<Invocation>) -> Self {
        Self { config, invocation }
    }

    pub fn config(&self) -> &ConfigSection {
        &self.config
    }

    /// Every entry in run order, disabled ones included.
    pub fn invocations(&self) -> &[Invocation] {
        &self.invocation
    }

    pub fn enabled(&self) -> impl Iterator<Item = (usize, &Invocation)> {
        self.invocation.iter().enumerate().filter(|(_, inv)| inv.enabled)
    }

    pub fn enabled_count(&self) -> usize {
        self.enabled().count()
    }
}
