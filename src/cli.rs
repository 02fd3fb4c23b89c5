// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `statsbatch`.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "statsbatch",
    version,
    about = "Run the API-log statistics script over a batch of flag combinations.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to a batch file (TOML).
    ///
    /// If omitted, the built-in batch of ten `-pn` runs against `./apilogs/`
    /// is used.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Interpreter used to launch the script (overrides `[config].interpreter`).
    #[arg(long, value_name = "PROG", conflicts_with = "no_interpreter")]
    pub interpreter: Option<String>,

    /// Execute the script directly instead of through an interpreter.
    #[arg(long)]
    pub no_interpreter: bool,

    /// Statistics script to run (overrides `[config].script`).
    #[arg(long, value_name = "PATH")]
    pub script: Option<String>,

    /// Log directory passed as the first positional argument
    /// (overrides `[config].log_dir`).
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<String>,

    /// Working directory for every invocation (overrides `[config].working_dir`).
    #[arg(long, value_name = "DIR")]
    pub working_dir: Option<String>,

    /// Stop the batch at the first failed invocation.
    #[arg(long)]
    pub fail_fast: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `STATSBATCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the command lines, but don't execute anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
