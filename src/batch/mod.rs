// src/batch/mod.rs

//! Invocation records and the built-in batch.
//!
//! - [`invocation`] holds the per-run flag set and renders it into an
//!   argument vector, plus the resolved [`CommandLine`] that gets spawned.
//! - [`builtin`] is the fixed list of runs used when no batch file is given.

pub mod builtin;
pub mod invocation;

pub use builtin::{DEFAULT_INTERPRETER, DEFAULT_LOG_DIR, DEFAULT_SCRIPT, builtin_invocations};
pub use invocation::{CommandLine, Invocation};
