// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`backend`] provides the `ExecutorBackend` trait the dispatcher talks
//!   to, so tests can swap in a fake that never spawns processes.
//! - [`process`] is the production backend built on
//!   `tokio::process::Command`.

pub mod backend;
pub mod process;

pub use backend::{ExecutorBackend, InvocationOutcome};
pub use process::RealExecutorBackend;
