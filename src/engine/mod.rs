// src/engine/mod.rs

//! Sequential batch dispatch.
//!
//! The dispatcher walks the batch in order, hands each enabled entry to an
//! `ExecutorBackend`, waits for it, and applies the configured
//! `FailureBehaviour`. It never runs two invocations at once.

pub mod dispatcher;
pub mod report;

pub use dispatcher::Dispatcher;
pub use report::{BatchReport, InvocationResult};
