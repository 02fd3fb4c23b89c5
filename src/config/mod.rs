// src/config/mod.rs

//! Batch file loading and validation for statsbatch.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a batch file from disk, or fall back to the built-in batch (`loader.rs`).
//! - Apply CLI overrides on top of the loaded file (`overrides.rs`).
//! - Validate basic invariants before anything is spawned (`validate.rs`).

pub mod loader;
pub mod model;
pub mod overrides;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, resolve_batch};
pub use model::{BatchFile, ConfigSection, RawBatchFile};
pub use overrides::apply_cli_overrides;
