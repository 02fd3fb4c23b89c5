// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::model::{BatchFile, RawBatchFile};
use crate::config::overrides::apply_cli_overrides;
use crate::errors::Result;

/// Load a batch file from a given path and return the raw `RawBatchFile`.
///
/// This only performs TOML deserialization; semantic checks happen in
/// [`load_and_validate`].
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawBatchFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let batch: RawBatchFile = toml::from_str(&contents)?;

    Ok(batch)
}

/// Load a batch file from path and run validation.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<BatchFile> {
    let raw = load_from_path(&path)?;
    BatchFile::try_from(raw)
}

/// Build the batch the CLI should run.
///
/// - `--config` given: load that file, otherwise use the built-in batch.
/// - Apply CLI overrides (`--script`, `--log-dir`, `--fail-fast`, ...).
/// - Validate the result, so overrides cannot produce an invalid batch.
pub fn resolve_batch(args: &CliArgs) -> Result<BatchFile> {
    let mut raw = match args.config {
        Some(ref path) => {
            debug!(path = %path, "loading batch file");
            load_from_path(path)?
        }
        None => {
            debug!("no batch file given; using built-in batch");
            RawBatchFile::builtin()
        }
    };

    apply_cli_overrides(&mut raw.config, args);
    BatchFile::try_from(raw)
}
