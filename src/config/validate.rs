// src/config/validate.rs

use std::collections::HashSet;

use crate::config::model::{BatchFile, RawBatchFile};
use crate::errors::{Result, StatsBatchError};

impl TryFrom<RawBatchFile> for BatchFile {
    type Error = StatsBatchError;

    fn try_from(raw: RawBatchFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_batch(&raw)?;
        Ok(BatchFile::new_unchecked(raw.config, raw.invocation))
    }
}

pub fn validate_raw_batch(batch: &RawBatchFile) -> Result<()> {
    ensure_has_invocations(batch)?;
    validate_config_section(batch)?;
    validate_invocations(batch)?;
    Ok(())
}

fn ensure_has_invocations(batch: &RawBatchFile) -> Result<()> {
    if batch.invocation.is_empty() {
        return Err(StatsBatchError::ConfigError(
            "batch must contain at least one [[invocation]] entry".to_string(),
        ));
    }
    Ok(())
}

fn validate_config_section(batch: &RawBatchFile) -> Result<()> {
    let cfg = &batch.config;

    if cfg.script.trim().is_empty() {
        return Err(StatsBatchError::ConfigError(
            "[config].script must not be empty".to_string(),
        ));
    }

    if cfg.log_dir.trim().is_empty() {
        return Err(StatsBatchError::ConfigError(
            "[config].log_dir must not be empty".to_string(),
        ));
    }

    if matches!(cfg.working_dir.as_deref(), Some(dir) if dir.trim().is_empty()) {
        return Err(StatsBatchError::ConfigError(
            "[config].working_dir must not be empty when set".to_string(),
        ));
    }

    Ok(())
}

fn validate_invocations(batch: &RawBatchFile) -> Result<()> {
    let mut names = HashSet::new();

    for (idx, inv) in batch.invocation.iter().enumerate() {
        let entry = idx + 1;

        if let Some(ref name) = inv.name {
            if name.trim().is_empty() {
                return Err(StatsBatchError::ConfigError(format!(
                    "invocation #{entry} has an empty name"
                )));
            }
            if !names.insert(name.as_str()) {
                return Err(StatsBatchError::ConfigError(format!(
                    "invocation name '{name}' is used more than once"
                )));
            }
        }

        let mut seen = HashSet::new();
        for tag in inv.ignore.iter() {
            if !seen.insert(*tag) {
                return Err(StatsBatchError::ConfigError(format!(
                    "invocation #{entry} lists ignore tag '{tag}' more than once"
                )));
            }
        }

        for (key, value) in [("out_dir", &inv.out_dir), ("dataset", &inv.dataset)] {
            if matches!(value.as_deref(), Some(v) if v.trim().is_empty()) {
                return Err(StatsBatchError::ConfigError(format!(
                    "invocation #{entry} has an empty `{key}`"
                )));
            }
        }
    }

    Ok(())
}
