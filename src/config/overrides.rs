// src/config/overrides.rs

use crate::cli::CliArgs;
use crate::config::model::ConfigSection;
use crate::types::FailureBehaviour;

/// Apply command-line overrides on top of a `[config]` section.
pub fn apply_cli_overrides(cfg: &mut ConfigSection, args: &CliArgs) {
    if args.no_interpreter {
        cfg.interpreter = None;
    } else if let Some(ref interp) = args.interpreter {
        cfg.interpreter = Some(interp.clone());
    }

    if let Some(ref script) = args.script {
        cfg.script = script.clone();
    }

    if let Some(ref dir) = args.log_dir {
        cfg.log_dir = dir.clone();
    }

    if let Some(ref dir) = args.working_dir {
        cfg.working_dir = Some(dir.clone());
    }

    if args.fail_fast {
        cfg.on_failure = FailureBehaviour::Halt;
    }
}
