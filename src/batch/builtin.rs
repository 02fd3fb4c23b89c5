// src/batch/builtin.rs

//! The batch that runs when no batch file is given.

use crate::batch::Invocation;
use crate::types::IgnoreTag::*;

pub const DEFAULT_SCRIPT: &str = "stats.py";
pub const DEFAULT_LOG_DIR: &str = "./apilogs/";
pub const DEFAULT_INTERPRETER: &str = "python3";

/// Ten `-pn` runs, from the unfiltered baseline to every ignore tag plus a
/// minimum of two APIs.
pub fn builtin_invocations() -> Vec<Invocation> {
    let pn = Invocation::plot_normalized;
    let every_tag = [Dotnet, Nonc, Dll, Packed, Empty];

    vec![
        pn(),
        pn().with_min_apis(2),
        pn().ignoring([Empty]),
        pn().ignoring([Packed]),
        pn().ignoring([Dotnet, Nonc]),
        pn().ignoring([Dotnet, Nonc, Packed]),
        pn().ignoring([Dotnet, Nonc, Dll]),
        pn().ignoring([Dotnet, Nonc, Dll, Packed]),
        pn().ignoring(every_tag),
        pn().ignoring(every_tag).with_min_apis(2),
    ]
}
