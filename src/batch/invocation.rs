// src/batch/invocation.rs

use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;

use crate::types::IgnoreTag;

/// One entry of a batch: the flag set for a single run of the statistics
/// program.
///
/// Every flag is independently optional. Rendering order is fixed so the
/// same entry always produces the same argument vector:
///
/// ```text
/// <script> <log_dir> [-pna] [--ignore TAG...] [--min_apis N] [--out_dir DIR] [--dataset FILE]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Invocation {
    /// Optional label used in logs and reports.
    #[serde(default)]
    pub name: Option<String>,

    /// `false` keeps the entry in the list without running it.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// `-p`
    #[serde(default)]
    pub plot: bool,

    /// `-n`
    #[serde(default)]
    pub normalize: bool,

    /// `-a`
    #[serde(default)]
    pub apt_stats: bool,

    /// `--ignore <tag>...`; omitted entirely when empty.
    #[serde(default)]
    pub ignore: Vec<IgnoreTag>,

    /// `--min_apis <n>`
    #[serde(default)]
    pub min_apis: Option<u32>,

    /// `--out_dir <dir>`
    #[serde(default)]
    pub out_dir: Option<String>,

    /// `--dataset <csv>`
    #[serde(default)]
    pub dataset: Option<String>,
}

fn default_enabled() -> bool {
    true
}

impl Default for Invocation {
    fn default() -> Self {
        Self {
            name: None,
            enabled: true,
            plot: false,
            normalize: false,
            apt_stats: false,
            ignore: Vec::new(),
            min_apis: None,
            out_dir: None,
            dataset: None,
        }
    }
}

impl Invocation {
    /// The `-pn` entry every built-in run starts from.
    pub fn plot_normalized() -> Self {
        Self {
            plot: true,
            normalize: true,
            ..Self::default()
        }
    }

    pub fn ignoring(mut self, tags: impl IntoIterator<Item = IgnoreTag>) -> Self {
        self.ignore.extend(tags);
        self
    }

    pub fn with_min_apis(mut self, min: u32) -> Self {
        self.min_apis = Some(min);
        self
    }

    /// Flags only, without script and log directory.
    pub fn flag_args(&self) -> Vec<String> {
        let mut args = Vec::new();

        let cluster: String = [
            (self.plot, 'p'),
            (self.normalize, 'n'),
            (self.apt_stats, 'a'),
        ]
        .iter()
        .filter(|(on, _)| *on)
        .map(|(_, c)| *c)
        .collect();
        if !cluster.is_empty() {
            args.push(format!("-{cluster}"));
        }

        if !self.ignore.is_empty() {
            args.push("--ignore".to_string());
            args.extend(self.ignore.iter().map(|t| t.as_str().to_string()));
        }

        if let Some(min) = self.min_apis {
            args.push("--min_apis".to_string());
            args.push(min.to_string());
        }

        if let Some(ref dir) = self.out_dir {
            args.push("--out_dir".to_string());
            args.push(dir.clone());
        }

        if let Some(ref dataset) = self.dataset {
            args.push("--dataset".to_string());
            args.push(dataset.clone());
        }

        args
    }

    /// Full argument vector: `[script, log_dir, ...flags]`.
    pub fn argv(&self, script: &str, log_dir: &str) -> Vec<String> {
        let mut argv = vec![script.to_string(), log_dir.to_string()];
        argv.extend(self.flag_args());
        argv
    }

    /// Name for logs: the configured label, or the flags themselves.
    pub fn label(&self) -> String {
        match self.name {
            Some(ref name) => name.clone(),
            None => {
                let flags = self.flag_args();
                if flags.is_empty() {
                    "(no flags)".to_string()
                } else {
                    flags.join(" ")
                }
            }
        }
    }
}

/// A fully resolved process to spawn for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
}

impl CommandLine {
    /// Resolve an argument vector `[script, ...]` into a process.
    ///
    /// With an interpreter the whole vector becomes its arguments; without
    /// one the script is executed directly.
    pub fn resolve(
        interpreter: Option<&str>,
        argv: Vec<String>,
        working_dir: Option<PathBuf>,
    ) -> Self {
        match interpreter {
            Some(interp) => Self {
                program: interp.to_string(),
                args: argv,
                working_dir,
            },
            None => {
                let mut iter = argv.into_iter();
                let program = iter.next().unwrap_or_default();
                Self {
                    program,
                    args: iter.collect(),
                    working_dir,
                }
            }
        }
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " '{arg}'")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}
