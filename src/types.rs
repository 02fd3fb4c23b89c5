use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Sample category the statistics program can be told to skip via
/// `--ignore <tag>...`.
///
/// The tag set mirrors the `choices` accepted by the external program, so an
/// unknown tag is rejected while parsing the batch file instead of surfacing
/// as a usage error from the child. Batch files and `FromStr` share one
/// parser, so both accept any letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum IgnoreTag {
    Dotnet,
    Nonc,
    Dll,
    Packed,
    Empty,
}

impl IgnoreTag {
    pub const ALL: [IgnoreTag; 5] = [
        IgnoreTag::Dotnet,
        IgnoreTag::Nonc,
        IgnoreTag::Dll,
        IgnoreTag::Packed,
        IgnoreTag::Empty,
    ];

    /// Token passed on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            IgnoreTag::Dotnet => "dotnet",
            IgnoreTag::Nonc => "nonc",
            IgnoreTag::Dll => "dll",
            IgnoreTag::Packed => "packed",
            IgnoreTag::Empty => "empty",
        }
    }
}

impl fmt::Display for IgnoreTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IgnoreTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dotnet" => Ok(IgnoreTag::Dotnet),
            "nonc" => Ok(IgnoreTag::Nonc),
            "dll" => Ok(IgnoreTag::Dll),
            "packed" => Ok(IgnoreTag::Packed),
            "empty" => Ok(IgnoreTag::Empty),
            other => Err(format!(
                "invalid ignore tag: {other} (expected one of dotnet, nonc, dll, packed, empty)"
            )),
        }
    }
}

impl TryFrom<String> for IgnoreTag {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// What to do with the rest of the batch once an invocation fails.
///
/// - `Continue`: log the failure and move on to the next entry (default).
/// - `Halt`: stop after the first failure; remaining entries are not run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum FailureBehaviour {
    #[default]
    Continue,
    Halt,
}

impl FromStr for FailureBehaviour {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "continue" => Ok(FailureBehaviour::Continue),
            "halt" => Ok(FailureBehaviour::Halt),
            other => Err(format!(
                "invalid on_failure: {other} (expected \"continue\" or \"halt\")"
            )),
        }
    }
}

impl TryFrom<String> for FailureBehaviour {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignore_tag_parses_case_insensitively() {
        assert_eq!("DotNet".parse::<IgnoreTag>(), Ok(IgnoreTag::Dotnet));
        assert_eq!(" packed ".parse::<IgnoreTag>(), Ok(IgnoreTag::Packed));
    }

    #[test]
    fn ignore_tag_display_matches_cli_token() {
        for tag in IgnoreTag::ALL {
            assert_eq!(tag.to_string().parse::<IgnoreTag>(), Ok(tag));
        }
    }

    #[test]
    fn unknown_ignore_tag_is_rejected() {
        let err = "upx".parse::<IgnoreTag>().unwrap_err();
        assert!(err.contains("upx"));
    }

    #[test]
    fn failure_behaviour_defaults_to_continue() {
        assert_eq!(FailureBehaviour::default(), FailureBehaviour::Continue);
        assert_eq!("HALT".parse::<FailureBehaviour>(), Ok(FailureBehaviour::Halt));
        assert!("stop".parse::<FailureBehaviour>().is_err());
    }
}
