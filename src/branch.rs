//! Branch name generation per the gfl naming convention:
//! `prefix/nickname/name`, or `prefix/name` when no nickname is configured.

use std::str::FromStr;

use crate::config::Config;
use crate::error::GflError;
use crate::version::Version;

/// Kind of work a new branch is for; selects the configured prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchKind {
    Feature,
    Fix,
    Hotfix,
}

impl BranchKind {
    /// The configured prefix for this kind
    pub fn prefix<'a>(&self, config: &'a Config) -> &'a str {
        match self {
            BranchKind::Feature => &config.feature_prefix,
            BranchKind::Fix => &config.fix_prefix,
            BranchKind::Hotfix => &config.hotfix_prefix,
        }
    }
}

impl FromStr for BranchKind {
    type Err = GflError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "feature" | "feat" => Ok(BranchKind::Feature),
            "fix" | "bugfix" => Ok(BranchKind::Fix),
            "hotfix" => Ok(BranchKind::Hotfix),
            _ => Err(GflError::UnknownBranchKind(s.to_string())),
        }
    }
}

/// Generate a branch name from the resolved configuration.
///
/// The user-supplied name segment is run through the configured
/// `branchCaseFormat` first; prefix and nickname are used as configured.
pub fn generate_branch_name(config: &Config, kind: BranchKind, name: &str) -> String {
    let formatted = apply_case_format(name, &config.branch_case_format);
    let prefix = kind.prefix(config);

    if config.nickname.is_empty() {
        format!("{}/{}", prefix, formatted)
    } else {
        format!("{}/{}/{}", prefix, config.nickname, formatted)
    }
}

/// Apply a case format to a branch name segment.
///
/// Supported formats: "original" (unchanged), "lower", "kebab" and
/// "snake". The value comes from layered user config, so an unknown
/// format falls back to "original" rather than erroring.
pub fn apply_case_format(name: &str, format: &str) -> String {
    match format.to_ascii_lowercase().as_str() {
        "lower" => name.to_lowercase(),
        "kebab" => join_words(name, '-'),
        "snake" => join_words(name, '_'),
        _ => name.to_string(),
    }
}

// Lowercase and rejoin on the given separator, treating spaces, dashes
// and underscores as word boundaries.
fn join_words(name: &str, separator: char) -> String {
    name.to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(&separator.to_string())
}

/// Release branch name for a version: `releases/release-vX.Y.Z`
pub fn release_branch_name(version: &Version) -> String {
    format!("releases/release-{}", version)
}
