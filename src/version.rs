use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::error::{GflError, Result};

/// Version assumed when a repository has no valid semantic version tags yet.
pub const DEFAULT_VERSION: Version = Version {
    major: 1,
    minor: 0,
    patch: 0,
};

/// Semantic version representation, rendered as `vMAJOR.MINOR.PATCH`.
///
/// Ordering is numeric per component, so `v1.10.0` sorts after `v1.2.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version from a tag string (e.g., "v1.2.3" -> Version(1,2,3)).
    ///
    /// Strict: the tag must start with a lowercase 'v' and contain exactly
    /// three dot-separated base-10 components. Anything else is an
    /// `InvalidVersionFormat` error.
    pub fn parse(tag: &str) -> Result<Self> {
        // \d+ also rejects sign characters that u32::from_str would accept
        let captures = Regex::new(r"^v(\d+)\.(\d+)\.(\d+)$")
            .ok()
            .and_then(|re| re.captures(tag))
            .ok_or_else(|| {
                GflError::invalid_version(format!("'{}' - expected vX.Y.Z", tag))
            })?;

        let component = |i: usize| -> Result<u32> {
            captures[i].parse::<u32>().map_err(|_| {
                GflError::invalid_version(format!(
                    "'{}' - component '{}' is out of range",
                    tag, &captures[i]
                ))
            })
        };

        Ok(Version {
            major: component(1)?,
            minor: component(2)?,
            patch: component(3)?,
        })
    }

    /// Compute the next version for the given increment kind.
    ///
    /// Major resets minor and patch, minor resets patch, patch touches
    /// nothing else. Returns a new value, the receiver is unchanged.
    pub fn increment(&self, kind: IncrementKind) -> Self {
        match kind {
            IncrementKind::Major => Version {
                major: self.major + 1,
                minor: 0,
                patch: 0,
            },
            IncrementKind::Minor => Version {
                major: self.major,
                minor: self.minor + 1,
                patch: 0,
            },
            IncrementKind::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch + 1,
            },
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Which component of a semantic version to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncrementKind {
    Major,
    Minor,
    Patch,
}

impl FromStr for IncrementKind {
    type Err = GflError;

    /// Case-insensitive; an unrecognized kind is a hard error, never a
    /// silent fall-back to patch.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "major" => Ok(IncrementKind::Major),
            "minor" => Ok(IncrementKind::Minor),
            "patch" => Ok(IncrementKind::Patch),
            _ => Err(GflError::UnsupportedIncrementKind(s.to_string())),
        }
    }
}

/// Find the highest semantic version among `tags`, with an explicit fallback.
///
/// Tags that do not parse as `vX.Y.Z` are silently skipped; if nothing
/// valid remains, `fallback` is returned.
pub fn latest_version_or<'a, I>(tags: I, fallback: Version) -> Version
where
    I: IntoIterator<Item = &'a str>,
{
    tags.into_iter()
        .filter_map(|tag| Version::parse(tag.trim()).ok())
        .max()
        .unwrap_or(fallback)
}

/// Find the highest semantic version among `tags`, defaulting to `v1.0.0`
/// when no tag parses.
pub fn latest_version<'a, I>(tags: I) -> Version
where
    I: IntoIterator<Item = &'a str>,
{
    latest_version_or(tags, DEFAULT_VERSION)
}
