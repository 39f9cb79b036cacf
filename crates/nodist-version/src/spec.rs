//! The version a project asks for.

use crate::constraint::Constraint;
use crate::error::{Result, VersionError};

/// Spec token selecting the newest installed version.
pub const LATEST: &str = "latest";

/// Strip surrounding whitespace and a single leading `v`.
pub fn normalize(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed.strip_prefix('v').unwrap_or(trimmed).trim()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSpec {
    Latest,
    Range(Constraint),
}

impl VersionSpec {
    /// Normalize `raw` and parse it. Empty input is [`VersionError::Empty`].
    pub fn parse(raw: &str) -> Result<Self> {
        match normalize(raw) {
            "" => Err(VersionError::Empty),
            LATEST => Ok(VersionSpec::Latest),
            spec => Constraint::parse(spec).map(VersionSpec::Range),
        }
    }

    pub fn is_latest(&self) -> bool { matches!(self, VersionSpec::Latest) }
}

impl std::str::FromStr for VersionSpec {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> { VersionSpec::parse(s) }
}

impl std::fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VersionSpec::Latest => f.write_str(LATEST),
            VersionSpec::Range(c) => write!(f, "{c}"),
        }
    }
}
