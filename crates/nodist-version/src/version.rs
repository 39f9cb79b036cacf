//! A single installed version.

use crate::error::{Result, VersionError};
use semver::Version;
use std::cmp::Ordering;

/// Parsed version paired with the directory it was found in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstalledVersion {
    version:  Version,
    dir_name: String,
}

impl InstalledVersion {
    /// Parse a version directory name. A leading `v` is accepted.
    pub fn from_dir_name(name: &str) -> Result<Self> {
        let text = name.strip_prefix('v').unwrap_or(name);
        let version = Version::parse(text).map_err(|source| VersionError::Version {
            input: name.to_string(),
            source,
        })?;
        Ok(Self {
            version,
            dir_name: name.to_string(),
        })
    }

    pub fn version(&self) -> &Version { &self.version }

    /// Directory name as it appears on disk.
    pub fn dir_name(&self) -> &str { &self.dir_name }
}

impl Ord for InstalledVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.version
            .cmp(&other.version)
            .then_with(|| self.dir_name.cmp(&other.dir_name))
    }
}

impl PartialOrd for InstalledVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl std::fmt::Display for InstalledVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.version)
    }
}
