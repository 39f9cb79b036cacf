use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, VersionError>;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("invalid version '{input}'")]
    Version {
        input:  String,
        source: semver::Error,
    },

    #[error("empty version spec")]
    Empty,

    #[error("invalid version range '{input}': {reason}")]
    Range { input: String, reason: String },

    #[error("invalid version range '{input}'")]
    Req {
        input:  String,
        source: semver::Error,
    },

    #[error("failed to list installed versions in {path}")]
    ReadDir {
        path:   PathBuf,
        source: std::io::Error,
    },
}
