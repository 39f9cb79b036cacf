//! Error types for spec resolution.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("installation root is not configured: set {0}")]
    MissingPrefix(&'static str),

    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("couldn't decide which node version to use")]
    Undecided,

    #[error("malformed version spec '{spec}'")]
    Malformed {
        spec:   String,
        source: nodist_version::VersionError,
    },

    #[error(transparent)]
    Walk(#[from] nodist_platform::Error),

    #[error("failed to read {path}")]
    Read {
        path:   PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
