//! The shim executable.
//!
//! [`try_run`] resolves the wanted version, picks it from the installed
//! catalog and runs it; `main` turns the result into this process's own
//! termination.

use nodist_shim::{Config, Invocation, SpecResolver};
use nodist_version::{Catalog, VersionError, select};
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

pub use delegate::{ChildOutcome, delegate, terminate_like};
pub use logging::init_logging;

pub mod delegate;
mod logging;

/// Process exit codes for the shim's own failures.
pub mod exit_code {
    pub const MISSING_PREFIX: i32 = 40;
    pub const UNDECIDED: i32 = 41;
    pub const DELEGATION: i32 = 42;
    pub const MALFORMED: i32 = 43;
    pub const CATALOG: i32 = 44;
    pub const NO_MATCH: i32 = 45;
}

pub fn try_run(config: &Config, invocation: &Invocation) -> Result<ChildOutcome, Error> {
    let resolved = SpecResolver::standard(config, invocation).resolve()?;
    debug!(source = resolved.source, file = ?resolved.file, spec = %resolved.spec, "resolved spec");

    let versions_dir = config.versions_dir();
    debug!(arch = %config.get_arch(), dir = %versions_dir.display(), "listing installed versions");
    let catalog = Catalog::scan(&versions_dir).map_err(Error::Catalog)?;
    let installed = select(&catalog, &resolved.spec).ok_or_else(|| Error::NoMatch {
        spec: resolved.spec.to_string(),
    })?;
    debug!(version = %installed, "found matching version");

    let binary = config.executable(installed.dir_name());
    delegate(&binary, invocation.args())
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Resolve(#[from] nodist_shim::Error),

    #[error("couldn't list installed versions")]
    Catalog(#[source] VersionError),

    #[error("couldn't find an installed version that matches version spec '{spec}'")]
    NoMatch { spec: String },

    #[error("failed to launch {path}")]
    Delegation {
        path:   PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Resolve(e) => match e {
                nodist_shim::Error::MissingPrefix(_) => exit_code::MISSING_PREFIX,
                nodist_shim::Error::Malformed { .. } => exit_code::MALFORMED,
                nodist_shim::Error::Undecided
                | nodist_shim::Error::CurrentDir(_)
                | nodist_shim::Error::Walk(_)
                | nodist_shim::Error::Read { .. } => exit_code::UNDECIDED,
            },
            Error::Catalog(_) => exit_code::CATALOG,
            Error::NoMatch { .. } => exit_code::NO_MATCH,
            Error::Delegation { .. } => exit_code::DELEGATION,
        }
    }

    fn hint(&self) -> Option<&'static str> {
        match self {
            Error::Resolve(nodist_shim::Error::MissingPrefix(_)) => {
                Some("Please set the path to the nodist directory in the NODIST_PREFIX environment variable.")
            }
            Error::Resolve(nodist_shim::Error::Undecided | nodist_shim::Error::Malformed { .. }) => {
                Some("Please set a version.")
            }
            Error::NoMatch { .. } => Some("Install a matching version or change the version spec."),
            _ => None,
        }
    }
}

/// Human-readable report of a fatal error, including its causes.
pub fn diagnostic(error: &Error) -> String {
    let mut message = format!("nodist: {error}");
    let mut cause = std::error::Error::source(error);
    while let Some(e) = cause {
        message.push_str(&format!("\n  caused by: {e}"));
        cause = std::error::Error::source(e);
    }
    if let Some(hint) = error.hint() {
        message.push('\n');
        message.push_str(hint);
    }
    message
}
