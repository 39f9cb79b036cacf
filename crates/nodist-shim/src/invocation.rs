use crate::error::{Error, Result};
use nodist_platform::path::search_origin;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// How the shim was called: the arguments to forward and where from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    args: Vec<OsString>,
    cwd:  PathBuf,
}

impl Invocation {
    pub fn new(args: impl IntoIterator<Item = impl Into<OsString>>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            cwd:  cwd.into(),
        }
    }

    /// Arguments after the program name, and the current directory.
    pub fn from_env() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(Error::CurrentDir)?;
        Ok(Self::new(std::env::args_os().skip(1), cwd))
    }

    pub fn args(&self) -> &[OsString] { &self.args }

    pub fn cwd(&self) -> &Path { &self.cwd }

    /// First argument, taken to be the script being run.
    pub fn target(&self) -> Option<&OsStr> { self.args.first().map(OsString::as_os_str) }

    /// Directory the upward search for project files starts in.
    pub fn search_origin(&self) -> PathBuf { search_origin(self.target(), &self.cwd) }
}
