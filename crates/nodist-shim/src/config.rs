//! Process-wide settings, read from the environment once at startup.

use crate::error::{Error, Result};
use nodist_platform::Arch;
use nodist_platform::path::executable_name;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const PREFIX_VAR: &str = "NODIST_PREFIX";
pub const NODE_VERSION_VAR: &str = "NODE_VERSION";
pub const NODIST_VERSION_VAR: &str = "NODIST_VERSION";
pub const X64_VAR: &str = "NODIST_X64";
pub const LOG_VAR: &str = "NODIST_LOG";

pub const MANIFEST_FILE: &str = "package.json";
pub const MARKER_FILE: &str = ".node-version";
pub const EXECUTABLE_STEM: &str = "node";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    prefix:         PathBuf,
    arch:           Arch,
    node_version:   Option<String>,
    nodist_version: Option<String>,
    log_filter:     Option<String>,
}

impl Config {
    pub fn new(prefix: impl Into<PathBuf>) -> Self {
        Self {
            prefix:         prefix.into(),
            arch:           Arch::default(),
            node_version:   None,
            nodist_version: None,
            log_filter:     None,
        }
    }

    pub fn from_env() -> Result<Self> { Self::from_lookup(|key| std::env::var_os(key)) }

    /// Build from an arbitrary variable source.
    ///
    /// An unset or empty installation root is [`Error::MissingPrefix`].
    /// Non-UTF-8 values of the other variables count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let prefix = lookup(PREFIX_VAR)
            .filter(|p| !p.is_empty())
            .ok_or(Error::MissingPrefix(PREFIX_VAR))?;
        let text = |key: &str| lookup(key).and_then(|v| v.into_string().ok());

        Ok(Self {
            prefix:         PathBuf::from(prefix),
            arch:           Arch::from_flag(text(X64_VAR).as_deref()),
            node_version:   text(NODE_VERSION_VAR),
            nodist_version: text(NODIST_VERSION_VAR),
            log_filter:     text(LOG_VAR).filter(|f| !f.trim().is_empty()),
        })
    }

    pub fn arch(mut self, arch: Arch) -> Self {
        self.arch = arch;
        self
    }

    pub fn node_version(mut self, spec: impl Into<String>) -> Self {
        self.node_version = Some(spec.into());
        self
    }

    pub fn nodist_version(mut self, spec: impl Into<String>) -> Self {
        self.nodist_version = Some(spec.into());
        self
    }

    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    pub fn prefix(&self) -> &Path { &self.prefix }

    pub fn get_arch(&self) -> Arch { self.arch }

    pub fn get_node_version(&self) -> Option<&str> { self.node_version.as_deref() }

    pub fn get_nodist_version(&self) -> Option<&str> { self.nodist_version.as_deref() }

    pub fn get_log_filter(&self) -> Option<&str> { self.log_filter.as_deref() }

    /// `<prefix>/v` or `<prefix>/v-x64`.
    pub fn versions_dir(&self) -> PathBuf { self.prefix.join(self.arch.tree_dir()) }

    /// The global `.node-version` at the installation root.
    pub fn global_marker(&self) -> PathBuf { self.prefix.join(MARKER_FILE) }

    /// The node executable inside an installed version directory.
    pub fn executable(&self, version_dir: &str) -> PathBuf {
        self.versions_dir()
            .join(version_dir)
            .join(executable_name(EXECUTABLE_STEM))
    }
}
