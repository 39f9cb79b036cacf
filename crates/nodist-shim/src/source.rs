//! The places a version spec can come from.
//!
//! Every source answers "here is a spec" or "nothing here". Blank answers
//! count as nothing; the resolver decides that, not the source.

use crate::config::{MANIFEST_FILE, MARKER_FILE};
use crate::error::{Error, Result};
use crate::{manifest, marker};
use nodist_platform::find_upward;
use std::io;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Raw spec text and the file it was read from, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub raw:  String,
    pub file: Option<PathBuf>,
}

impl Candidate {
    pub fn from_env(raw: impl Into<String>) -> Self {
        Self {
            raw:  raw.into(),
            file: None,
        }
    }

    pub fn from_file(raw: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            raw:  raw.into(),
            file: Some(file.into()),
        }
    }
}

pub trait SpecSource {
    /// Short label used in diagnostics.
    fn name(&self) -> &'static str;

    fn lookup(&self) -> Result<Option<Candidate>>;
}

/// A version named directly in an environment variable.
#[derive(Debug, Clone)]
pub struct EnvOverride {
    var:   &'static str,
    value: Option<String>,
}

impl EnvOverride {
    pub fn new(var: &'static str, value: Option<String>) -> Self { Self { var, value } }
}

impl SpecSource for EnvOverride {
    fn name(&self) -> &'static str { self.var }

    fn lookup(&self) -> Result<Option<Candidate>> { Ok(self.value.clone().map(Candidate::from_env)) }
}

/// `engines.node` of the nearest `package.json` above the search origin.
///
/// The first manifest found settles it: if that file does not parse, or
/// declares no node engine, no further ancestors are searched.
#[derive(Debug, Clone)]
pub struct ManifestEngine {
    origin: PathBuf,
}

impl ManifestEngine {
    pub fn new(origin: impl Into<PathBuf>) -> Self {
        Self {
            origin: origin.into(),
        }
    }
}

impl SpecSource for ManifestEngine {
    fn name(&self) -> &'static str { "package.json engines.node" }

    fn lookup(&self) -> Result<Option<Candidate>> {
        let Some(found) = find_upward(&self.origin, MANIFEST_FILE, |p| std::fs::read(p))? else {
            return Ok(None);
        };

        match manifest::engine_spec(&found.value) {
            Ok(Some(spec)) => Ok(Some(Candidate::from_file(spec, found.path))),
            Ok(None) => {
                debug!(path = %found.path.display(), "manifest declares no node engine");
                Ok(None)
            }
            Err(e) => {
                warn!(path = %found.path.display(), error = %e, "ignoring unparsable manifest");
                Ok(None)
            }
        }
    }
}

/// The nearest `.node-version` above the search origin.
#[derive(Debug, Clone)]
pub struct LocalMarker {
    origin: PathBuf,
}

impl LocalMarker {
    pub fn new(origin: impl Into<PathBuf>) -> Self {
        Self {
            origin: origin.into(),
        }
    }
}

impl SpecSource for LocalMarker {
    fn name(&self) -> &'static str { "local .node-version" }

    fn lookup(&self) -> Result<Option<Candidate>> {
        let found = find_upward(&self.origin, MARKER_FILE, marker::read)?;
        Ok(found.map(|f| Candidate::from_file(f.value, f.path)))
    }
}

/// The `.node-version` at the installation root.
#[derive(Debug, Clone)]
pub struct GlobalMarker {
    path: PathBuf,
}

impl GlobalMarker {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }
}

impl SpecSource for GlobalMarker {
    fn name(&self) -> &'static str { "global .node-version" }

    fn lookup(&self) -> Result<Option<Candidate>> {
        match marker::read(&self.path) {
            Ok(raw) => Ok(Some(Candidate::from_file(raw, self.path.clone()))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(Error::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
