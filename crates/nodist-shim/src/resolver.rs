//! Ordered spec resolution.
//!
//! A [`SpecResolver`] is a list of [`SpecSource`]s tried front to back. The
//! first whose answer is not blank wins; order is data, so adding or moving a
//! source does not touch the resolution logic.

use crate::config::{Config, NODE_VERSION_VAR, NODIST_VERSION_VAR};
use crate::error::{Error, Result};
use crate::invocation::Invocation;
use crate::source::{Candidate, EnvOverride, GlobalMarker, LocalMarker, ManifestEngine, SpecSource};
use nodist_version::{VersionError, VersionSpec};
use std::path::PathBuf;
use tracing::debug;

/// A parsed spec and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub source: &'static str,
    pub file:   Option<PathBuf>,
    pub spec:   VersionSpec,
}

#[derive(Default)]
pub struct SpecResolver {
    sources: Vec<Box<dyn SpecSource>>,
}

impl SpecResolver {
    pub fn new() -> Self { Self::default() }

    /// The standard chain: `NODE_VERSION`, `NODIST_VERSION`, the nearest
    /// manifest's `engines.node`, the nearest `.node-version`, and finally
    /// the global `.node-version`.
    pub fn standard(config: &Config, invocation: &Invocation) -> Self {
        let origin = invocation.search_origin();
        Self::new()
            .with_source(EnvOverride::new(
                NODE_VERSION_VAR,
                config.get_node_version().map(str::to_string),
            ))
            .with_source(EnvOverride::new(
                NODIST_VERSION_VAR,
                config.get_nodist_version().map(str::to_string),
            ))
            .with_source(ManifestEngine::new(origin.clone()))
            .with_source(LocalMarker::new(origin))
            .with_source(GlobalMarker::new(config.global_marker()))
    }

    pub fn with_source(mut self, source: impl SpecSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn source_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sources.iter().map(|s| s.name())
    }

    /// First non-blank candidate, without parsing it.
    pub fn decide(&self) -> Result<(&'static str, Candidate)> {
        for source in &self.sources {
            match source.lookup()? {
                Some(candidate) if !candidate.raw.trim().is_empty() => {
                    debug!(source = source.name(), raw = %candidate.raw.trim(), "spec found");
                    return Ok((source.name(), candidate));
                }
                _ => debug!(source = source.name(), "no spec"),
            }
        }
        Err(Error::Undecided)
    }

    /// Decide and parse. A spec that normalizes to nothing is
    /// [`Error::Undecided`]; one that does not parse is [`Error::Malformed`].
    pub fn resolve(&self) -> Result<Resolved> {
        let (source, candidate) = self.decide()?;
        let spec = VersionSpec::parse(&candidate.raw).map_err(|e| match e {
            VersionError::Empty => Error::Undecided,
            source => Error::Malformed {
                spec: nodist_version::normalize(&candidate.raw).to_string(),
                source,
            },
        })?;
        Ok(Resolved {
            source,
            file: candidate.file,
            spec,
        })
    }
}

impl std::fmt::Debug for SpecResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.source_names()).finish()
    }
}
