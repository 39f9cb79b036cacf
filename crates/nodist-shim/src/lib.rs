//! Deciding which node version a project wants.
//!
//! # Architecture
//!
//! The shim is a mechanism: it maps an invocation to one version spec and
//! leaves picking and launching the binary to its caller. Each place a spec
//! can come from is a [`SpecSource`]; a [`SpecResolver`] asks them in order
//! and the first non-blank answer wins.
//!
//! ```
//! use nodist_shim::{EnvOverride, SpecResolver};
//!
//! let resolver = SpecResolver::new()
//!     .with_source(EnvOverride::new("NODE_VERSION", None))
//!     .with_source(EnvOverride::new("NODIST_VERSION", Some(" v10.2.0\n".into())));
//!
//! let resolved = resolver.resolve().unwrap();
//! assert_eq!(resolved.source, "NODIST_VERSION");
//! assert_eq!(resolved.spec.to_string(), "10.2.0");
//! ```

pub use config::Config;
pub use error::{Error, Result};
pub use invocation::Invocation;
pub use resolver::{Resolved, SpecResolver};
pub use source::{Candidate, EnvOverride, GlobalMarker, LocalMarker, ManifestEngine, SpecSource};

pub mod config;
mod error;
mod invocation;
pub mod manifest;
pub mod marker;
mod resolver;
mod source;
