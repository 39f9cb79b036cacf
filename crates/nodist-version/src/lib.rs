//! Version specs, installed versions and how one is picked for the other.
//!
//! - [`VersionSpec`]: `latest` or a range [`Constraint`], normalized from
//!   whatever text a project or the environment supplied.
//! - [`Catalog`]: installed versions under one tree, newest first.
//! - [`select`]: the catalog entry a spec resolves to.

pub use catalog::Catalog;
pub use constraint::Constraint;
pub use error::{Result, VersionError};
pub use matcher::select;
pub use spec::{LATEST, VersionSpec, normalize};
pub use version::InstalledVersion;

mod catalog;
mod constraint;
mod error;
mod matcher;
mod spec;
mod version;
