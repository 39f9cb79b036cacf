//! Host-facing helpers for the nodist shim.
//!
//! - [`walk`]: nearest-first ancestor walks used to locate project files.
//! - [`path`]: lexical path cleanup and executable naming.
//! - [`arch`]: the 32/64-bit installation tree selection.

pub use arch::Arch;
pub use error::{Error, Result};
pub use walk::{Ancestors, Found, find_upward};

pub mod arch;
mod error;
pub mod path;
pub mod walk;
