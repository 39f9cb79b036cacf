//! Nearest-first upward search for project files.
//!
//! [`Ancestors`] yields the starting directory and then each parent, one
//! trailing segment at a time, ending with the filesystem root. It is a plain
//! value: clone it to restart the walk.

use crate::error::{Error, Result};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Ancestors {
    next: Option<PathBuf>,
}

impl Ancestors {
    pub fn new(start: impl Into<PathBuf>) -> Self {
        let start = start.into();
        let next = (!start.as_os_str().is_empty()).then_some(start);
        Self { next }
    }
}

impl Iterator for Ancestors {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        let current = self.next.take()?;
        self.next = current
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf);
        Some(current)
    }
}

/// A file located by [`find_upward`] together with what was read from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found<T> {
    pub path:  PathBuf,
    pub value: T,
}

/// Probe `file_name` in `start` and each of its ancestors, stopping at the
/// first successful `read`.
///
/// A probe failing with [`io::ErrorKind::NotFound`] moves on to the parent.
/// Any other failure ends the search with [`Error::Read`]. Running out of
/// ancestors is `Ok(None)`.
pub fn find_upward<T, F>(start: &Path, file_name: &str, mut read: F) -> Result<Option<Found<T>>>
where
    F: FnMut(&Path) -> io::Result<T>,
{
    for dir in Ancestors::new(start) {
        let candidate = dir.join(file_name);
        debug!(path = %candidate.display(), "probing");
        match read(&candidate) {
            Ok(value) => {
                return Ok(Some(Found {
                    path: candidate,
                    value,
                }));
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(source) => {
                return Err(Error::Read {
                    path: candidate,
                    source,
                });
            }
        }
    }
    Ok(None)
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// One probe per path segment, and the walk always ends.
        #[test]
        fn walk_visits_each_segment_once(segments in prop::collection::vec("[a-z0-9_]{1,8}", 0..12)) {
            let mut start = std::env::temp_dir();
            for segment in &segments {
                start.push(segment);
            }
            let depth = crate::path::depth(&start);
            let visited: Vec<PathBuf> = Ancestors::new(&start).collect();
            prop_assert_eq!(visited.len(), depth);
            prop_assert_eq!(visited.first(), Some(&start));
            for pair in visited.windows(2) {
                prop_assert_eq!(pair[0].parent(), Some(pair[1].as_path()));
            }
        }
    }
}
