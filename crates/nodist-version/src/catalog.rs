//! Installed versions under one architecture tree.

use crate::error::{Result, VersionError};
use crate::version::InstalledVersion;
use std::path::Path;
use tracing::debug;

/// Installed versions, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    versions: Vec<InstalledVersion>,
}

impl Catalog {
    /// Build a catalog from directory names.
    ///
    /// Names that are not versions are left out and passed to `on_skip`.
    pub fn from_names<'a, I, F>(names: I, mut on_skip: F) -> Self
    where
        I: IntoIterator<Item = &'a str>,
        F: FnMut(&str, &VersionError),
    {
        let mut versions: Vec<InstalledVersion> = names
            .into_iter()
            .filter_map(|name| match InstalledVersion::from_dir_name(name) {
                Ok(v) => Some(v),
                Err(e) => {
                    debug!(name, error = %e, "skipping non-version directory");
                    on_skip(name, &e);
                    None
                }
            })
            .collect();
        versions.sort_by(|a, b| b.cmp(a));
        Self { versions }
    }

    /// List the subdirectories of `dir` and parse their names.
    pub fn scan(dir: &Path) -> Result<Self> { Self::scan_with(dir, |_, _| {}) }

    /// [`Catalog::scan`] with a callback for each skipped name.
    pub fn scan_with<F>(dir: &Path, mut on_skip: F) -> Result<Self>
    where
        F: FnMut(&str, &VersionError),
    {
        let read_dir_error = |source| VersionError::ReadDir {
            path: dir.to_path_buf(),
            source,
        };

        let mut names = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(read_dir_error)? {
            let entry = entry.map_err(read_dir_error)?;
            if !entry.path().is_dir() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(name) => debug!(name = ?name, "skipping non-UTF-8 directory name"),
            }
        }

        let catalog = Self::from_names(names.iter().map(String::as_str), &mut on_skip);
        debug!(dir = %dir.display(), count = catalog.len(), "installed versions");
        Ok(catalog)
    }

    pub fn newest(&self) -> Option<&InstalledVersion> { self.versions.first() }

    pub fn iter(&self) -> std::slice::Iter<'_, InstalledVersion> { self.versions.iter() }

    pub fn len(&self) -> usize { self.versions.len() }

    pub fn is_empty(&self) -> bool { self.versions.is_empty() }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a InstalledVersion;
    type IntoIter = std::slice::Iter<'a, InstalledVersion>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_from_names_sorted_descending() {
        let catalog = Catalog::from_names(["9.5.0", "10.2.0", "10.1.0"], |_, _| {});
        let order: Vec<String> = catalog.iter().map(ToString::to_string).collect();
        assert_eq!(order, ["10.2.0", "10.1.0", "9.5.0"]);
        assert_eq!(catalog.newest().map(InstalledVersion::dir_name), Some("10.2.0"));
    }

    #[test]
    fn test_from_names_reports_skips() {
        let mut skipped = Vec::new();
        let catalog = Catalog::from_names(["10.2.0", "junk", "tmp-download"], |name, _| {
            skipped.push(name.to_string())
        });
        assert_eq!(catalog.len(), 1);
        assert_eq!(skipped, ["junk", "tmp-download"]);
    }

    #[test]
    fn test_scan_directories_only() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let root = tempdir()?;
        for name in ["10.2.0", "v9.5.0", "not-a-version"] {
            std::fs::create_dir(root.path().join(name))?;
        }
        std::fs::write(root.path().join("11.0.0"), "a file, not an install")?;

        let mut skipped = Vec::new();
        let catalog = Catalog::scan_with(root.path(), |name, _| skipped.push(name.to_string()))?;
        let dirs: Vec<&str> = catalog.iter().map(InstalledVersion::dir_name).collect();
        assert_eq!(dirs, ["10.2.0", "v9.5.0"]);
        assert_eq!(skipped, ["not-a-version"]);
        Ok(())
    }

    #[test]
    fn test_scan_empty_tree_is_not_an_error() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let root = tempdir()?;
        let catalog = Catalog::scan(root.path())?;
        assert!(catalog.is_empty());
        Ok(())
    }

    #[test]
    fn test_scan_missing_tree_is_an_error() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let root = tempdir()?;
        let missing = root.path().join("v-x64");
        assert!(matches!(Catalog::scan(&missing), Err(VersionError::ReadDir { .. })));
        Ok(())
    }
}
