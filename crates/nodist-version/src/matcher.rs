use crate::catalog::Catalog;
use crate::spec::VersionSpec;
use crate::version::InstalledVersion;
use tracing::debug;

/// Pick the installed version `spec` resolves to.
///
/// `latest` is the newest entry. A range takes the first entry, scanning
/// newest to oldest, that satisfies it. `None` when nothing qualifies.
pub fn select<'a>(catalog: &'a Catalog, spec: &VersionSpec) -> Option<&'a InstalledVersion> {
    match spec {
        VersionSpec::Latest => catalog.newest(),
        VersionSpec::Range(constraint) => catalog.iter().find(|installed| {
            debug!(version = %installed, spec = %constraint, "checking");
            constraint.matches(installed.version())
        }),
    }
}
