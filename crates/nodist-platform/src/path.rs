//! Path-segment helpers built on [`std::path`], so the host's separator and
//! prefix conventions apply everywhere.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Lexically clean a path: drop `.` segments and fold `..` into its parent.
///
/// `..` directly under the root is discarded, the way the root is its own
/// parent. A relative path keeps leading `..` segments it cannot fold.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out.iter().map(|c| c.as_os_str()).collect()
}

/// Make `path` absolute against `cwd` and clean it.
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&cwd.join(path))
    }
}

/// Directory the upward search starts from.
///
/// With a target argument this is the directory containing it, resolved
/// against `cwd`; without one it is `cwd` itself. A target ending in a
/// separator is taken as the directory.
pub fn search_origin(target: Option<&OsStr>, cwd: &Path) -> PathBuf {
    match target {
        Some(target) => {
            let target = Path::new(target);
            // `lib/` names the directory itself.
            let dir = if ends_with_separator(target) {
                target
            } else {
                target.parent().unwrap_or(Path::new(""))
            };
            absolutize(dir, cwd)
        }
        None => normalize(cwd),
    }
}

fn ends_with_separator(path: &Path) -> bool {
    path.as_os_str()
        .as_encoded_bytes()
        .last()
        .is_some_and(|&b| b.is_ascii() && std::path::is_separator(b as char))
}

/// Number of segments in `path`, counting a drive prefix and the root it
/// sits on as one. An upward walk from `path` makes at most this many probes.
pub fn depth(path: &Path) -> usize {
    path.components()
        .filter(|c| !matches!(c, Component::Prefix(_)))
        .count()
}

/// File name of an executable on this host (`node` -> `node.exe` on Windows).
pub fn executable_name(stem: &str) -> String {
    format!("{stem}{}", std::env::consts::EXE_SUFFIX)
}
