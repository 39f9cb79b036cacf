//! Plain-text `.node-version` files.

use std::io;
use std::path::Path;

/// Read a marker file verbatim.
///
/// Invalid UTF-8 is replaced rather than rejected and a leading byte-order
/// mark is dropped; trimming is left to the resolver. A missing file is an
/// [`io::ErrorKind::NotFound`] error like any other read.
pub fn read(path: &Path) -> io::Result<String> {
    let bytes = std::fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(text.strip_prefix('\u{feff}').unwrap_or(&text).to_string())
}
