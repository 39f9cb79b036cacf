//! Engine declarations in `package.json`.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
struct Manifest {
    #[serde(default)]
    engines: Option<Engines>,
}

#[derive(Debug, Default, Deserialize)]
struct Engines {
    #[serde(default)]
    node: Option<String>,
}

/// Extract `engines.node` from raw manifest bytes.
///
/// `Ok(None)` when the document parses but declares no node engine. Other
/// fields are ignored, but a non-string `engines.node` is a parse error.
pub fn engine_spec(raw: &[u8]) -> Result<Option<String>, serde_json::Error> {
    let manifest: Manifest = serde_json::from_slice(raw)?;
    Ok(manifest.engines.and_then(|e| e.node))
}
