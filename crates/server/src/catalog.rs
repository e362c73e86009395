use std::{fs, path::Path};

use anyhow::Context;
use shared::{
    domain::BlockRecord,
    protocol::{parse_catalog, reference_catalog},
};

/// Loads the catalog file when one is configured, otherwise the built-in blocks.
pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<Vec<BlockRecord>> {
    let Some(path) = path else {
        return Ok(reference_catalog());
    };

    let raw = fs::read(path)
        .with_context(|| format!("failed to read catalog file '{}'", path.display()))?;
    let records = parse_catalog(&raw)
        .with_context(|| format!("catalog file '{}' is invalid", path.display()))?;
    Ok(records)
}
