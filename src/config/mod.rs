//! Layout configuration.
//!
//! The config file is a flat JSON object; any field left out keeps the
//! value from [`Layout::default`]. Unknown keys are rejected so a typo
//! does not silently fall back to a default path. The constant name must
//! be a C identifier, since it is what the splice searches for.

use std::path::Path;

use tracing::debug;

use crate::error::{EmbedError, Result};
use crate::model::Layout;

/// Load the layout, falling back to the defaults when no file is given.
pub fn load(path: Option<&Path>) -> Result<Layout> {
    let Some(path) = path else {
        debug!("no config given, using default layout");
        return Ok(Layout::default());
    };

    let json = std::fs::read_to_string(path).map_err(|source| EmbedError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let layout = load_from_json(&json).map_err(|source| EmbedError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    validate(&layout)?;
    debug!(?layout, "config loaded from {}", path.display());
    Ok(layout)
}

fn validate(layout: &Layout) -> Result<()> {
    let name = &layout.constant_name;
    let mut chars = name.chars();
    let starts_ok = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if !starts_ok || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(EmbedError::InvalidConstantName { name: name.clone() });
    }
    Ok(())
}

pub fn load_from_json(json: &str) -> serde_json::Result<Layout> {
    serde_json::from_str(json)
}
