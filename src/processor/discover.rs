//! Finds the library sources to embed.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use tracing::debug;

use crate::error::{EmbedError, Result};
use crate::model::{Builtin, Layout};

/// Every regular file in the layout's input directory ending in
/// `.<input_suffix>`, in the order the glob walk yields them. Hidden files
/// are skipped. Two sources sharing a base name are rejected, since both
/// would land in the same template.
pub fn discover(root: &Path, layout: &Layout) -> Result<Vec<Builtin>> {
    let dir = layout.input_dir(root);
    if !dir.is_dir() {
        return Err(EmbedError::InputDirMissing { path: dir });
    }

    let pattern = format!(
        "{}/*.{}",
        Pattern::escape(&dir.to_string_lossy()),
        Pattern::escape(&layout.input_suffix)
    );
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..Default::default()
    };
    let paths = glob::glob_with(&pattern, options).map_err(|source| EmbedError::Pattern {
        pattern: pattern.clone(),
        source,
    })?;

    let mut builtins = Vec::new();
    for entry in paths {
        let path = entry?;
        if !path.is_file() {
            continue;
        }
        let name = base_name(&path)?;
        builtins.push(Builtin { source: path, name });
    }

    reject_duplicates(&builtins)?;
    debug!("found {} builtin(s) in {}", builtins.len(), dir.display());
    Ok(builtins)
}

fn reject_duplicates(builtins: &[Builtin]) -> Result<()> {
    let mut by_name: BTreeMap<&str, Vec<PathBuf>> = BTreeMap::new();
    for builtin in builtins {
        by_name
            .entry(builtin.name.as_str())
            .or_default()
            .push(builtin.source.clone());
    }
    match by_name.into_iter().find(|(_, paths)| paths.len() > 1) {
        Some((name, paths)) => Err(EmbedError::DuplicateBaseName {
            name: name.to_string(),
            paths,
        }),
        None => Ok(()),
    }
}

/// File name truncated at its first dot: `core.extra.tus` is `core`.
pub fn base_name(path: &Path) -> Result<String> {
    let invalid = || EmbedError::InvalidBaseName {
        path: PathBuf::from(path),
    };
    let file_name = path.file_name().ok_or_else(invalid)?.to_string_lossy();
    let name = file_name.split('.').next().unwrap_or_default();
    if name.is_empty() {
        return Err(invalid());
    }
    Ok(name.to_string())
}
