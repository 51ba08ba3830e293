//! The functional core: discover, escape and splice every builtin.
//!
//! Nothing here writes to disk; the writers take the finished
//! [`Embedded`] values once every builtin went through without error.
pub mod discover;
pub mod escape;
pub mod splice;

use std::path::Path;

use tracing::info;

use crate::error::{EmbedError, Result};
use crate::model::{Builtin, Embedded, Layout};

/// Embeds every discovered builtin. Fails on the first builtin that cannot
/// be read or spliced.
pub fn run(root: &Path, layout: &Layout) -> Result<Vec<Embedded>> {
    discover::discover(root, layout)?
        .iter()
        .map(|builtin| embed(root, layout, builtin))
        .collect()
}

/// Escape one builtin and splice it into its paired template.
pub fn embed(root: &Path, layout: &Layout, builtin: &Builtin) -> Result<Embedded> {
    info!("embedding {}", builtin.source.display());

    let text = read(&builtin.source)?;
    let constant = escape::escape(&layout.constant_name, &text);

    let template_path = layout.template_path(root, &builtin.name);
    let original = read(&template_path)?;
    let document = splice::splice(&original, &layout.constant_name, &constant).map_err(
        |source| EmbedError::Splice {
            path: template_path.clone(),
            source,
        },
    )?;

    Ok(Embedded {
        name: builtin.name.clone(),
        constant_path: layout.constant_path(root, &builtin.name),
        template_path,
        constant,
        original,
        document,
    })
}

/// Names of the builtins whose files on disk differ from what would be
/// written.
pub fn stale(embedded: &[Embedded]) -> Vec<String> {
    embedded
        .iter()
        .filter(|e| {
            let constant_fresh = std::fs::read_to_string(&e.constant_path)
                .is_ok_and(|on_disk| on_disk == e.constant);
            e.document != e.original || !constant_fresh
        })
        .map(|e| e.name.clone())
        .collect()
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| EmbedError::Read {
        path: path.to_path_buf(),
        source,
    })
}
