//! Emitters for the output tree.
pub mod c;
pub mod txt;

use std::path::Path;

use crate::error::{EmbedError, Result};

fn write(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|source| EmbedError::Write {
        path: path.to_path_buf(),
        source,
    })
}
