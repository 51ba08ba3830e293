//! Error types for the embedder.
//!
//! Every variant that touches the filesystem carries the path involved so
//! the failing builtin is always named in the report.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("input directory not found: {}", path.display())]
    InputDirMissing { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File name starts with a dot, so nothing is left before the first one.
    #[error("cannot derive a base name from {}", path.display())]
    InvalidBaseName { path: PathBuf },

    #[error("sources {} share the base name `{name}`", display_paths(paths))]
    DuplicateBaseName { name: String, paths: Vec<PathBuf> },

    #[error("invalid glob pattern `{pattern}`")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error(transparent)]
    Glob(#[from] glob::GlobError),

    #[error("cannot splice constant into {}", path.display())]
    Splice {
        path: PathBuf,
        #[source]
        source: SpliceError,
    },

    #[error("failed to read config at {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config at {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("constant name `{name}` is not a C identifier")]
    InvalidConstantName { name: String },

    #[error("embedded sources are stale: {}", names.join(", "))]
    Stale { names: Vec<String> },
}

/// Why a template could not take the new constant.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SpliceError {
    #[error("template marker `{name} =` not found")]
    MarkerNotFound { name: String },

    #[error("template marker `{name} =` found {count} times, expected exactly one")]
    AmbiguousMarker { name: String, count: usize },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, EmbedError>;
