use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Directory and naming convention of the VM source tree.
///
/// Every field can be overridden from a JSON config; the defaults match the
/// layout the VM repository ships with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Layout {
    /// Directory (relative to the root) holding the library sources.
    pub input_dir: PathBuf,
    /// Extension of library sources, without the dot.
    pub input_suffix: String,
    /// Directory (relative to the root) holding the templates.
    pub output_dir: PathBuf,
    pub template_prefix: String,
    pub template_ext: String,
    pub constant_ext: String,
    /// Name of the C variable that receives the library text.
    pub constant_name: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("standardLibrary/builtin"),
            input_suffix: "tus".into(),
            output_dir: PathBuf::from("src/vm"),
            template_prefix: "cardinal".into(),
            template_ext: "c".into(),
            constant_ext: "txt".into(),
            constant_name: "libSource".into(),
        }
    }
}

impl Layout {
    pub fn input_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.input_dir)
    }

    /// `<root>/<output_dir>/<prefix>_<name>.<template_ext>`
    pub fn template_path(&self, root: &Path, name: &str) -> PathBuf {
        self.output_file(root, name, &self.template_ext)
    }

    /// `<root>/<output_dir>/<prefix>_<name>.<constant_ext>`
    pub fn constant_path(&self, root: &Path, name: &str) -> PathBuf {
        self.output_file(root, name, &self.constant_ext)
    }

    fn output_file(&self, root: &Path, name: &str, ext: &str) -> PathBuf {
        root.join(&self.output_dir)
            .join(format!("{}_{}.{}", self.template_prefix, name, ext))
    }
}

/// A library source found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Builtin {
    pub source: PathBuf,
    /// File name up to the first dot.
    pub name: String,
}

/// Result of embedding one builtin, ready for the writers.
#[derive(Debug, Clone)]
pub struct Embedded {
    pub name: String,
    pub template_path: PathBuf,
    pub constant_path: PathBuf,
    /// The `libSource = ...;` block on its own.
    pub constant: String,
    /// Template text before the splice.
    pub original: String,
    /// Template text after the splice.
    pub document: String,
}

/// Whether results go to disk or are only compared against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Write,
    Check,
}
