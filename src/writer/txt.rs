//! Dump the bare constant next to its template, for inspection.

use crate::error::Result;
use crate::model::Embedded;

pub fn emit(embedded: &Embedded) -> Result<()> {
    super::write(&embedded.constant_path, &embedded.constant)
}
