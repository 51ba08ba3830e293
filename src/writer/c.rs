//! Write the spliced C template back in place.

use tracing::debug;

use crate::error::Result;
use crate::model::Embedded;

pub fn emit(embedded: &Embedded) -> Result<()> {
    if embedded.document == embedded.original {
        debug!("{} already up to date", embedded.template_path.display());
        return Ok(());
    }
    super::write(&embedded.template_path, &embedded.document)
}
