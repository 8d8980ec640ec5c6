use std::path::Path;

use tracing::debug;

use crate::error::{IngestError, Result};

/// Reads an OptiType result file as text. Invalid UTF-8 is replaced rather
/// than rejected, since only the allele calls are used.
pub fn read_optitype_result(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::io(path, e))?;
    let text = String::from_utf8_lossy(&bytes).into_owned();
    debug!(path = %path.display(), bytes = bytes.len(), "loaded OptiType result");
    Ok(text)
}
