//! OptiType summary tables (`sample`, `hla`, optional per-allele columns).

use std::path::Path;

use tracing::debug;

use hlakit_model::SampleRecord;

use crate::error::{IngestError, Result};
use crate::tsv::{open_tsv, require_columns};

pub const SAMPLE_COLUMN: &str = "sample";
pub const HLA_COLUMN: &str = "hla";

/// Reads the `sample` and `hla` columns of a tab-separated HLA table.
///
/// Other columns (`A1` .. `C2`) are ignored. Fails before returning any rows
/// when either required column is absent.
pub fn read_hla_table(path: &Path) -> Result<Vec<SampleRecord>> {
    let (mut reader, headers) = open_tsv(path)?;
    require_columns(path, &headers, &[SAMPLE_COLUMN, HLA_COLUMN])?;
    let mut records = Vec::new();
    for record in reader.deserialize::<SampleRecord>() {
        let record = record.map_err(|e| IngestError::csv(path, &e))?;
        records.push(record);
    }
    debug!(path = %path.display(), rows = records.len(), "loaded HLA table");
    Ok(records)
}
