//! Shared tab-separated reader setup.

use std::fs::File;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Opens `path` as a headed TSV and returns the reader with normalized
/// headers installed. Every cell is read as text.
pub(crate) fn open_tsv(path: &Path) -> Result<(Reader<File>, StringRecord)> {
    let file = File::open(path).map_err(|e| IngestError::io(path, e))?;
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_reader(file);
    let raw = reader
        .headers()
        .map_err(|e| IngestError::csv(path, &e))?
        .clone();
    if raw.is_empty() {
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    }
    let headers: StringRecord = raw.iter().map(normalize_header).collect();
    reader.set_headers(headers.clone());
    Ok((reader, headers))
}

pub(crate) fn require_columns(path: &Path, headers: &StringRecord, columns: &[&str]) -> Result<()> {
    for column in columns {
        if !headers.iter().any(|header| header == *column) {
            return Err(IngestError::MissingColumn {
                column: (*column).to_string(),
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}
