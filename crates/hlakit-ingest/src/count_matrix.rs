//! Junction count matrices: first column is the junction id, every other
//! column one sample.

use std::path::Path;

use tracing::{debug, warn};

use hlakit_model::{CountMatrix, CountRow};

use crate::error::{IngestError, Result};
use crate::tsv::open_tsv;

/// Parses a read count; `None` for empty, non-numeric and non-finite cells,
/// which the matrix reader stores as 0.
pub fn parse_count(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

pub fn read_count_matrix(path: &Path) -> Result<CountMatrix> {
    let (mut reader, headers) = open_tsv(path)?;
    let mut columns = headers.iter().map(str::to_string);
    let id_header = columns.next().unwrap_or_default();
    let samples: Vec<String> = columns.collect();
    let mut matrix = CountMatrix::new(id_header, samples);
    let mut coerced = 0usize;
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::csv(path, &e))?;
        let mut cells = record.iter();
        let id = cells.next().unwrap_or_default().to_string();
        let counts: Vec<f64> = cells
            .map(|cell| {
                parse_count(cell).unwrap_or_else(|| {
                    coerced += 1;
                    0.0
                })
            })
            .collect();
        matrix.push_row(CountRow { id, counts });
    }
    if coerced > 0 {
        warn!(path = %path.display(), cells = coerced, "non-numeric counts read as 0");
    }
    let (junctions, samples) = matrix.shape();
    debug!(path = %path.display(), junctions, samples, "loaded count matrix");
    Ok(matrix)
}

/// Sample column names of a count matrix, without reading its rows.
pub fn read_matrix_samples(path: &Path) -> Result<Vec<String>> {
    let (_, headers) = open_tsv(path)?;
    Ok(headers.iter().skip(1).map(str::to_string).collect())
}
