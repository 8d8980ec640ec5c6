use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{Writer, WriterBuilder};
use tempfile::NamedTempFile;
use tracing::debug;

use hlakit_model::{ALLELE_COLUMNS, CountMatrix, SampleRecord, TypedSample};

use crate::atomic::{OutputBatch, write_atomically};

const HLA_HEADER: [&str; 2] = ["sample", "hla"];

fn tsv_writer<W: Write>(inner: W) -> Writer<W> {
    WriterBuilder::new().delimiter(b'\t').from_writer(inner)
}

fn write_hla_rows(file: &mut NamedTempFile, rows: &[SampleRecord]) -> Result<()> {
    let mut writer = tsv_writer(file);
    writer.write_record(HLA_HEADER)?;
    for row in rows {
        writer.write_record([row.sample.as_str(), row.hla.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes `sample` and `hla` columns with a header row and no index column.
/// The header is written even when `rows` is empty.
pub fn write_hla_table(path: &Path, rows: &[SampleRecord]) -> Result<()> {
    write_atomically(path, |file| write_hla_rows(file, rows))
        .with_context(|| format!("write {}", path.display()))?;
    debug!(path = %path.display(), rows = rows.len(), "wrote HLA table");
    Ok(())
}

impl OutputBatch {
    /// Stages an HLA table in the [`write_hla_table`] layout.
    pub fn hla_table(&mut self, path: &Path, rows: &[SampleRecord]) -> Result<()> {
        self.stage(path, |file| write_hla_rows(file, rows))
            .with_context(|| format!("write {}", path.display()))?;
        debug!(path = %path.display(), rows = rows.len(), "staged HLA table");
        Ok(())
    }
}

/// Writes an OptiType summary: `sample`, one column per allele (`A1` .. `C2`)
/// and the comma-joined `hla` column.
pub fn write_optitype_summary(path: &Path, rows: &[TypedSample]) -> Result<()> {
    write_atomically(path, |file| {
        let mut writer = tsv_writer(file);
        let mut header = vec![HLA_HEADER[0]];
        header.extend(ALLELE_COLUMNS);
        header.push(HLA_HEADER[1]);
        writer.write_record(&header)?;
        for row in rows {
            let mut record = Vec::with_capacity(header.len());
            record.push(row.sample.clone());
            record.extend(row.typing.alleles().iter().map(ToString::to_string));
            record.push(row.typing.to_string());
            writer.write_record(&record)?;
        }
        writer.flush()?;
        Ok(())
    })
    .with_context(|| format!("write {}", path.display()))?;
    debug!(path = %path.display(), rows = rows.len(), "wrote OptiType summary");
    Ok(())
}

/// Writes counts as integers, truncating toward zero.
pub fn write_count_matrix(path: &Path, matrix: &CountMatrix) -> Result<()> {
    write_atomically(path, |file| {
        let mut writer = tsv_writer(file);
        let mut header = Vec::with_capacity(matrix.samples.len() + 1);
        header.push(matrix.id_header.as_str());
        header.extend(matrix.samples.iter().map(String::as_str));
        writer.write_record(&header)?;
        let mut record: Vec<String> = Vec::with_capacity(header.len());
        for row in &matrix.rows {
            record.clear();
            record.push(row.id.clone());
            record.extend(row.counts.iter().map(|&value| (value as i64).to_string()));
            writer.write_record(&record)?;
        }
        writer.flush()?;
        Ok(())
    })
    .with_context(|| format!("write {}", path.display()))?;
    let (junctions, samples) = matrix.shape();
    debug!(path = %path.display(), junctions, samples, "wrote count matrix");
    Ok(())
}
