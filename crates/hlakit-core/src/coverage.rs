//! Checks that every sample column of a count matrix has a usable HLA typing.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::warn;

use hlakit_model::{HlaTyping, SampleRecord};

use crate::normalize::strip_filename_suffix;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InvalidTyping {
    pub sample: String,
    pub hla: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    pub covered: Vec<String>,
    pub missing: Vec<String>,
    pub invalid: Vec<InvalidTyping>,
}

impl CoverageReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.invalid.is_empty()
    }
}

/// Looks up each column by exact sample label, then with the `.bed` suffix
/// ignored on both sides. The first table row wins for a repeated label.
pub fn check_coverage<S: AsRef<str>>(columns: &[S], table: &[SampleRecord]) -> CoverageReport {
    let mut exact: BTreeMap<&str, &SampleRecord> = BTreeMap::new();
    let mut loose: BTreeMap<&str, &SampleRecord> = BTreeMap::new();
    for record in table {
        exact.entry(record.sample.as_str()).or_insert(record);
        loose
            .entry(strip_filename_suffix(&record.sample))
            .or_insert(record);
    }

    let mut report = CoverageReport::default();
    for column in columns {
        let column = column.as_ref();
        let record = exact
            .get(column)
            .or_else(|| loose.get(strip_filename_suffix(column)));
        let Some(record) = record else {
            report.missing.push(column.to_string());
            continue;
        };
        match record.hla.parse::<HlaTyping>() {
            Ok(_) => report.covered.push(column.to_string()),
            Err(error) => report.invalid.push(InvalidTyping {
                sample: column.to_string(),
                hla: record.hla.clone(),
                reason: error.to_string(),
            }),
        }
    }
    if !report.missing.is_empty() {
        warn!(
            missing = %report.missing.join(", "),
            "count matrix samples without HLA typing"
        );
    }
    report
}
