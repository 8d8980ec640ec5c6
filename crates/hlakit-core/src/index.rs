//! Lookup tables from canonical root and patient id to HLA rows.

use std::collections::BTreeMap;

use hlakit_model::{CanonicalRoot, PatientId, SampleRecord};

use crate::normalize::{normalize_root, patient_id};

/// Positions are indices into the original table, ascending, so candidate
/// lists preserve input order.
#[derive(Debug)]
pub struct SampleIndex<'a> {
    records: &'a [SampleRecord],
    by_root: BTreeMap<CanonicalRoot, Vec<usize>>,
    by_patient: BTreeMap<PatientId, Vec<usize>>,
}

impl<'a> SampleIndex<'a> {
    pub fn build(records: &'a [SampleRecord]) -> Self {
        let mut by_root: BTreeMap<CanonicalRoot, Vec<usize>> = BTreeMap::new();
        let mut by_patient: BTreeMap<PatientId, Vec<usize>> = BTreeMap::new();
        for (idx, record) in records.iter().enumerate() {
            by_root
                .entry(normalize_root(&record.sample))
                .or_default()
                .push(idx);
            by_patient
                .entry(patient_id(&record.sample))
                .or_default()
                .push(idx);
        }
        Self {
            records,
            by_root,
            by_patient,
        }
    }

    pub fn by_root(&self, root: &CanonicalRoot) -> Vec<&'a SampleRecord> {
        self.collect(self.by_root.get(root))
    }

    pub fn by_patient(&self, patient: &PatientId) -> Vec<&'a SampleRecord> {
        self.collect(self.by_patient.get(patient))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn collect(&self, positions: Option<&Vec<usize>>) -> Vec<&'a SampleRecord> {
        positions
            .map(|positions| positions.iter().map(|&idx| &self.records[idx]).collect())
            .unwrap_or_default()
    }
}
