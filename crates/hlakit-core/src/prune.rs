//! Junction count-matrix cleanup and pruning.
//!
//! AltAnalyze writes junction ids with a trailing `=chr...` annotation and
//! sample headers carrying the `.bed` filename suffix. Pruning trims both,
//! merges rows whose trimmed ids collide, and drops weakly supported
//! junctions.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};

use hlakit_model::{CountMatrix, CountRow};

use crate::normalize::FILENAME_SUFFIX;

/// `chr1:123:456:+` style junction ids (the `chr` prefix is optional).
static CANONICAL_JUNCTION_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:chr)?(?:[1-9][0-9]?|X|Y):\d+:\d+:[+-]$").expect("Invalid junction id regex")
});

#[derive(Debug, Clone, PartialEq)]
pub struct PruneOptions {
    /// Minimum total reads across the cohort.
    pub min_sum: f64,
    /// Minimum number of samples meeting `min_per_sample`.
    pub min_samples: usize,
    /// Minimum reads for a sample to count as supporting a junction.
    pub min_per_sample: f64,
    /// Keep only ids matching the canonical junction id format.
    pub strict_uid: bool,
}

impl Default for PruneOptions {
    fn default() -> Self {
        Self {
            min_sum: 10.0,
            min_samples: 1,
            min_per_sample: 2.0,
            strict_uid: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PruneOutcome {
    pub matrix: CountMatrix,
    /// (junctions, samples) before any processing.
    pub input_shape: (usize, usize),
    /// Rows folded into an earlier row after id trimming.
    pub merged: usize,
    /// Rows removed by the strict id check.
    pub strict_dropped: usize,
}

/// Drops the AltAnalyze annotation after the first `=`.
pub fn trim_junction_id(id: &str) -> &str {
    id.split_once('=').map_or(id, |(head, _)| head)
}

/// Removes every `.bed` occurrence from a sample header.
pub fn clean_sample_header(header: &str) -> String {
    header.replace(FILENAME_SUFFIX, "")
}

pub fn is_canonical_junction_id(id: &str) -> bool {
    CANONICAL_JUNCTION_ID.is_match(id)
}

fn merge_trimmed(rows: Vec<CountRow>, width: usize) -> (Vec<CountRow>, usize) {
    let mut positions: BTreeMap<String, usize> = BTreeMap::new();
    let mut merged_rows: Vec<CountRow> = Vec::with_capacity(rows.len());
    let mut merged = 0usize;
    for row in rows {
        let id = trim_junction_id(&row.id).to_string();
        match positions.get(&id) {
            Some(&pos) => {
                let target = &mut merged_rows[pos].counts;
                for (slot, value) in target.iter_mut().zip(row.counts.iter()) {
                    *slot += value;
                }
                merged += 1;
            }
            None => {
                let mut counts = row.counts;
                counts.resize(width, 0.0);
                positions.insert(id.clone(), merged_rows.len());
                merged_rows.push(CountRow { id, counts });
            }
        }
    }
    (merged_rows, merged)
}

fn is_supported(row: &CountRow, options: &PruneOptions) -> bool {
    let total: f64 = row.counts.iter().sum();
    let supporting = row
        .counts
        .iter()
        .filter(|&&value| value >= options.min_per_sample)
        .count();
    total >= options.min_sum && supporting >= options.min_samples
}

pub fn prune_counts(matrix: CountMatrix, options: &PruneOptions) -> PruneOutcome {
    let input_shape = matrix.shape();
    let CountMatrix {
        id_header,
        samples,
        rows,
    } = matrix;
    let samples: Vec<String> = samples
        .iter()
        .map(String::as_str)
        .map(clean_sample_header)
        .collect();

    let (mut rows, merged) = merge_trimmed(rows, samples.len());
    if merged > 0 {
        debug!(merged, "merged junction rows after trimming ids");
    }

    let mut strict_dropped = 0usize;
    if options.strict_uid {
        let before = rows.len();
        rows.retain(|row| is_canonical_junction_id(&row.id));
        strict_dropped = before - rows.len();
        if strict_dropped > 0 {
            info!(
                dropped = strict_dropped,
                "strict-uid: dropped rows with non-standard ids"
            );
        }
    }

    rows.retain(|row| is_supported(row, options));

    let mut pruned = CountMatrix::new(id_header, samples);
    for row in rows {
        pruned.push_row(row);
    }
    info!(
        junctions = pruned.rows.len(),
        samples = pruned.samples.len(),
        "pruned count matrix"
    );
    PruneOutcome {
        matrix: pruned,
        input_shape,
        merged,
        strict_dropped,
    }
}
