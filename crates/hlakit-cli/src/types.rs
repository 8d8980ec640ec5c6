use std::path::PathBuf;

use hlakit_core::{CoverageReport, MembershipFilter, Reconciliation};

#[derive(Debug)]
pub struct CollectResult {
    pub out: PathBuf,
    pub samples: usize,
    /// Result files without six usable allele calls, in argument order.
    pub unparsed: Vec<PathBuf>,
}

#[derive(Debug)]
pub struct FilterResult {
    pub out: PathBuf,
    pub filter: MembershipFilter,
}

#[derive(Debug)]
pub struct ReconcileResult {
    pub out: PathBuf,
    pub report: Option<PathBuf>,
    pub reconciliation: Reconciliation,
}

#[derive(Debug)]
pub struct PruneResult {
    pub out: PathBuf,
    pub input_shape: (usize, usize),
    pub output_shape: (usize, usize),
    pub merged: usize,
    pub strict_dropped: usize,
}

#[derive(Debug)]
pub struct CoverageResult {
    pub counts: PathBuf,
    pub report: CoverageReport,
}
