//! Strict keep-list membership filter.
//!
//! Unlike [`reconcile`](crate::reconcile::reconcile) there is no best-match
//! selection and no patient fallback: a row survives when its canonical root
//! appears in the canonicalized keep list, and it is written back unchanged.

use std::collections::BTreeSet;

use tracing::info;

use hlakit_model::{CanonicalRoot, SampleRecord};

use crate::normalize::normalize_root;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MembershipFilter {
    /// Rows in the input table.
    pub total: usize,
    /// Surviving rows, original labels and order.
    pub kept: Vec<SampleRecord>,
    /// Keep-list roots that matched no row, sorted.
    pub unmatched: Vec<CanonicalRoot>,
}

pub fn filter_by_membership<S: AsRef<str>>(
    table: &[SampleRecord],
    keep: &[S],
) -> MembershipFilter {
    let wanted: BTreeSet<CanonicalRoot> = keep
        .iter()
        .map(|entry| normalize_root(entry.as_ref()))
        .collect();
    let mut seen: BTreeSet<CanonicalRoot> = BTreeSet::new();
    let mut kept = Vec::new();
    for record in table {
        let root = normalize_root(&record.sample);
        if wanted.contains(&root) {
            kept.push(record.clone());
            seen.insert(root);
        }
    }
    let unmatched: Vec<CanonicalRoot> = wanted.difference(&seen).cloned().collect();
    info!(
        total = table.len(),
        kept = kept.len(),
        unmatched = unmatched.len(),
        "membership filter complete"
    );
    MembershipFilter {
        total: table.len(),
        kept,
        unmatched,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_every_row_sharing_a_root() {
        let table = vec![
            SampleRecord::new("16518PRE-16518-2_g_normal", "a"),
            SampleRecord::new("16518PRE.bed", "b"),
            SampleRecord::new("16518CLND.bed", "c"),
        ];
        let result = filter_by_membership(&table, &["16518PRE.bed"]);
        assert_eq!(result.total, 3);
        let kept: Vec<&str> = result.kept.iter().map(|r| r.hla.as_str()).collect();
        assert_eq!(kept, vec!["a", "b"]);
        assert!(result.unmatched.is_empty());
    }

    #[test]
    fn never_backfills_from_patient() {
        let table = vec![SampleRecord::new("53823PRE.bed", "a")];
        let result = filter_by_membership(&table, &["53823CLND"]);
        assert!(result.kept.is_empty());
        assert_eq!(result.unmatched, vec![CanonicalRoot::new("53823CLND")]);
    }
}
