//! Best-match selection among candidate HLA rows.

use hlakit_model::{CanonicalRoot, SampleRecord};

use crate::error::{CoreError, Result};
use crate::normalize::{classify_suffix, normalize_root};

/// Ascending sort key: timepoint preference, then canonical root.
pub fn preference_key(record: &SampleRecord) -> (u8, CanonicalRoot) {
    let root = normalize_root(&record.sample);
    (classify_suffix(&root).rank(), root)
}

/// Picks the candidate with the smallest [`preference_key`]. Exact ties go to
/// the earliest candidate.
pub fn select_best<'a, I>(candidates: I) -> Result<&'a SampleRecord>
where
    I: IntoIterator<Item = &'a SampleRecord>,
{
    candidates
        .into_iter()
        .map(|record| (preference_key(record), record))
        .min_by(|a, b| a.0.cmp(&b.0))
        .map(|(_, record)| record)
        .ok_or(CoreError::EmptyCandidateSet)
}
