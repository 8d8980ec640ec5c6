//! Patient-level backfill of HLA typings for a list of requested samples.
//!
//! Each request is resolved against the HLA table in two steps:
//!
//! 1. rows sharing the request's canonical root;
//! 2. failing that, rows sharing its patient id (any timepoint).
//!
//! Within a step the candidate with the best [`preference_key`] wins, so a
//! pre-treatment typing is preferred when backfilling another timepoint.
//! Requests with neither kind of match produce no row and are reported in
//! [`Reconciliation::missing`].
//!
//! [`preference_key`]: crate::select::preference_key

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::{debug, info, warn};

use hlakit_model::SampleRecord;

use crate::error::Result;
use crate::index::SampleIndex;
use crate::normalize::{filename_form, normalize_root, patient_id};
use crate::select::select_best;

/// Which key produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Root,
    Patient,
}

impl MatchKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchKind::Root => "root",
            MatchKind::Patient => "patient",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Identifier as it appeared in the keep list.
    pub request: String,
    /// Output row: the request in filename form with the matched typing.
    pub row: SampleRecord,
    /// Sample label of the table row the typing was taken from.
    pub matched_sample: String,
    pub kind: MatchKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Reconciliation {
    /// Number of identifiers in the request list, duplicates included.
    pub requested: usize,
    pub resolved: Vec<Resolution>,
    /// Unresolved identifiers, distinct, in first-seen order.
    pub missing: Vec<String>,
}

impl Reconciliation {
    pub fn rows(&self) -> Vec<SampleRecord> {
        self.resolved
            .iter()
            .map(|resolution| resolution.row.clone())
            .collect()
    }

    pub fn has_missing(&self) -> bool {
        !self.missing.is_empty()
    }
}

/// Resolves every request against `table`; see the module docs for the rules.
pub fn reconcile<S: AsRef<str>>(table: &[SampleRecord], requests: &[S]) -> Result<Reconciliation> {
    let index = SampleIndex::build(table);
    let mut outcome = Reconciliation {
        requested: requests.len(),
        ..Reconciliation::default()
    };
    let mut emitted: BTreeSet<String> = BTreeSet::new();
    let mut missing_seen: BTreeSet<String> = BTreeSet::new();

    for request in requests {
        let request = request.as_ref();
        let root = normalize_root(request);
        let by_root = index.by_root(&root);
        let (candidates, kind) = if by_root.is_empty() {
            (index.by_patient(&patient_id(request)), MatchKind::Patient)
        } else {
            (by_root, MatchKind::Root)
        };
        if candidates.is_empty() {
            debug!(request, root = %root, "no HLA typing for request");
            if missing_seen.insert(request.to_string()) {
                outcome.missing.push(request.to_string());
            }
            continue;
        }
        let best = select_best(candidates)?;
        let sample = filename_form(request);
        debug!(
            request,
            sample = %sample,
            matched = %best.sample,
            kind = kind.as_str(),
            "resolved request"
        );
        if !emitted.insert(sample.clone()) {
            continue;
        }
        outcome.resolved.push(Resolution {
            request: request.to_string(),
            row: SampleRecord::new(sample, best.hla.clone()),
            matched_sample: best.sample.clone(),
            kind,
        });
    }

    info!(
        requested = outcome.requested,
        resolved = outcome.resolved.len(),
        missing = outcome.missing.len(),
        "reconciliation complete"
    );
    if outcome.has_missing() {
        warn!(
            missing = %outcome.missing.join(", "),
            "no HLA data found for some requested samples"
        );
    }
    Ok(outcome)
}
