//! Sample identifier reconciliation for HLA summary tables.
//!
//! - **normalize**: canonical root, patient id and timepoint derivation
//! - **index**: root and patient lookups over an HLA table
//! - **select**: deterministic best-match selection
//! - **reconcile**: patient-level backfill of requested samples
//! - **filter**: strict keep-list membership
//! - **prune**: junction count-matrix cleanup
//! - **coverage**: HLA availability for count-matrix samples
//! - **optitype**: allele extraction from OptiType result files

pub mod coverage;
pub mod error;
pub mod filter;
pub mod index;
pub mod normalize;
pub mod optitype;
pub mod prune;
pub mod reconcile;
pub mod select;

pub use coverage::{CoverageReport, InvalidTyping, check_coverage};
pub use error::{CoreError, Result};
pub use filter::{MembershipFilter, filter_by_membership};
pub use index::SampleIndex;
pub use normalize::{
    FILENAME_SUFFIX, classify_suffix, filename_form, normalize_root, patient_id,
    strip_filename_suffix,
};
pub use optitype::parse_optitype_result;
pub use prune::{PruneOptions, PruneOutcome, prune_counts};
pub use reconcile::{MatchKind, Reconciliation, Resolution, reconcile};
pub use select::{preference_key, select_best};
