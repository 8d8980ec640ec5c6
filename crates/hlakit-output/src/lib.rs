//! Output generation for hlakit.
//!
//! Every file is written to a temporary sibling and renamed into place, so a
//! failed run never leaves a partially written output behind. Runs producing
//! several files stage them in an [`OutputBatch`] and commit once all writes
//! have succeeded.

mod atomic;
mod report;
mod tsv;

pub use atomic::OutputBatch;
pub use tsv::{write_count_matrix, write_hla_table, write_optitype_summary};
