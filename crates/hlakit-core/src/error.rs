//! Error types for reconciliation.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Selection was asked to choose among zero candidates. Callers guard
    /// against this, so seeing it means an index was built inconsistently.
    #[error("cannot select a best match from an empty candidate set")]
    EmptyCandidateSet,
}

pub type Result<T> = std::result::Result<T, CoreError>;
