use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid HLA allele '{0}'")]
    InvalidAllele(String),
    #[error("expected {expected} HLA alleles, found {found} in '{value}'")]
    AlleleCount {
        value: String,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
