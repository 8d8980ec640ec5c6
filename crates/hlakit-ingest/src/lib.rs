//! Input loading for hlakit.
//!
//! All inputs are tab-separated text read fully into memory:
//!
//! - **HLA tables**: `sample` and `hla` columns, every cell kept as text
//! - **Keep lists**: whitespace separated sample identifiers
//! - **Count matrices**: junction ids by sample read counts
//! - **OptiType results**: per-sample `*_result.tsv` text

mod count_matrix;
mod error;
mod hla_table;
mod keep_list;
mod optitype_result;
mod tsv;

// === Error Types ===
pub use error::{IngestError, Result};

// === Readers ===
pub use count_matrix::{parse_count, read_count_matrix, read_matrix_samples};
pub use hla_table::{HLA_COLUMN, SAMPLE_COLUMN, read_hla_table};
pub use keep_list::{parse_keep_list, read_keep_list};
pub use optitype_result::read_optitype_result;
