pub mod error;
pub mod hla;
pub mod ids;
pub mod matrix;
pub mod record;

pub use error::{ModelError, Result};
pub use hla::{ALLELE_COLUMNS, ALLELE_PREFIX, Allele, HlaTyping, TYPING_ALLELES};
pub use ids::{CanonicalRoot, PatientId, TimepointSuffix};
pub use matrix::{CountMatrix, CountRow};
pub use record::{SampleRecord, TypedSample};
