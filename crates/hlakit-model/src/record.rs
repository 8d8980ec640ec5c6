use serde::{Deserialize, Serialize};

use crate::hla::HlaTyping;

/// One row of an HLA summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRecord {
    pub sample: String,
    pub hla: String,
}

impl SampleRecord {
    pub fn new(sample: impl Into<String>, hla: impl Into<String>) -> Self {
        Self {
            sample: sample.into(),
            hla: hla.into(),
        }
    }
}

/// A sample with a parsed typing: one row of an OptiType summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedSample {
    pub sample: String,
    pub typing: HlaTyping,
}

impl TypedSample {
    pub fn new(sample: impl Into<String>, typing: HlaTyping) -> Self {
        Self {
            sample: sample.into(),
            typing,
        }
    }

    /// The `sample`/`hla` view used by the reconciliation tables.
    pub fn to_record(&self) -> SampleRecord {
        SampleRecord::new(self.sample.clone(), self.typing.to_string())
    }
}
