#![deny(unsafe_code)]

use std::fmt;

/// Primary join key for a sample: the de-suffixed identifier up to the first
/// `-` or `_`.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct CanonicalRoot(String);

impl CanonicalRoot {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fallback join key grouping the timepoints of one patient.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct PatientId(String);

impl PatientId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CanonicalRoot> for PatientId {
    fn from(root: CanonicalRoot) -> Self {
        Self(root.0)
    }
}

/// Sampling stage encoded as a literal suffix of a canonical root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimepointSuffix {
    /// Pre-treatment.
    Pre,
    /// Post-treatment.
    Clnd,
    Other,
}

impl TimepointSuffix {
    /// Selection preference; lower wins.
    pub fn rank(self) -> u8 {
        match self {
            TimepointSuffix::Pre => 0,
            TimepointSuffix::Clnd => 1,
            TimepointSuffix::Other => 9,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimepointSuffix::Pre => "PRE",
            TimepointSuffix::Clnd => "CLND",
            TimepointSuffix::Other => "OTHER",
        }
    }
}

impl fmt::Display for TimepointSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
