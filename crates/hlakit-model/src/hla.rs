//! HLA class I typing as produced by OptiType.
//!
//! A typing is six alleles, two per locus (A, B, C), serialized as a
//! comma-joined string such as `HLA-A*01:01,HLA-A*02:01,...`.

use std::fmt;
use std::str::FromStr;

use crate::error::{ModelError, Result};

/// Prefix carried by every serialized allele.
pub const ALLELE_PREFIX: &str = "HLA-";

/// Number of alleles in a complete class I typing.
pub const TYPING_ALLELES: usize = 6;

/// Per-allele column names of an OptiType summary, in typing order.
pub const ALLELE_COLUMNS: [&str; TYPING_ALLELES] = ["A1", "A2", "B1", "B2", "C1", "C2"];

/// A two-field class I allele, e.g. `HLA-B*07:02`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Allele {
    gene: char,
    group: String,
    protein: String,
}

impl Allele {
    pub fn gene(&self) -> char {
        self.gene
    }
}

fn is_two_digits(value: &str) -> bool {
    value.len() == 2 && value.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for Allele {
    type Err = ModelError;

    /// Accepts the allele with or without the `HLA-` prefix.
    fn from_str(raw: &str) -> Result<Self> {
        let invalid = || ModelError::InvalidAllele(raw.to_string());
        let trimmed = raw.trim();
        let body = trimmed.strip_prefix(ALLELE_PREFIX).unwrap_or(trimmed);
        let (gene, fields) = body.split_once('*').ok_or_else(invalid)?;
        let gene = match gene {
            "A" => 'A',
            "B" => 'B',
            "C" => 'C',
            _ => return Err(invalid()),
        };
        let (group, protein) = fields.split_once(':').ok_or_else(invalid)?;
        if !is_two_digits(group) || !is_two_digits(protein) {
            return Err(invalid());
        }
        Ok(Self {
            gene,
            group: group.to_string(),
            protein: protein.to_string(),
        })
    }
}

impl fmt::Display for Allele {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{ALLELE_PREFIX}{}*{}:{}",
            self.gene, self.group, self.protein
        )
    }
}

/// The parsed `hla` column of a sample row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HlaTyping {
    alleles: Vec<Allele>,
}

impl HlaTyping {
    /// Builds a typing from already parsed alleles, in A1 .. C2 order.
    pub fn from_alleles(alleles: Vec<Allele>) -> Result<Self> {
        if alleles.len() != TYPING_ALLELES {
            return Err(ModelError::AlleleCount {
                value: alleles
                    .iter()
                    .map(Allele::to_string)
                    .collect::<Vec<_>>()
                    .join(","),
                expected: TYPING_ALLELES,
                found: alleles.len(),
            });
        }
        Ok(Self { alleles })
    }

    pub fn alleles(&self) -> &[Allele] {
        &self.alleles
    }
}

impl FromStr for HlaTyping {
    type Err = ModelError;

    fn from_str(raw: &str) -> Result<Self> {
        let parts: Vec<&str> = raw
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();
        if parts.len() != TYPING_ALLELES {
            return Err(ModelError::AlleleCount {
                value: raw.to_string(),
                expected: TYPING_ALLELES,
                found: parts.len(),
            });
        }
        let alleles = parts
            .into_iter()
            .map(Allele::from_str)
            .collect::<Result<Vec<_>>>()?;
        Self::from_alleles(alleles)
    }
}

impl fmt::Display for HlaTyping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, allele) in self.alleles.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            write!(f, "{allele}")?;
        }
        Ok(())
    }
}
