//! Allele extraction from OptiType `*_result.tsv` files.
//!
//! OptiType writes one result row with the six calls under `A1` .. `C2`
//! headers, next to read counts and the objective value. Calls are taken
//! from the first six allele-shaped tokens anywhere in the file; when fewer
//! are found the `A1` .. `C2` columns of the first data row are used, with
//! cell case ignored.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use hlakit_model::{ALLELE_COLUMNS, Allele, HlaTyping, TYPING_ALLELES};

/// `A*01:01` or `HLA-A*01:01`; longer field lists match on their first two fields.
static ALLELE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:HLA-)?[ABC]\*[0-9]{2}:[0-9]{2}").expect("Invalid allele token regex")
});

fn alleles_from_tokens(contents: &str) -> Option<Vec<Allele>> {
    let tokens: Vec<&str> = ALLELE_TOKEN
        .find_iter(contents)
        .take(TYPING_ALLELES)
        .map(|token| token.as_str())
        .collect();
    if tokens.len() < TYPING_ALLELES {
        return None;
    }
    tokens.into_iter().map(|token| token.parse().ok()).collect()
}

fn alleles_from_columns(contents: &str) -> Option<Vec<Allele>> {
    let mut rows = contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split('\t').map(str::trim).collect::<Vec<_>>());
    let header = rows.next()?;
    let data = rows.next()?;
    ALLELE_COLUMNS
        .iter()
        .map(|column| {
            let idx = header.iter().position(|name| name == column)?;
            data.get(idx)?.to_ascii_uppercase().parse::<Allele>().ok()
        })
        .collect()
}

/// Reads the six class I calls out of an OptiType result file's text.
///
/// Returns `None` when neither the token scan nor the `A1` .. `C2` columns
/// yield six valid alleles. Calls come back with the `HLA-` prefix.
pub fn parse_optitype_result(contents: &str) -> Option<HlaTyping> {
    let alleles = match alleles_from_tokens(contents) {
        Some(alleles) => alleles,
        None => {
            debug!("fewer than six allele tokens; trying A1..C2 columns");
            alleles_from_columns(contents)?
        }
    };
    HlaTyping::from_alleles(alleles).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULT: &str = "\tA1\tA2\tB1\tB2\tC1\tC2\tReads\tObjective\n\
                          0\tA*02:01\tA*24:02\tB*35:01\tB*51:01\tC*04:01\tC*15:02\t1520.0\t1478.5\n";

    #[test]
    fn scans_tokens_and_adds_prefix() {
        let typing = parse_optitype_result(RESULT).expect("typing");
        assert_eq!(
            typing.to_string(),
            "HLA-A*02:01,HLA-A*24:02,HLA-B*35:01,HLA-B*51:01,HLA-C*04:01,HLA-C*15:02"
        );
    }

    #[test]
    fn keeps_first_six_tokens() {
        let contents = "HLA-A*01:01 HLA-A*02:01 HLA-B*07:02\n\
                        HLA-B*08:01 HLA-C*07:01 HLA-C*07:02 HLA-A*03:01\n";
        let typing = parse_optitype_result(contents).expect("typing");
        assert!(!typing.to_string().contains("A*03:01"));
    }

    #[test]
    fn three_field_calls_keep_two_fields() {
        let contents = "A*01:01:01 A*02:01:01 B*07:02:01 B*08:01:01 C*07:01:01 C*07:02:01";
        let typing = parse_optitype_result(contents).expect("typing");
        assert_eq!(typing.alleles()[0].to_string(), "HLA-A*01:01");
    }

    #[test]
    fn falls_back_to_allele_columns() {
        let contents = "C2\tC1\tB2\tB1\tA2\tA1\n\
                        c*07:02\tc*07:01\tb*08:01\tb*07:02\ta*02:01\thla-a*01:01\n";
        let typing = parse_optitype_result(contents).expect("typing");
        assert_eq!(
            typing.to_string(),
            "HLA-A*01:01,HLA-A*02:01,HLA-B*07:02,HLA-B*08:01,HLA-C*07:01,HLA-C*07:02"
        );
    }

    #[test]
    fn fallback_keeps_leading_index_column() {
        let contents = "\tA1\tA2\tB1\tB2\tC1\tC2\tReads\n\
                        0\ta*02:01\ta*24:02\tb*35:01\tb*51:01\tc*04:01\tc*15:02\t1520.0\n";
        let typing = parse_optitype_result(contents).expect("typing");
        assert_eq!(typing.alleles()[0].to_string(), "HLA-A*02:01");
        assert_eq!(typing.alleles()[5].to_string(), "HLA-C*15:02");
    }

    #[test]
    fn column_fallback_needs_every_allele() {
        let contents = "A1\tA2\tB1\tB2\tC1\tC2\n\
                        a*01:01\ta*02:01\tb*07:02\tb*08:01\tc*07:01\tnot-called\n";
        assert!(parse_optitype_result(contents).is_none());
        assert!(parse_optitype_result("A1\tA2\tB1\tB2\tC1\n").is_none());
    }

    #[test]
    fn too_few_alleles_is_none() {
        assert!(parse_optitype_result("\tA1\tA2\n0\tA*02:01\tA*24:02\n").is_none());
        assert!(parse_optitype_result("").is_none());
    }
}
