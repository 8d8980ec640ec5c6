//! Sample identifier normalization.
//!
//! Sample labels arrive in several shapes: `16518PRE.bed`,
//! `16518PRE-16518-2_g_normal`, plain `16518PRE`. Everything is reduced to a
//! [`CanonicalRoot`] (the primary join key) and a [`PatientId`] (the key that
//! groups the timepoints of one patient).

use hlakit_model::{CanonicalRoot, PatientId, TimepointSuffix};

/// Filename suffix carried by sample labels taken from junction BED files.
pub const FILENAME_SUFFIX: &str = ".bed";

const SEPARATORS: [char; 2] = ['-', '_'];

/// Removes one trailing [`FILENAME_SUFFIX`], case-sensitively.
pub fn strip_filename_suffix(raw: &str) -> &str {
    raw.strip_suffix(FILENAME_SUFFIX).unwrap_or(raw)
}

/// Strips the filename suffix and keeps everything before the first `-` or `_`.
///
/// ```
/// use hlakit_core::normalize::normalize_root;
///
/// assert_eq!(normalize_root("16518PRE-16518-2_g_normal").as_str(), "16518PRE");
/// assert_eq!(normalize_root("53823CLND.bed").as_str(), "53823CLND");
/// ```
pub fn normalize_root(raw: &str) -> CanonicalRoot {
    let stripped = strip_filename_suffix(raw);
    let root = match stripped.split_once(SEPARATORS) {
        Some((head, _)) => head,
        None => stripped,
    };
    CanonicalRoot::new(root)
}

/// Leading run of ASCII digits, or the canonical root when there is none.
pub fn patient_id(raw: &str) -> PatientId {
    let stripped = strip_filename_suffix(raw);
    let digits = stripped
        .char_indices()
        .find(|(_, ch)| !ch.is_ascii_digit())
        .map_or(stripped.len(), |(idx, _)| idx);
    if digits == 0 {
        return PatientId::from(normalize_root(raw));
    }
    PatientId::new(&stripped[..digits])
}

pub fn classify_suffix(root: &CanonicalRoot) -> TimepointSuffix {
    let value = root.as_str();
    // PRE is checked first.
    if value.ends_with("PRE") {
        TimepointSuffix::Pre
    } else if value.ends_with("CLND") {
        TimepointSuffix::Clnd
    } else {
        TimepointSuffix::Other
    }
}

/// Renders a requested identifier as a sample filename: `53823CLND` and
/// `53823CLND.bed` both become `53823CLND.bed`.
///
/// Only the `.bed` suffix is normalized. Separator tails stay as requested,
/// so `16518PRE-16518-2_g_normal` becomes `16518PRE-16518-2_g_normal.bed`
/// rather than `16518PRE.bed`; the output sample matches the name the caller
/// asked for.
pub fn filename_form(raw: &str) -> String {
    format!("{}{FILENAME_SUFFIX}", strip_filename_suffix(raw))
}
