use std::path::Path;

use tracing::debug;

use crate::error::{IngestError, Result};

/// Reads whitespace or newline separated sample identifiers, in file order.
pub fn read_keep_list(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    let ids = parse_keep_list(&contents);
    debug!(path = %path.display(), ids = ids.len(), "loaded keep list");
    Ok(ids)
}

pub fn parse_keep_list(contents: &str) -> Vec<String> {
    contents.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_any_whitespace() {
        let ids = parse_keep_list("53823PRE.bed\n 53823CLND\t16518PRE\r\n\n");
        assert_eq!(ids, vec!["53823PRE.bed", "53823CLND", "16518PRE"]);
        assert!(parse_keep_list("  \n").is_empty());
    }
}
