use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::atomic::OutputBatch;

impl OutputBatch {
    /// Stages `report` as pretty JSON with a trailing newline.
    pub fn json_report<T: Serialize>(&mut self, path: &Path, report: &T) -> Result<()> {
        self.stage(path, |file| {
            serde_json::to_writer_pretty(&mut *file, report)?;
            file.write_all(b"\n")?;
            Ok(())
        })
        .with_context(|| format!("write report {}", path.display()))
    }
}
