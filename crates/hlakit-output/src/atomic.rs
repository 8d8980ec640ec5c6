use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tempfile::NamedTempFile;
use tracing::warn;

fn target_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Output files of one run, each written to a temporary file in its
/// destination directory and renamed into place by [`OutputBatch::commit`].
///
/// Dropping a batch without committing deletes the temporaries, so a run
/// that fails part way leaves none of its outputs behind.
#[derive(Debug, Default)]
pub struct OutputBatch {
    staged: Vec<(PathBuf, NamedTempFile)>,
}

impl OutputBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of staged files.
    pub fn len(&self) -> usize {
        self.staged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    pub(crate) fn stage<F>(&mut self, path: &Path, write: F) -> Result<()>
    where
        F: FnOnce(&mut NamedTempFile) -> Result<()>,
    {
        if path.is_dir() {
            bail!("output path {} is a directory", path.display());
        }
        let dir = target_dir(path);
        fs::create_dir_all(&dir).with_context(|| format!("create directory {}", dir.display()))?;
        let mut temp = NamedTempFile::new_in(&dir)
            .with_context(|| format!("create temporary file in {}", dir.display()))?;
        write(&mut temp)?;
        temp.as_file()
            .sync_all()
            .with_context(|| format!("sync {}", path.display()))?;
        self.staged.push((path.to_path_buf(), temp));
        Ok(())
    }

    /// Renames every staged file into place, in staging order. If a rename
    /// fails, files already moved by this batch are removed again.
    pub fn commit(self) -> Result<()> {
        let mut persisted: Vec<PathBuf> = Vec::with_capacity(self.staged.len());
        for (path, temp) in self.staged {
            if let Err(error) = temp.persist(&path) {
                for done in &persisted {
                    if let Err(remove) = fs::remove_file(done) {
                        warn!(path = %done.display(), error = %remove, "could not remove output");
                    }
                }
                return Err(error.error).with_context(|| format!("persist {}", path.display()));
            }
            persisted.push(path);
        }
        Ok(())
    }
}

/// Stages a single file and commits it immediately.
pub(crate) fn write_atomically<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut NamedTempFile) -> Result<()>,
{
    let mut batch = OutputBatch::new();
    batch.stage(path, write)?;
    batch.commit()
}
