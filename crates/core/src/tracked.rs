//! Tracked file access

use crate::error::{StoreError, StoreResult};
use std::io::Write;
use std::path::{Path, PathBuf};

/// The on-disk file whose history a store manages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedFile {
    path: PathBuf,
}

impl TrackedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full current contents of the tracked file
    pub fn read(&self) -> StoreResult<Vec<u8>> {
        std::fs::read(&self.path).map_err(|e| StoreError::io(&self.path, e))
    }

    /// Replace the tracked file's contents with `content`
    pub fn write(&self, content: &[u8]) -> StoreResult<()> {
        atomic_write(&self.path, content)?;
        tracing::debug!(
            "Wrote {} bytes to tracked file {}",
            content.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Atomic write helper
///
/// Writes data to a temporary file next to the target, fsyncs it, then
/// renames it over the target. Readers never observe a half-written file.
pub fn atomic_write(target: &Path, data: &[u8]) -> StoreResult<()> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| StoreError::io(target, e))?;
    tmp.write_all(data).map_err(|e| StoreError::io(target, e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| StoreError::io(target, e))?;
    tmp.persist(target)
        .map_err(|e| StoreError::io(target, e.error))?;

    Ok(())
}
