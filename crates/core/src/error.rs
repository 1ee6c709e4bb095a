//! Error types shared by the version store and its codec.

use crate::version::VersionId;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for version store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while operating on a version store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// One or more referenced versions do not exist
    #[error("No version found with number {}", join_ids(.0))]
    NotFound(Vec<VersionId>),

    /// The serialized history is malformed
    #[error("Corrupt database: {reason}")]
    CorruptDatabase { reason: String },

    /// Every version number up to `u32::MAX` has been assigned
    #[error("No version numbers left; the highest possible version already exists")]
    VersionsExhausted,

    /// Reading or writing the tracked file or database failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Create a not found error for a single version.
    pub fn not_found(id: VersionId) -> Self {
        Self::NotFound(vec![id])
    }

    /// Create a corrupt database error.
    pub fn corrupt(reason: impl Into<String>) -> Self {
        Self::CorruptDatabase {
            reason: reason.into(),
        }
    }

    /// Create an I/O error bound to a path.
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Whether this error only reports missing versions
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

fn join_ids(ids: &[VersionId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
