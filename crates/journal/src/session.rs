//! Scoped store lifetime: open from disk, operate, flush on close

use crate::codec;
use crate::store::VersionStore;
use ft_core::{StoreResult, TrackedFile};
use std::path::{Path, PathBuf};

/// Where a session keeps history between runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Persistence {
    /// Read at open and written at close
    Database(PathBuf),
    /// History lives only as long as the session
    Ephemeral,
}

impl Persistence {
    pub fn database_path(&self) -> Option<&Path> {
        match self {
            Persistence::Database(path) => Some(path),
            Persistence::Ephemeral => None,
        }
    }
}

/// An open version store bound to its persistence target
///
/// Call [`Session::close`] to flush deterministically. A session dropped
/// without being closed still flushes, logging any failure.
pub struct Session {
    store: VersionStore,
    persistence: Persistence,
    closed: bool,
}

impl Session {
    /// Open the history for `tracked`.
    ///
    /// The most recent version matching the tracked file's content is marked
    /// current, or the latest version when none matches or the file cannot be
    /// read. The tracked file itself is not rewritten.
    pub fn open(tracked: TrackedFile, persistence: Persistence) -> StoreResult<Self> {
        let mut store = match &persistence {
            Persistence::Database(path) => codec::read_database(path, tracked)?,
            Persistence::Ephemeral => VersionStore::new(tracked),
        };

        let current = match store.tracked().read() {
            Ok(content) => store.mark_matching_current(&content),
            Err(e) => {
                tracing::debug!("Tracked file not readable ({}), using latest version", e);
                store.mark_latest_current()
            }
        };

        tracing::info!(
            "Opened history for {} ({} versions, current {:?})",
            store.tracked().path().display(),
            store.len(),
            current.map(|id| id.get())
        );

        Ok(Self {
            store,
            persistence,
            closed: false,
        })
    }

    pub fn store(&self) -> &VersionStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut VersionStore {
        &mut self.store
    }

    pub fn persistence(&self) -> &Persistence {
        &self.persistence
    }

    /// Write the history to the database without closing
    pub fn flush(&self) -> StoreResult<()> {
        if let Persistence::Database(path) = &self.persistence {
            codec::write_database(path, &self.store)?;
        }
        Ok(())
    }

    /// Flush and end the session
    pub fn close(mut self) -> StoreResult<()> {
        self.closed = true;
        self.flush()?;
        tracing::info!("Closed history ({} versions)", self.store.len());
        Ok(())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        if let Err(e) = self.flush() {
            tracing::warn!("Failed to flush history on drop: {}", e);
        }
    }
}
