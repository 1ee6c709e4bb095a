//! Version store for a single tracked file

use crate::compare::Comparison;
use ft_core::{StoreError, StoreResult, TrackedFile, Version, VersionId};
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

/// Result of [`VersionStore::add`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new version was created and is now current
    Created(VersionId),
    /// Content matched the compared version; nothing was created
    Unchanged(VersionId),
}

impl AddOutcome {
    pub fn created(&self) -> bool {
        matches!(self, AddOutcome::Created(_))
    }
}

/// Result of [`VersionStore::load`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The version is now current and the tracked file was rewritten
    Loaded,
    /// The version was already current
    AlreadyCurrent,
}

/// Result of [`VersionStore::remove`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveOutcome {
    pub removed: VersionId,
    /// Whether the removed version was the current one
    pub was_current: bool,
    /// Current version after removal
    pub current: Option<VersionId>,
}

/// Ordered history of one tracked file
///
/// Records are keyed by version number, so iteration order is creation
/// order. `current` always names a key present in `versions`.
#[derive(Debug)]
pub struct VersionStore {
    versions: BTreeMap<VersionId, Version>,
    next_version: Option<VersionId>,
    current: Option<VersionId>,
    tracked: TrackedFile,
}

impl VersionStore {
    /// Create an empty store bound to `tracked`
    pub fn new(tracked: TrackedFile) -> Self {
        Self {
            versions: BTreeMap::new(),
            next_version: Some(VersionId::FIRST),
            current: None,
            tracked,
        }
    }

    /// Rebuild a store from persisted records.
    ///
    /// `next_version` resumes after the highest restored version; no version
    /// is marked current.
    pub(crate) fn restore(tracked: TrackedFile, versions: BTreeMap<VersionId, Version>) -> Self {
        let next_version = match versions.keys().next_back() {
            Some(highest) => highest.next(),
            None => Some(VersionId::FIRST),
        };

        Self {
            versions,
            next_version,
            current: None,
            tracked,
        }
    }

    pub fn tracked(&self) -> &TrackedFile {
        &self.tracked
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Version number the next created record will receive, `None` once
    /// `u32::MAX` has been assigned
    pub fn next_version(&self) -> Option<VersionId> {
        self.next_version
    }

    pub fn current_id(&self) -> Option<VersionId> {
        self.current
    }

    pub fn current(&self) -> Option<&Version> {
        self.current.and_then(|id| self.versions.get(&id))
    }

    pub fn get(&self, id: VersionId) -> Option<&Version> {
        self.versions.get(&id)
    }

    /// Most recently created version
    pub fn latest(&self) -> Option<&Version> {
        self.versions.values().next_back()
    }

    /// Every version in creation order
    pub fn list(&self) -> impl DoubleEndedIterator<Item = &Version> + ExactSizeIterator {
        self.versions.values()
    }

    /// Record `content` as a new version unless it matches the current one.
    ///
    /// When no version is current the most recently created version is used
    /// for the comparison.
    pub fn add(&mut self, content: impl Into<Vec<u8>>) -> StoreResult<AddOutcome> {
        let content = content.into();

        let baseline = self.current().or_else(|| self.latest());
        if let Some(baseline) = baseline {
            if baseline.content() == content.as_slice() {
                tracing::debug!("Content matches version {}, skipping add", baseline.id());
                return Ok(AddOutcome::Unchanged(baseline.id()));
            }
        }

        let id = self.next_version.ok_or(StoreError::VersionsExhausted)?;
        self.tracked.write(&content)?;

        self.next_version = id.next();
        self.versions.insert(id, Version::new(id, content));
        self.current = Some(id);

        tracing::debug!("Created version {}", id);
        Ok(AddOutcome::Created(id))
    }

    /// Make `id` the current version and mirror it onto the tracked file
    pub fn load(&mut self, id: VersionId) -> StoreResult<LoadOutcome> {
        let version = self
            .versions
            .get(&id)
            .ok_or_else(|| StoreError::not_found(id))?;

        if self.current == Some(id) {
            return Ok(LoadOutcome::AlreadyCurrent);
        }

        self.tracked.write(version.content())?;
        self.current = Some(id);

        tracing::debug!("Loaded version {}", id);
        Ok(LoadOutcome::Loaded)
    }

    /// Compare two versions line by line.
    ///
    /// Both ids are checked before failing, so the error names every missing
    /// version.
    pub fn compare(&self, left: VersionId, right: VersionId) -> StoreResult<Comparison> {
        let lhs = self.versions.get(&left);
        let rhs = self.versions.get(&right);

        match (lhs, rhs) {
            (Some(lhs), Some(rhs)) => Ok(Comparison::between(lhs, rhs)),
            _ => {
                let mut missing = Vec::with_capacity(2);
                if lhs.is_none() {
                    missing.push(left);
                }
                if rhs.is_none() && !missing.contains(&right) {
                    missing.push(right);
                }
                Err(StoreError::NotFound(missing))
            }
        }
    }

    /// Versions whose content contains `keyword`, in creation order
    pub fn search(&self, keyword: &[u8]) -> Vec<&Version> {
        self.versions
            .values()
            .filter(|version| version.contains(keyword))
            .collect()
    }

    /// Delete a version.
    ///
    /// Removing the current version promotes the next version in creation
    /// order, or the previous one when it was the latest, and rewrites the
    /// tracked file. Removing the last remaining version leaves the tracked
    /// file as it is.
    pub fn remove(&mut self, id: VersionId) -> StoreResult<RemoveOutcome> {
        if !self.versions.contains_key(&id) {
            return Err(StoreError::not_found(id));
        }

        let was_current = self.current == Some(id);
        let mut current = self.current;

        if was_current {
            let successor = self
                .versions
                .range((Excluded(id), Unbounded))
                .next()
                .or_else(|| self.versions.range(..id).next_back())
                .map(|(_, version)| version);

            current = successor.map(|version| version.id());
            if let Some(successor) = successor {
                self.tracked.write(successor.content())?;
            }
        }

        self.versions.remove(&id);
        self.current = current;

        tracing::debug!("Removed version {} (current now {:?})", id, current);
        Ok(RemoveOutcome {
            removed: id,
            was_current,
            current,
        })
    }

    /// Mark `id` current without touching the tracked file
    pub fn mark_current(&mut self, id: VersionId) -> StoreResult<()> {
        if !self.versions.contains_key(&id) {
            return Err(StoreError::not_found(id));
        }
        self.current = Some(id);
        Ok(())
    }

    /// Mark the most recently created version current, if any
    pub fn mark_latest_current(&mut self) -> Option<VersionId> {
        self.current = self.versions.keys().next_back().copied();
        self.current
    }

    /// Mark current the most recent version whose content equals `content`,
    /// falling back to the latest version when none does.
    ///
    /// The tracked file is not touched.
    pub fn mark_matching_current(&mut self, content: &[u8]) -> Option<VersionId> {
        let matching = self
            .versions
            .values()
            .rev()
            .find(|version| version.content() == content)
            .map(|version| version.id());

        match matching {
            Some(id) => {
                self.current = Some(id);
                self.current
            }
            None => self.mark_latest_current(),
        }
    }
}
