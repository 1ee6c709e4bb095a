//! Version records

use crate::hash::{hash_bytes, Blake3Hash};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Version number of a record (1-based, never reused within a store)
#[derive(
    Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct VersionId(u32);

impl VersionId {
    /// The first version number a fresh store assigns
    pub const FIRST: VersionId = VersionId(1);

    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// The version number following this one, `None` past `u32::MAX`
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl From<u32> for VersionId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for VersionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One immutable snapshot of the tracked file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    id: VersionId,
    content: Vec<u8>,
}

impl Version {
    pub fn new(id: VersionId, content: impl Into<Vec<u8>>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }

    pub fn id(&self) -> VersionId {
        self.id
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Content decoded as UTF-8, with replacement characters for invalid bytes
    pub fn content_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }

    /// BLAKE3 hash of the content
    pub fn hash(&self) -> Blake3Hash {
        hash_bytes(&self.content)
    }

    /// Check whether `keyword` occurs anywhere in the content.
    ///
    /// An empty keyword matches every version.
    pub fn contains(&self, keyword: &[u8]) -> bool {
        if keyword.is_empty() {
            return true;
        }
        self.content
            .windows(keyword.len())
            .any(|window| window == keyword)
    }

    /// Split the content into newline-delimited lines.
    ///
    /// A trailing newline does not start another line, so empty content has
    /// zero lines and `"a\n"` has one.
    pub fn lines(&self) -> Vec<&[u8]> {
        split_lines(&self.content)
    }
}

pub(crate) fn split_lines(content: &[u8]) -> Vec<&[u8]> {
    let mut lines: Vec<&[u8]> = content.split(|&b| b == b'\n').collect();
    if lines.last().is_some_and(|last| last.is_empty()) {
        lines.pop();
    }
    lines
}
