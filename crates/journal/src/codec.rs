//! Binary database format for version history
//!
//! Layout, all integers little-endian:
//!
//! ```text
//! [u32 count]
//! { [u32 version][u64 length][length bytes content] } * count
//! ```
//!
//! Records are written in creation order. Which version is current, the
//! next version number, and the tracked path are not stored; the reader
//! derives `next_version` from the highest version it sees.

use crate::store::VersionStore;
use bytes::{Buf, BufMut, Bytes, BytesMut};
use ft_core::{atomic_write, StoreError, StoreResult, TrackedFile, Version, VersionId};
use std::collections::BTreeMap;
use std::path::Path;

const COUNT_LEN: usize = 4;
const RECORD_HEADER_LEN: usize = 4 + 8;

/// Serialize every record of `store`
pub fn encode(store: &VersionStore) -> Bytes {
    let body: usize = store
        .list()
        .map(|v| RECORD_HEADER_LEN + v.content().len())
        .sum();
    let mut buf = BytesMut::with_capacity(COUNT_LEN + body);

    buf.put_u32_le(store.len() as u32);
    for version in store.list() {
        buf.put_u32_le(version.id().get());
        buf.put_u64_le(version.content().len() as u64);
        buf.put_slice(version.content());
    }

    buf.freeze()
}

/// Rebuild a store from serialized bytes.
///
/// Empty input yields a fresh store. Any truncation, trailing data, zero or
/// duplicate version number is reported as [`StoreError::CorruptDatabase`].
pub fn decode(data: &[u8], tracked: TrackedFile) -> StoreResult<VersionStore> {
    if data.is_empty() {
        return Ok(VersionStore::new(tracked));
    }

    let mut buf = data;
    if buf.remaining() < COUNT_LEN {
        return Err(StoreError::corrupt(format!(
            "record count needs {} bytes, found {}",
            COUNT_LEN,
            buf.remaining()
        )));
    }
    let count = buf.get_u32_le();

    let mut versions = BTreeMap::new();
    for index in 0..count {
        if buf.remaining() < RECORD_HEADER_LEN {
            return Err(StoreError::corrupt(format!(
                "record {} of {}: truncated header",
                index + 1,
                count
            )));
        }

        let id = VersionId::new(buf.get_u32_le());
        let len = buf.get_u64_le();

        if id.get() == 0 {
            return Err(StoreError::corrupt(format!(
                "record {} of {}: version number 0",
                index + 1,
                count
            )));
        }
        if len > buf.remaining() as u64 {
            return Err(StoreError::corrupt(format!(
                "version {}: declared length {} exceeds remaining {} bytes",
                id,
                len,
                buf.remaining()
            )));
        }

        let len = len as usize;
        let content = buf[..len].to_vec();
        buf.advance(len);

        if versions.insert(id, Version::new(id, content)).is_some() {
            return Err(StoreError::corrupt(format!("duplicate version {}", id)));
        }
    }

    if buf.has_remaining() {
        return Err(StoreError::corrupt(format!(
            "{} trailing bytes after {} records",
            buf.remaining(),
            count
        )));
    }

    Ok(VersionStore::restore(tracked, versions))
}

/// Load history from a database file.
///
/// A missing or unreadable file starts a fresh history.
pub fn read_database(path: &Path, tracked: TrackedFile) -> StoreResult<VersionStore> {
    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No database at {}, starting fresh", path.display());
            return Ok(VersionStore::new(tracked));
        }
        Err(e) => {
            tracing::warn!(
                "Could not read database {}: {}, starting fresh",
                path.display(),
                e
            );
            return Ok(VersionStore::new(tracked));
        }
    };

    let store = decode(&data, tracked)?;
    tracing::debug!(
        "Read {} versions ({} bytes) from {}",
        store.len(),
        data.len(),
        path.display()
    );
    Ok(store)
}

/// Write history to a database file atomically
pub fn write_database(path: &Path, store: &VersionStore) -> StoreResult<()> {
    let data = encode(store);
    atomic_write(path, &data)?;
    tracing::debug!(
        "Wrote {} versions ({} bytes) to {}",
        store.len(),
        data.len(),
        path.display()
    );
    Ok(())
}
