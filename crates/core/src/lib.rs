//! Filetrack Core - primitives for the single-file version store
//!
//! This crate provides the foundational layer:
//! - BLAKE3 content hashing
//! - Immutable version records
//! - Tracked file I/O with atomic overwrite
//! - The shared error type

pub mod error;
pub mod hash;
pub mod tracked;
pub mod version;

// Re-export main types for convenience
pub use error::{StoreError, StoreResult};
pub use hash::{hash_bytes, Blake3Hash};
pub use tracked::{atomic_write, TrackedFile};
pub use version::{Version, VersionId};
