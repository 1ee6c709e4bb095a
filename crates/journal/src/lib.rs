//! Version history and persistence
//!
//! This crate provides:
//! - The version store (add/load/compare/search/remove)
//! - Line-by-line comparison of two versions
//! - The length-prefixed binary database codec
//! - Scoped sessions that flush history back to disk on close

pub mod codec;
pub mod compare;
pub mod session;
pub mod store;

// Re-exports
pub use compare::{Comparison, LineDiff};
pub use session::{Persistence, Session};
pub use store::{AddOutcome, LoadOutcome, RemoveOutcome, VersionStore};
