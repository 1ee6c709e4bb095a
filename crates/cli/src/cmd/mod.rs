//! CLI command implementations
//!
//! Store commands take an open [`ft_journal::Session`] and write their
//! report to `out`, so the interactive shell can reuse them.

pub mod add;
pub mod compare;
pub mod config;
pub mod diff;
pub mod load;
pub mod log;
pub mod remove;
pub mod search;
