//! Restore a version as the tracked file

use anyhow::Result;
use ft_core::VersionId;
use ft_journal::{LoadOutcome, Session};
use std::io::Write;

pub fn run(session: &mut Session, version: VersionId, out: &mut dyn Write) -> Result<LoadOutcome> {
    let outcome = session.store_mut().load(version)?;
    match outcome {
        LoadOutcome::Loaded => writeln!(
            out,
            "Version {} loaded successfully. Please refresh your text editor to see the changes.",
            version
        )?,
        LoadOutcome::AlreadyCurrent => writeln!(
            out,
            "Version {} is already the currently loaded version.",
            version
        )?,
    }
    Ok(outcome)
}
