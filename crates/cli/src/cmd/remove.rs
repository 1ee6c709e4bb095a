//! Delete a version

use anyhow::Result;
use ft_core::VersionId;
use ft_journal::{RemoveOutcome, Session};
use owo_colors::OwoColorize;
use std::io::Write;

pub fn run(session: &mut Session, version: VersionId, out: &mut dyn Write) -> Result<RemoveOutcome> {
    let outcome = session.store_mut().remove(version)?;

    writeln!(out, "Version {} deleted successfully.", version)?;
    if outcome.was_current {
        match outcome.current {
            Some(current) => writeln!(
                out,
                "Version {} is now the currently loaded version.",
                current
            )?,
            None => writeln!(
                out,
                "{}",
                format!(
                    "No versions remain; {} was left unchanged.",
                    session.store().tracked().path().display()
                )
                .dimmed()
            )?,
        }
    }
    Ok(outcome)
}
