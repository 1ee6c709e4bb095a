//! Snapshot the tracked file as a new version

use anyhow::{Context, Result};
use ft_journal::{AddOutcome, Session};
use owo_colors::OwoColorize;
use std::io::Write;

pub fn run(session: &mut Session, out: &mut dyn Write) -> Result<AddOutcome> {
    let tracked = session.store().tracked().clone();
    let content = tracked
        .read()
        .with_context(|| format!("Failed to read tracked file {}", tracked.path().display()))?;

    let outcome = session.store_mut().add(content)?;
    match outcome {
        AddOutcome::Created(id) => {
            writeln!(out, "{} Version {} added.", "✓".green(), id)?;
        }
        AddOutcome::Unchanged(_) => {
            writeln!(
                out,
                "ft did not detect any change to your file and will not create a new version."
            )?;
        }
    }

    Ok(outcome)
}
