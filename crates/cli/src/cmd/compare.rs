//! Compare two versions line by line

use anyhow::Result;
use ft_core::VersionId;
use ft_journal::Session;
use owo_colors::OwoColorize;
use std::io::Write;

pub fn run(session: &Session, left: VersionId, right: VersionId, out: &mut dyn Write) -> Result<()> {
    let comparison = session.store().compare(left, right)?;

    if comparison.lines.is_empty() {
        writeln!(out, "{}", "Both versions are empty.".dimmed())?;
        return Ok(());
    }

    for line in &comparison.lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
