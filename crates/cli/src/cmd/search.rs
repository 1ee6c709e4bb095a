//! Search every version for a keyword

use crate::util;
use anyhow::Result;
use ft_journal::Session;
use std::io::Write;

/// Print matching versions and return how many matched
pub fn run(session: &Session, keyword: &str, out: &mut dyn Write) -> Result<usize> {
    let store = session.store();
    let matches = store.search(keyword.as_bytes());

    if matches.is_empty() {
        writeln!(out, "Your keyword '{}' was not found in any version.", keyword)?;
        return Ok(0);
    }

    writeln!(
        out,
        "The keyword '{}' has been found in the following versions:",
        keyword
    )?;
    for version in &matches {
        util::write_version(out, version, store.current_id() == Some(version.id()))?;
    }
    Ok(matches.len())
}
