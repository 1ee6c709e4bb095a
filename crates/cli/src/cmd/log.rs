//! List every version with its hash and content

use crate::util;
use anyhow::Result;
use ft_core::{Blake3Hash, VersionId};
use ft_journal::Session;
use serde::Serialize;
use std::io::Write;

/// JSON shape of one listed version
#[derive(Debug, Serialize)]
struct LogEntry<'a> {
    version: VersionId,
    current: bool,
    hash: Blake3Hash,
    size: usize,
    content: std::borrow::Cow<'a, str>,
}

pub fn run(session: &Session, json: bool, out: &mut dyn Write) -> Result<()> {
    let store = session.store();

    if json {
        let entries: Vec<_> = store
            .list()
            .map(|version| LogEntry {
                version: version.id(),
                current: store.current_id() == Some(version.id()),
                hash: version.hash(),
                size: version.content().len(),
                content: version.content_lossy(),
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "Number of versions: {}", store.len())?;
    for version in store.list() {
        writeln!(out)?;
        util::write_version(out, version, store.current_id() == Some(version.id()))?;
    }
    Ok(())
}
