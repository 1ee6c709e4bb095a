//! Show the effective configuration

use crate::config::{self, LoadedConfig};
use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::Write;

pub fn run(loaded: &LoadedConfig, example: bool, out: &mut dyn Write) -> Result<()> {
    if example {
        write!(out, "{}", config::example_config())?;
        return Ok(());
    }

    match &loaded.source {
        Some(path) => writeln!(out, "{}: {}", "Location".dimmed(), path.display())?,
        None => writeln!(out, "{}: {}", "Location".dimmed(), "(defaults)".dimmed())?,
    }
    writeln!(out)?;

    let config = &loaded.config;
    writeln!(out, "tracked_file = {}", config.tracked_file.display())?;
    writeln!(out, "database = {}", config.database.display())?;
    writeln!(out, "persist = {}", config.persist)?;

    if let Err(e) = config.validate() {
        writeln!(out, "\n{} {}", "Invalid:".red(), e)?;
    }
    Ok(())
}
