//! Shared utilities for CLI commands

use crate::config::Config;
use anyhow::{Context, Result};
use ft_core::{StoreError, Version};
use ft_journal::Session;
use owo_colors::OwoColorize;
use std::io::Write;

/// Open the history described by `config`
pub fn open_session(config: &Config) -> Result<Session> {
    config.validate().context("Invalid configuration")?;
    Session::open(config.tracked(), config.persistence()).with_context(|| {
        format!(
            "Failed to open history for {}",
            config.tracked_file.display()
        )
    })
}

/// Print one version in the detailed listing format
pub fn write_version(out: &mut dyn Write, version: &Version, current: bool) -> Result<()> {
    if current {
        writeln!(
            out,
            "Version number: {} {}",
            version.id(),
            "(current)".green()
        )?;
    } else {
        writeln!(out, "Version number: {}", version.id())?;
    }
    writeln!(out, "Hash value: {}", version.hash())?;
    writeln!(
        out,
        "Size: {}",
        format_size(version.content().len() as u64).dimmed()
    )?;
    writeln!(out, "Content: {}", version.content_lossy())?;
    Ok(())
}

/// Whether an error is a recoverable store report rather than a failure
pub fn is_recoverable(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<StoreError>(),
        Some(StoreError::NotFound(_))
            | Some(StoreError::Io { .. })
            | Some(StoreError::VersionsExhausted)
    )
}

/// Format file size in human-readable format
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
