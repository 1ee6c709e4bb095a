//! Compare two arbitrary files without touching any history

use crate::diff_utils;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::io::Write;
use std::path::Path;

/// How `ft diff` reports differences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffMode {
    /// Positional mismatched lines
    Lines,
    /// Positional mismatched words with line numbers
    Words,
    /// Unified hunks with context
    Unified { context: usize },
}

pub fn run(file_a: &Path, file_b: &Path, mode: DiffMode, out: &mut dyn Write) -> Result<()> {
    let content_a = std::fs::read(file_a)
        .with_context(|| format!("Failed to read {}", file_a.display()))?;
    let content_b = std::fs::read(file_b)
        .with_context(|| format!("Failed to read {}", file_b.display()))?;

    if diff_utils::same_content(&content_a, &content_b) {
        writeln!(out, "{}", "Files are identical.".dimmed())?;
        return Ok(());
    }

    let name_a = display_name(file_a);
    let name_b = display_name(file_b);

    match mode {
        DiffMode::Lines => {
            for mismatch in diff_utils::mismatched_lines(&content_a, &content_b) {
                writeln!(out, "{}: {}", name_a, mismatch.left.unwrap_or_default())?;
                writeln!(out, "{}: {}", name_b, mismatch.right.unwrap_or_default())?;
            }
        }
        DiffMode::Words => {
            for mismatch in diff_utils::mismatched_words(&content_a, &content_b) {
                write_word(out, &name_a, mismatch.left)?;
                write_word(out, &name_b, mismatch.right)?;
            }
        }
        DiffMode::Unified { context } => {
            if diff_utils::is_binary(&content_a) || diff_utils::is_binary(&content_b) {
                writeln!(out, "{}", "Binary files differ.".yellow())?;
            } else {
                write!(
                    out,
                    "{}",
                    diff_utils::generate_unified_diff(&content_a, &content_b, context)
                )?;
            }
        }
    }
    Ok(())
}

fn write_word(out: &mut dyn Write, name: &str, word: Option<diff_utils::Word>) -> Result<()> {
    match word {
        Some(word) => writeln!(out, "{}: {} (line {})", name, word.text, word.line)?,
        None => writeln!(out, "{}:", name)?,
    }
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
