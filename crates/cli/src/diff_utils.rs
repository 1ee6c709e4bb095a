//! Plain file comparison utilities
//!
//! Positional line and word comparison between two arbitrary files, plus a
//! unified diff for a more readable view.

use ft_core::hash_bytes;
use owo_colors::OwoColorize;
use similar::{ChangeTag, TextDiff};

/// Check if content is binary (contains null bytes in first 8KB)
pub fn is_binary(content: &[u8]) -> bool {
    content.iter().take(8192).any(|&b| b == 0)
}

/// Compare two contents by BLAKE3 hash
pub fn same_content(a: &[u8], b: &[u8]) -> bool {
    hash_bytes(a) == hash_bytes(b)
}

/// A line position where the two files disagree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMismatch {
    /// 1-based line number
    pub line: usize,
    /// Line from the first file, `None` past its end
    pub left: Option<String>,
    /// Line from the second file, `None` past its end
    pub right: Option<String>,
}

/// List every line position whose content differs
pub fn mismatched_lines(a: &[u8], b: &[u8]) -> Vec<LineMismatch> {
    let left = String::from_utf8_lossy(a);
    let right = String::from_utf8_lossy(b);
    let left: Vec<&str> = left.lines().collect();
    let right: Vec<&str> = right.lines().collect();

    (0..left.len().max(right.len()))
        .filter_map(|i| {
            let l = left.get(i).copied();
            let r = right.get(i).copied();
            (l != r).then(|| LineMismatch {
                line: i + 1,
                left: l.map(str::to_string),
                right: r.map(str::to_string),
            })
        })
        .collect()
}

/// A whitespace-separated word and the line it appears on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    pub line: usize,
}

/// A word position where the two files disagree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMismatch {
    pub left: Option<Word>,
    pub right: Option<Word>,
}

fn words(content: &[u8]) -> Vec<Word> {
    String::from_utf8_lossy(content)
        .lines()
        .enumerate()
        .flat_map(|(i, line)| {
            line.split_whitespace().map(move |text| Word {
                text: text.to_string(),
                line: i + 1,
            })
        })
        .collect()
}

/// Pair words positionally and list every pair whose text differs
pub fn mismatched_words(a: &[u8], b: &[u8]) -> Vec<WordMismatch> {
    let left = words(a);
    let right = words(b);

    (0..left.len().max(right.len()))
        .filter_map(|i| {
            let l = left.get(i);
            let r = right.get(i);
            let same = matches!((l, r), (Some(l), Some(r)) if l.text == r.text);
            (!same).then(|| WordMismatch {
                left: l.cloned(),
                right: r.cloned(),
            })
        })
        .collect()
}

/// Generate a unified diff with colored output
///
/// Returns a formatted string with colored diff hunks showing additions (+) and deletions (-)
pub fn generate_unified_diff(old_content: &[u8], new_content: &[u8], context_lines: usize) -> String {
    let old_text = String::from_utf8_lossy(old_content);
    let new_text = String::from_utf8_lossy(new_content);

    let diff = TextDiff::from_lines(&*old_text, &*new_text);

    let mut output = String::new();

    for (hunk_idx, hunk) in diff
        .unified_diff()
        .context_radius(context_lines)
        .iter_hunks()
        .enumerate()
    {
        if hunk_idx > 0 {
            output.push('\n');
        }

        let header = format!("{}", hunk.header());
        output.push_str(&format!("{}\n", header.cyan()));

        for change in hunk.iter_changes() {
            let line: &str = change.value();

            match change.tag() {
                ChangeTag::Delete => {
                    output.push_str(&format!("{}", format!("-{}", line).red()));
                }
                ChangeTag::Insert => {
                    output.push_str(&format!("{}", format!("+{}", line).green()));
                }
                ChangeTag::Equal => {
                    output.push_str(&format!("{}", format!(" {}", line).dimmed()));
                }
            }

            if !line.ends_with('\n') {
                output.push('\n');
            }
        }
    }

    output
}
