//! Positional line-by-line comparison of two versions

use ft_core::{Version, VersionId};
use std::fmt;

/// Marker for a line that matches on both sides
pub const IDENTICAL: &str = "<Identical>";
/// Placeholder for an empty or absent line
pub const EMPTY_LINE: &str = "<Empty line>";
/// Token between the left and right renderings
pub const SEPARATOR: &str = "<<>>";

/// Outcome for a single line index
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineDiff {
    Identical,
    Differs { left: String, right: String },
}

/// Comparison result for one line (1-based)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineComparison {
    pub line: usize,
    pub diff: LineDiff,
}

impl fmt::Display for LineComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.diff {
            LineDiff::Identical => write!(f, "Line {}: {}", self.line, IDENTICAL),
            LineDiff::Differs { left, right } => {
                write!(f, "Line {}: {} {} {}", self.line, left, SEPARATOR, right)
            }
        }
    }
}

/// Line-by-line comparison of two versions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub left: VersionId,
    pub right: VersionId,
    pub lines: Vec<LineComparison>,
}

impl Comparison {
    /// Align both versions by line index and compare each position.
    ///
    /// When both sides have a line, empty lines render as `<Empty line>`.
    /// When only one side has a line, the absent side renders as
    /// `<Empty line>` and the present side is shown literally, even if it is
    /// itself empty.
    pub fn between(left: &Version, right: &Version) -> Self {
        let lhs = left.lines();
        let rhs = right.lines();
        let total = lhs.len().max(rhs.len());

        let lines = (0..total)
            .map(|i| {
                let diff = match (lhs.get(i), rhs.get(i)) {
                    (Some(l), Some(r)) if l == r => LineDiff::Identical,
                    (Some(l), Some(r)) => LineDiff::Differs {
                        left: render(l),
                        right: render(r),
                    },
                    (None, Some(r)) => LineDiff::Differs {
                        left: EMPTY_LINE.to_string(),
                        right: String::from_utf8_lossy(r).into_owned(),
                    },
                    (Some(l), None) => LineDiff::Differs {
                        left: String::from_utf8_lossy(l).into_owned(),
                        right: EMPTY_LINE.to_string(),
                    },
                    (None, None) => unreachable!("index below max line count"),
                };
                LineComparison { line: i + 1, diff }
            })
            .collect();

        Self {
            left: left.id(),
            right: right.id(),
            lines,
        }
    }

    /// 1-based numbers of the lines that differ
    pub fn differing_lines(&self) -> impl Iterator<Item = usize> + '_ {
        self.lines
            .iter()
            .filter(|line| line.diff != LineDiff::Identical)
            .map(|line| line.line)
    }

    pub fn is_identical(&self) -> bool {
        self.differing_lines().next().is_none()
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

fn render(line: &[u8]) -> String {
    if line.is_empty() {
        EMPTY_LINE.to_string()
    } else {
        String::from_utf8_lossy(line).into_owned()
    }
}
