//! Coverage checks for authored table data.
//!
//! Rolling never fails on malformed ranges: an uncovered total silently
//! resolves to the first entry. These checks surface such problems so they
//! can be logged when tables are loaded.

use crate::table::RollableTable;
use crate::titles::TitleTable;

/// How serious a coverage issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The data works but contains rows that can never be rolled.
    Warning,
    /// Some rolls resolve through the first-entry fallback or lookups are out of order.
    Error,
}

/// A problem found in a table's ranges.
#[derive(Debug, Clone)]
pub struct CoverageIssue {
    /// The table the issue was found in.
    pub table: String,
    /// A human-readable description of the issue.
    pub message: String,
    /// How serious the issue is.
    pub severity: Severity,
}

impl CoverageIssue {
    fn error(table: &str, message: String) -> Self {
        Self {
            table: table.to_string(),
            message,
            severity: Severity::Error,
        }
    }

    fn warning(table: &str, message: String) -> Self {
        Self {
            table: table.to_string(),
            message,
            severity: Severity::Warning,
        }
    }

    /// Whether this issue is an error rather than a warning.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for CoverageIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{level}: {}: {}", self.table, self.message)
    }
}

/// Check a rollable table's ranges against its dice.
///
/// Reports bounds that go backwards, rows no roll can reach, and totals
/// above the last bound that would fall back to the first entry.
pub fn check_table<T>(name: &str, table: &RollableTable<T>) -> Vec<CoverageIssue> {
    let mut issues = Vec::new();
    let dice = table.dice();
    let (min, max) = (dice.min_roll(), dice.max_roll());

    let mut highest: Option<u32> = None;
    for (index, entry) in table.entries().iter().enumerate() {
        let bound = entry.upper_bound;
        match highest {
            Some(prev) if bound < prev => issues.push(CoverageIssue::error(
                name,
                format!("entry {index} has bound {bound} below an earlier bound {prev}"),
            )),
            Some(prev) if prev >= max => issues.push(CoverageIssue::warning(
                name,
                format!("entry {index} is unreachable: earlier rows already cover {dice} up to {max}"),
            )),
            Some(prev) if bound == prev => issues.push(CoverageIssue::warning(
                name,
                format!("entry {index} repeats bound {bound} and can never be rolled"),
            )),
            _ if bound < min => issues.push(CoverageIssue::warning(
                name,
                format!("entry {index} has bound {bound} below the minimum roll {min} of {dice}"),
            )),
            _ => {}
        }
        highest = Some(highest.map_or(bound, |prev| prev.max(bound)));
    }

    if let Some(top) = highest.filter(|&top| top < max) {
        issues.push(CoverageIssue::error(
            name,
            format!(
                "rolls {}..={max} on {dice} match no entry and fall back to the first entry",
                top + 1
            ),
        ));
    }

    issues
}

/// Check that title tiers are ordered and have consistently shaped matrices.
pub fn check_titles(name: &str, titles: &TitleTable) -> Vec<CoverageIssue> {
    let mut issues = Vec::new();
    let tiers = titles.tiers();

    for (index, pair) in tiers.windows(2).enumerate() {
        if pair[1].level < pair[0].level {
            issues.push(CoverageIssue::error(
                name,
                format!(
                    "tier {} (level {}) is below the preceding tier (level {})",
                    index + 1,
                    pair[1].level,
                    pair[0].level
                ),
            ));
        }
    }

    if let Some(first) = tiers.first() {
        let shape: Vec<usize> = first.titles.iter().map(Vec::len).collect();
        for (index, tier) in tiers.iter().enumerate().skip(1) {
            let other: Vec<usize> = tier.titles.iter().map(Vec::len).collect();
            if other != shape {
                issues.push(CoverageIssue::warning(
                    name,
                    format!("tier {index} (level {}) has a differently shaped title matrix", tier.level),
                ));
            }
        }
    }

    issues
}
