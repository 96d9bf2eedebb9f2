//! Range-keyed table entries.

use serde::{Deserialize, Serialize};

/// One row of a rollable table: the inclusive upper bound of the roll range
/// it covers, and the value it yields.
///
/// The lower bound is implicit: one more than the previous entry's bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeEntry<T> {
    /// Highest roll (inclusive) that resolves to this entry.
    #[serde(rename = "range")]
    pub upper_bound: u32,
    /// The value this entry yields.
    pub value: T,
}

impl<T> RangeEntry<T> {
    /// Create an entry covering rolls up to and including `upper_bound`.
    pub fn new(upper_bound: u32, value: T) -> Self {
        Self { upper_bound, value }
    }

    /// Whether a roll of `outcome` falls at or below this entry's bound.
    pub fn covers(&self, outcome: u32) -> bool {
        self.upper_bound >= outcome
    }
}

impl<T> From<(u32, T)> for RangeEntry<T> {
    fn from((upper_bound, value): (u32, T)) -> Self {
        Self::new(upper_bound, value)
    }
}

/// Build a list of entries from `(upper_bound, value)` pairs.
pub fn entries<T, V: Into<T> + Clone>(rows: &[(u32, V)]) -> Vec<RangeEntry<T>> {
    rows.iter()
        .map(|(bound, value)| RangeEntry::new(*bound, value.clone().into()))
        .collect()
}
