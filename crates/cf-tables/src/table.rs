//! The generic rollable table.
//!
//! A table is an ordered list of [`RangeEntry`] rows plus the dice used to
//! roll on it. Rolling draws one total from a [`DiceRoller`] and returns the
//! first row whose upper bound is at or above that total.

use cf_dice::{DiceRoller, DiceSpec, Die};

use crate::entry::RangeEntry;
use crate::error::{TableError, TableResult};
use crate::validate::{CoverageIssue, check_table};

/// An immutable table of range-keyed values rolled with a fixed dice spec.
#[derive(Debug, Clone, PartialEq)]
pub struct RollableTable<T> {
    entries: Vec<RangeEntry<T>>,
    dice: DiceSpec,
}

/// The full outcome of one roll on a table.
#[derive(Debug)]
pub struct TableRoll<'a, T> {
    /// The total the dice produced.
    pub outcome: u32,
    /// The value the outcome resolved to.
    pub value: &'a T,
    /// True when no entry covered the outcome and the first entry was used.
    pub fallback: bool,
}

impl<T> RollableTable<T> {
    /// Create a table rolled with `dice`.
    ///
    /// Entries must be non-empty and the dice must have at least one die of
    /// at least one side. Range ordering and coverage are not checked here;
    /// see [`RollableTable::coverage_issues`].
    pub fn new(entries: Vec<RangeEntry<T>>, dice: DiceSpec) -> TableResult<Self> {
        if entries.is_empty() {
            return Err(TableError::EmptyTable);
        }
        if dice.count == 0 {
            return Err(TableError::InvalidDieCount(dice.count));
        }
        if dice.sides() == 0 {
            return Err(TableError::InvalidDieSize(dice.sides()));
        }
        dice.validate()?;
        Ok(Self::from_parts(entries, dice))
    }

    /// Create a table rolled with a single die.
    pub fn single(entries: Vec<RangeEntry<T>>, die: Die) -> TableResult<Self> {
        Self::new(entries, DiceSpec::one(die))
    }

    /// Create a table from dice notation such as `"2d6"`.
    pub fn with_notation(entries: Vec<RangeEntry<T>>, notation: &str) -> TableResult<Self> {
        Self::new(entries, DiceSpec::parse(notation)?)
    }

    /// Assemble a table whose parts were already checked.
    pub(crate) fn from_parts(entries: Vec<RangeEntry<T>>, dice: DiceSpec) -> Self {
        debug_assert!(!entries.is_empty());
        Self { entries, dice }
    }

    /// The rows of this table, in roll order.
    pub fn entries(&self) -> &[RangeEntry<T>] {
        &self.entries
    }

    /// The dice rolled on this table.
    pub fn dice(&self) -> DiceSpec {
        self.dice
    }

    /// Sides on each die.
    pub fn die_size(&self) -> u32 {
        self.dice.sides()
    }

    /// Number of dice summed per roll.
    pub fn die_count(&self) -> u32 {
        self.dice.count
    }

    /// Number of rows in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: tables cannot be built without entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a roll total to its value without rolling.
    ///
    /// Returns the first entry whose bound is at or above `outcome`. A total
    /// above every bound resolves to the first entry. That fallback hides
    /// gaps in authored data rather than fixing them; use
    /// [`RollableTable::coverage_issues`] to find such gaps.
    pub fn resolve(&self, outcome: u32) -> &T {
        self.lookup(outcome).0
    }

    /// Roll the table's dice and return the matching value.
    ///
    /// Consumes exactly one roll from `roller`.
    pub fn roll<R: DiceRoller + ?Sized>(&self, roller: &mut R) -> &T {
        self.roll_detailed(roller).value
    }

    /// Roll the table's dice and report the total alongside the value.
    pub fn roll_detailed<R: DiceRoller + ?Sized>(&self, roller: &mut R) -> TableRoll<'_, T> {
        let outcome = roller.roll(self.dice.count, self.dice.sides());
        let (value, fallback) = self.lookup(outcome);
        tracing::trace!(dice = %self.dice, outcome, fallback, "rolled on table");
        TableRoll {
            outcome,
            value,
            fallback,
        }
    }

    /// Report ordering and coverage problems with this table's ranges.
    pub fn coverage_issues(&self, name: &str) -> Vec<CoverageIssue> {
        check_table(name, self)
    }

    fn lookup(&self, outcome: u32) -> (&T, bool) {
        match self.entries.iter().find(|entry| entry.covers(outcome)) {
            Some(entry) => (&entry.value, false),
            None => (&self.entries[0].value, true),
        }
    }
}
