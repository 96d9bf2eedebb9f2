//! Deity tables selected by alignment.
//!
//! Each alignment has its own small deity list. The list is rolled with a
//! shared die size, but chaotic characters roll one more die than the rest.
//! Summing several dice makes the middle rows more likely than the ends, so
//! these tables are deliberately not uniform like a single-die table; author
//! ranges against the summed span rather than one die per deity.

use cf_dice::{DiceSpec, Die};
use serde::{Deserialize, Serialize};

use crate::entry::RangeEntry;
use crate::error::TableResult;
use crate::model::{AlignmentType, Deity};
use crate::table::RollableTable;

/// Dice rolled on the chaotic deity table.
pub const CHAOTIC_DEITY_DICE: u32 = 3;

/// Dice rolled on the lawful and neutral deity tables.
pub const DEITY_DICE: u32 = 2;

/// Per-alignment deity lists sharing one die size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeityTables {
    /// Sides on each deity die.
    pub sides: u32,
    /// Deities for lawful characters.
    pub lawful: Vec<RangeEntry<Deity>>,
    /// Deities for neutral characters.
    pub neutral: Vec<RangeEntry<Deity>>,
    /// Deities for chaotic characters.
    pub chaotic: Vec<RangeEntry<Deity>>,
}

impl DeityTables {
    /// How many dice are rolled for a given alignment.
    pub fn die_count_for(alignment: AlignmentType) -> u32 {
        match alignment {
            AlignmentType::Chaotic => CHAOTIC_DEITY_DICE,
            AlignmentType::Lawful | AlignmentType::Neutral => DEITY_DICE,
        }
    }

    /// The dice rolled for a given alignment.
    pub fn dice_for(&self, alignment: AlignmentType) -> DiceSpec {
        DiceSpec {
            count: Self::die_count_for(alignment),
            die: Die::from_sides(self.sides),
        }
    }

    /// The deity rows for a given alignment.
    pub fn entries_for(&self, alignment: AlignmentType) -> &[RangeEntry<Deity>] {
        match alignment {
            AlignmentType::Lawful => &self.lawful,
            AlignmentType::Neutral => &self.neutral,
            AlignmentType::Chaotic => &self.chaotic,
        }
    }

    /// Build a fresh table for the given alignment.
    ///
    /// Every call returns a new table; nothing is cached.
    pub fn table_for(&self, alignment: AlignmentType) -> TableResult<RollableTable<Deity>> {
        RollableTable::new(self.entries_for(alignment).to_vec(), self.dice_for(alignment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cf_dice::ScriptedRoller;

    use crate::error::TableError;

    fn deity(name: &str, alignment: AlignmentType) -> Deity {
        Deity {
            name: name.to_string(),
            alignment,
            domain: "test".to_string(),
        }
    }

    fn sample() -> DeityTables {
        DeityTables {
            sides: 2,
            lawful: vec![
                RangeEntry::new(3, deity("Law A", AlignmentType::Lawful)),
                RangeEntry::new(4, deity("Law B", AlignmentType::Lawful)),
            ],
            neutral: vec![
                RangeEntry::new(3, deity("Neutral A", AlignmentType::Neutral)),
                RangeEntry::new(4, deity("Neutral B", AlignmentType::Neutral)),
            ],
            chaotic: vec![
                RangeEntry::new(4, deity("Chaos A", AlignmentType::Chaotic)),
                RangeEntry::new(5, deity("Chaos B", AlignmentType::Chaotic)),
                RangeEntry::new(6, deity("Chaos C", AlignmentType::Chaotic)),
            ],
        }
    }

    #[test]
    fn chaotic_rolls_three_dice() {
        let table = sample().table_for(AlignmentType::Chaotic).unwrap();
        assert_eq!(table.die_count(), 3);
        assert_eq!(table.die_size(), 2);
    }

    #[test]
    fn other_alignments_roll_two_dice() {
        let tables = sample();
        for alignment in [AlignmentType::Lawful, AlignmentType::Neutral] {
            let table = tables.table_for(alignment).unwrap();
            assert_eq!(table.die_count(), 2);
            assert_eq!(table.die_size(), 2);
        }
    }

    #[test]
    fn table_holds_alignment_entries() {
        let tables = sample();
        for alignment in AlignmentType::ALL {
            let table = tables.table_for(alignment).unwrap();
            assert_eq!(table.entries(), tables.entries_for(alignment));
            assert!(table.entries().iter().all(|e| e.value.alignment == alignment));
        }
    }

    #[test]
    fn rolls_resolve_within_alignment() {
        let table = sample().table_for(AlignmentType::Chaotic).unwrap();
        let mut roller = ScriptedRoller::new([3, 5, 6]);
        assert_eq!(table.roll(&mut roller).name, "Chaos A");
        assert_eq!(table.roll(&mut roller).name, "Chaos B");
        assert_eq!(table.roll(&mut roller).name, "Chaos C");
    }

    #[test]
    fn each_call_builds_a_new_table() {
        let tables = sample();
        let a = tables.table_for(AlignmentType::Lawful).unwrap();
        let b = tables.table_for(AlignmentType::Lawful).unwrap();
        assert_eq!(a, b);
        assert_ne!(a.entries().as_ptr(), b.entries().as_ptr());
    }

    #[test]
    fn empty_alignment_list_is_rejected() {
        let mut tables = sample();
        tables.neutral.clear();
        assert!(matches!(
            tables.table_for(AlignmentType::Neutral),
            Err(TableError::EmptyTable)
        ));
    }
}
