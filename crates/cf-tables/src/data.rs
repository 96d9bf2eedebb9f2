//! Serializable table data.
//!
//! [`TableData`] is the external data source the registry is built from.
//! The built-in data ships with the crate; any JSON document with the same
//! shape can replace it:
//!
//! ```json
//! {
//!   "races": { "dice": "1d12", "entries": [{ "range": 4, "value": { "name": "Human", "talent": "..." } }] },
//!   "talents": { "dice": "2d6", "entries": [{ "range": 12, "value": "..." }] },
//!   "titles": [{ "level": 2, "titles": [["Squire", "Warrior", "Knave"]] }],
//!   "deities": { "sides": 2, "lawful": [], "neutral": [], "chaotic": [] }
//! }
//! ```

use cf_dice::DiceSpec;
use serde::{Deserialize, Serialize};

use crate::builtin;
use crate::deities::DeityTables;
use crate::entry::RangeEntry;
use crate::error::TableResult;
use crate::model::{AlignmentType, Background, CharacterClass, Gear, Language, Race, Spell};
use crate::table::RollableTable;
use crate::titles::TitleTable;

/// The rows and dice for one rollable table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSpec<T> {
    /// Dice rolled on the table, e.g. `"1d12"`.
    pub dice: DiceSpec,
    /// Rows ordered by ascending bound.
    pub entries: Vec<RangeEntry<T>>,
}

impl<T> TableSpec<T> {
    /// Create a table spec.
    pub fn new(dice: DiceSpec, entries: Vec<RangeEntry<T>>) -> Self {
        Self { dice, entries }
    }

    /// Build the table, attributing any failure to `name`.
    pub fn build(self, name: &str) -> TableResult<RollableTable<T>> {
        RollableTable::new(self.entries, self.dice).map_err(|e| e.in_table(name))
    }
}

/// Every table's data, ready to be assembled into a registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableData {
    /// Ancestries.
    pub races: TableSpec<Race>,
    /// Character classes.
    pub classes: TableSpec<CharacterClass>,
    /// Alignments.
    pub alignments: TableSpec<AlignmentType>,
    /// Starting gear.
    pub gear: TableSpec<Gear>,
    /// Backgrounds.
    pub backgrounds: TableSpec<Background>,
    /// Character names.
    pub names: TableSpec<String>,
    /// Talents.
    pub talents: TableSpec<String>,
    /// Common languages.
    pub common_languages: TableSpec<Language>,
    /// Rare languages.
    pub rare_languages: TableSpec<Language>,
    /// Spells known by clerics.
    pub cleric_spells: TableSpec<Spell>,
    /// Spells known by wizards.
    pub wizard_spells: TableSpec<Spell>,
    /// Titles by level tier.
    pub titles: TitleTable,
    /// Deities by alignment.
    pub deities: DeityTables,
}

impl TableData {
    /// The data shipped with the crate.
    pub fn standard() -> Self {
        builtin::table_data()
    }

    /// Parse table data from JSON.
    pub fn from_json(json: &str) -> TableResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize table data to pretty-printed JSON.
    pub fn to_json(&self) -> TableResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
