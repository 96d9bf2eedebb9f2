//! Weighted rollable tables for random TTRPG character generation.
//!
//! The core is [`RollableTable`]: an ordered list of range-keyed rows and
//! the dice rolled on it. On top of that sit two derived lookups, titles by
//! level/class/alignment and deity tables chosen by alignment, and the
//! [`Tables`] registry that bundles every named table.
//!
//! ```
//! use cf_dice::ScriptedRoller;
//! use cf_tables::{AlignmentType, CharacterClass, tables};
//!
//! let tables = tables();
//! let mut roller = ScriptedRoller::fixed(1);
//! assert_eq!(tables.races.roll(&mut roller).name, "Human");
//! assert_eq!(tables.deity_table_for(AlignmentType::Chaotic).die_count(), 3);
//! assert_eq!(tables.title(1, CharacterClass::Fighter, AlignmentType::Lawful), "Squire");
//! ```

mod builtin;
pub mod data;
pub mod deities;
pub mod entry;
pub mod error;
pub mod model;
pub mod registry;
pub mod table;
pub mod titles;
pub mod validate;

pub use cf_dice::{DiceRoller, DiceSpec, Die};
pub use data::{TableData, TableSpec};
pub use deities::DeityTables;
pub use entry::RangeEntry;
pub use error::{TableError, TableResult};
pub use model::{AlignmentType, Background, CharacterClass, Deity, Gear, Language, Race, Spell};
pub use registry::{Tables, tables};
pub use table::{RollableTable, TableRoll};
pub use titles::{TitleTable, TitleTier};
pub use validate::{CoverageIssue, Severity};
