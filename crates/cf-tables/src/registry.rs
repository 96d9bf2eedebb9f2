//! The named table registry.

use std::sync::LazyLock;

use crate::data::TableData;
use crate::deities::DeityTables;
use crate::error::TableResult;
use crate::model::{
    AlignmentType, Background, CharacterClass, Deity, Gear, Language, Race, Spell,
};
use crate::table::RollableTable;
use crate::titles::TitleTable;
use crate::validate::{CoverageIssue, check_table, check_titles};

static TABLES: LazyLock<Tables> = LazyLock::new(|| {
    Tables::standard().expect("built-in table data has entries and valid dice")
});

/// The process-wide registry built from the built-in data.
///
/// Initialized on first use and never rebuilt.
pub fn tables() -> &'static Tables {
    &TABLES
}

/// Every table a character is rolled from.
///
/// Built once and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Tables {
    /// Ancestry (1d12).
    pub races: RollableTable<Race>,
    /// Character class (1d4).
    pub classes: RollableTable<CharacterClass>,
    /// Alignment (1d6).
    pub alignments: RollableTable<AlignmentType>,
    /// Starting gear (1d12).
    pub gear: RollableTable<Gear>,
    /// Background (1d20).
    pub backgrounds: RollableTable<Background>,
    /// Name (1d20).
    pub names: RollableTable<String>,
    /// Talent (2d6).
    pub talents: RollableTable<String>,
    /// Common language (1d12).
    pub common_languages: RollableTable<Language>,
    /// Rare language (1d4).
    pub rare_languages: RollableTable<Language>,
    /// Cleric spell (1d6).
    pub cleric_spells: RollableTable<Spell>,
    /// Wizard spell (1d12).
    pub wizard_spells: RollableTable<Spell>,
    titles: TitleTable,
    deities: DeityTables,
}

impl Tables {
    /// Build the registry from table data.
    ///
    /// Fails if any table has no entries or invalid dice. Range coverage
    /// problems are logged as warnings and do not fail the build.
    pub fn from_data(data: TableData) -> TableResult<Self> {
        for alignment in AlignmentType::ALL {
            data.deities
                .table_for(alignment)
                .map_err(|e| e.in_table(format!("deities ({alignment})")))?;
        }

        let tables = Self {
            races: data.races.build("races")?,
            classes: data.classes.build("classes")?,
            alignments: data.alignments.build("alignments")?,
            gear: data.gear.build("gear")?,
            backgrounds: data.backgrounds.build("backgrounds")?,
            names: data.names.build("names")?,
            talents: data.talents.build("talents")?,
            common_languages: data.common_languages.build("common languages")?,
            rare_languages: data.rare_languages.build("rare languages")?,
            cleric_spells: data.cleric_spells.build("cleric spells")?,
            wizard_spells: data.wizard_spells.build("wizard spells")?,
            titles: data.titles,
            deities: data.deities,
        };

        let issues = tables.coverage_issues();
        for issue in &issues {
            tracing::warn!(table = %issue.table, severity = ?issue.severity, "{}", issue.message);
        }
        tracing::debug!(issues = issues.len(), "table registry built");

        Ok(tables)
    }

    /// Build the registry from the built-in data.
    pub fn standard() -> TableResult<Self> {
        Self::from_data(TableData::standard())
    }

    /// Build the registry from a JSON document.
    pub fn from_json(json: &str) -> TableResult<Self> {
        Self::from_data(TableData::from_json(json)?)
    }

    /// The title tiers.
    pub fn titles(&self) -> &TitleTable {
        &self.titles
    }

    /// Look up a title by level and raw class/alignment indices.
    ///
    /// Returns an empty string for levels beyond the highest tier.
    ///
    /// # Panics
    ///
    /// Panics if either index is outside the title matrix.
    pub fn title_for(&self, level: u32, class_index: usize, alignment_index: usize) -> &str {
        self.titles.title_for(level, class_index, alignment_index)
    }

    /// Look up a title by level, class and alignment.
    pub fn title(&self, level: u32, class: CharacterClass, alignment: AlignmentType) -> &str {
        self.titles.title(level, class, alignment)
    }

    /// The per-alignment deity data.
    pub fn deities(&self) -> &DeityTables {
        &self.deities
    }

    /// Build a fresh deity table for an alignment.
    ///
    /// Chaotic characters roll three dice, everyone else rolls two.
    pub fn deity_table_for(&self, alignment: AlignmentType) -> RollableTable<Deity> {
        RollableTable::from_parts(
            self.deities.entries_for(alignment).to_vec(),
            self.deities.dice_for(alignment),
        )
    }

    /// Coverage problems across every table, deity list and title tier.
    pub fn coverage_issues(&self) -> Vec<CoverageIssue> {
        let mut issues = Vec::new();
        issues.extend(check_table("races", &self.races));
        issues.extend(check_table("classes", &self.classes));
        issues.extend(check_table("alignments", &self.alignments));
        issues.extend(check_table("gear", &self.gear));
        issues.extend(check_table("backgrounds", &self.backgrounds));
        issues.extend(check_table("names", &self.names));
        issues.extend(check_table("talents", &self.talents));
        issues.extend(check_table("common languages", &self.common_languages));
        issues.extend(check_table("rare languages", &self.rare_languages));
        issues.extend(check_table("cleric spells", &self.cleric_spells));
        issues.extend(check_table("wizard spells", &self.wizard_spells));
        for alignment in AlignmentType::ALL {
            let name = format!("deities ({alignment})");
            issues.extend(check_table(&name, &self.deity_table_for(alignment)));
        }
        issues.extend(check_titles("titles", &self.titles));
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cf_dice::{DiceRoller, RngRoller, ScriptedRoller};

    use crate::error::TableError;

    #[test]
    fn standard_tables_have_no_coverage_issues() {
        let issues = Tables::standard().unwrap().coverage_issues();
        assert!(issues.is_empty(), "unexpected issues: {issues:?}");
    }

    #[test]
    fn die_configurations() {
        let t = tables();
        let dice = |d: cf_dice::DiceSpec| (d.count, d.sides());
        assert_eq!(dice(t.races.dice()), (1, 12));
        assert_eq!(dice(t.classes.dice()), (1, 4));
        assert_eq!(dice(t.alignments.dice()), (1, 6));
        assert_eq!(dice(t.gear.dice()), (1, 12));
        assert_eq!(dice(t.backgrounds.dice()), (1, 20));
        assert_eq!(dice(t.names.dice()), (1, 20));
        assert_eq!(dice(t.talents.dice()), (2, 6));
        assert_eq!(dice(t.common_languages.dice()), (1, 12));
        assert_eq!(dice(t.rare_languages.dice()), (1, 4));
        assert_eq!(dice(t.cleric_spells.dice()), (1, 6));
        assert_eq!(dice(t.wizard_spells.dice()), (1, 12));
    }

    #[test]
    fn global_registry_is_shared() {
        assert!(std::ptr::eq(tables(), tables()));
    }

    fn assert_covers<T>(name: &str, table: &RollableTable<T>) {
        let dice = table.dice();
        for outcome in dice.min_roll()..=dice.max_roll() {
            let mut roller = ScriptedRoller::fixed(outcome);
            let roll = table.roll_detailed(&mut roller);
            assert!(!roll.fallback, "{name} fell back on {outcome} ({dice})");
        }
    }

    #[test]
    fn every_outcome_resolves_without_fallback() {
        let t = tables();
        assert_covers("races", &t.races);
        assert_covers("classes", &t.classes);
        assert_covers("alignments", &t.alignments);
        assert_covers("gear", &t.gear);
        assert_covers("backgrounds", &t.backgrounds);
        assert_covers("names", &t.names);
        assert_covers("talents", &t.talents);
        assert_covers("common languages", &t.common_languages);
        assert_covers("rare languages", &t.rare_languages);
        assert_covers("cleric spells", &t.cleric_spells);
        assert_covers("wizard spells", &t.wizard_spells);
        for alignment in AlignmentType::ALL {
            assert_covers("deities", &t.deity_table_for(alignment));
        }
    }

    #[test]
    fn alignment_table_maps_ranges() {
        let t = tables();
        assert_eq!(t.alignments.resolve(1), &AlignmentType::Lawful);
        assert_eq!(t.alignments.resolve(3), &AlignmentType::Lawful);
        assert_eq!(t.alignments.resolve(4), &AlignmentType::Neutral);
        assert_eq!(t.alignments.resolve(6), &AlignmentType::Chaotic);
    }

    #[test]
    fn talents_use_two_dice() {
        let t = tables();
        let mut roller = ScriptedRoller::new([2, 7, 12]);
        assert!(t.talents.roll(&mut roller).starts_with("Roll twice"));
        assert!(t.talents.roll(&mut roller).starts_with("+1"));
        assert!(t.talents.roll(&mut roller).starts_with("Choose"));
    }

    #[test]
    fn titles_by_level() {
        let t = tables();
        assert_eq!(t.title(1, CharacterClass::Fighter, AlignmentType::Lawful), "Squire");
        assert_eq!(t.title(2, CharacterClass::Fighter, AlignmentType::Lawful), "Squire");
        assert_eq!(t.title(3, CharacterClass::Wizard, AlignmentType::Chaotic), "Shadowmancer");
        assert_eq!(t.title_for(10, 1, 1), "Oracle");
        assert_eq!(t.title_for(11, 0, 0), "");
        assert_eq!(t.titles().max_level(), Some(10));
    }

    #[test]
    fn deity_tables_by_alignment() {
        let t = tables();
        assert_eq!(t.deity_table_for(AlignmentType::Chaotic).die_count(), 3);
        assert_eq!(t.deity_table_for(AlignmentType::Lawful).die_count(), 2);
        assert_eq!(t.deity_table_for(AlignmentType::Neutral).die_count(), 2);

        let mut roller = RngRoller::seeded(42);
        for alignment in AlignmentType::ALL {
            let table = t.deity_table_for(alignment);
            for _ in 0..50 {
                let roll = table.roll_detailed(&mut roller);
                assert!(!roll.fallback);
                assert_eq!(roll.value.alignment, alignment);
            }
        }
    }

    #[test]
    fn seeded_rolls_are_reproducible() {
        let t = tables();
        let mut a = RngRoller::seeded(7);
        let mut b = RngRoller::seeded(7);
        for _ in 0..20 {
            assert_eq!(t.races.roll(&mut a), t.races.roll(&mut b));
            assert_eq!(t.names.roll(&mut a), t.names.roll(&mut b));
        }
    }

    #[test]
    fn one_draw_per_roll() {
        let t = tables();
        let mut roller = ScriptedRoller::fixed(1);
        t.races.roll(&mut roller);
        t.gear.roll(&mut roller);
        t.deity_table_for(AlignmentType::Lawful).roll(&mut roller);
        assert_eq!(roller.calls(), 3);
        assert_eq!(roller.roll(1, 6), 1);
    }

    #[test]
    fn from_json_uses_custom_data() {
        let mut data = TableData::standard();
        data.names.entries.truncate(1);
        data.names.entries[0].upper_bound = 20;
        data.names.entries[0].value = "Zed".to_string();
        let json = data.to_json().unwrap();

        let t = Tables::from_json(&json).unwrap();
        let mut roller = RngRoller::seeded(1);
        assert_eq!(t.names.roll(&mut roller), "Zed");
    }

    #[test]
    fn malformed_ranges_still_load() {
        let mut data = TableData::standard();
        data.races.entries.pop();
        let t = Tables::from_data(data).unwrap();
        let issues = t.coverage_issues();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].table, "races");

        let mut roller = ScriptedRoller::fixed(12);
        assert_eq!(t.races.roll(&mut roller).name, "Human");
    }

    #[test]
    fn empty_table_fails_with_name() {
        let mut data = TableData::standard();
        data.gear.entries.clear();
        let err = Tables::from_data(data).unwrap_err();
        assert!(matches!(err, TableError::Table { ref name, .. } if name == "gear"));
    }

    #[test]
    fn oversized_dice_in_json_fail_to_load() {
        let json = TableData::standard()
            .to_json()
            .unwrap()
            .replacen("\"dice\": \"1d20\"", "\"dice\": \"3d4294967295\"", 1);
        assert!(matches!(
            Tables::from_json(&json),
            Err(TableError::Json(_))
        ));
    }

    #[test]
    fn oversized_deity_die_fails() {
        let mut data = TableData::standard();
        data.deities.sides = u32::MAX;
        let err = Tables::from_data(data).unwrap_err();
        assert!(err.to_string().starts_with("table 'deities (Lawful)'"));
    }

    #[test]
    fn empty_deity_list_fails() {
        let mut data = TableData::standard();
        data.deities.chaotic.clear();
        let err = Tables::from_data(data).unwrap_err();
        assert_eq!(err.to_string(), "table 'deities (Chaotic)': table has no entries");
    }
}
