//! Built-in table data.

use cf_dice::{DiceSpec, Die};

use crate::data::{TableData, TableSpec};
use crate::deities::DeityTables;
use crate::entry::{RangeEntry, entries};
use crate::model::{
    AlignmentType, Background, CharacterClass, Deity, Gear, Language, Race, Spell,
};
use crate::titles::{TitleTable, TitleTier};

const RACES: &[(u32, &str, &str)] = &[
    (4, "Human", "Ambitious: roll one extra talent at first level"),
    (6, "Elf", "Farsight: +1 to ranged attacks or spellcasting checks"),
    (8, "Dwarf", "Stout: start with extra hit points and roll hit dice with advantage"),
    (10, "Halfling", "Stealthy: become invisible for three rounds once per day"),
    (11, "Half-Orc", "Mighty: +1 to melee attack and damage rolls"),
    (12, "Goblin", "Keen Senses: cannot be surprised"),
];

const CLASSES: &[(u32, CharacterClass)] = &[
    (1, CharacterClass::Fighter),
    (2, CharacterClass::Priest),
    (3, CharacterClass::Thief),
    (4, CharacterClass::Wizard),
];

const ALIGNMENTS: &[(u32, AlignmentType)] = &[
    (3, AlignmentType::Lawful),
    (5, AlignmentType::Neutral),
    (6, AlignmentType::Chaotic),
];

const GEAR: &[(u32, &str, u32)] = &[
    (1, "Torch", 1),
    (2, "Dagger", 1),
    (3, "Pole", 1),
    (4, "Shortbow and arrows", 5),
    (5, "Rope, 60 feet", 1),
    (6, "Oil flask", 1),
    (7, "Crowbar", 1),
    (8, "Iron spikes", 10),
    (9, "Flint and steel", 1),
    (10, "Grappling hook", 1),
    (11, "Club", 1),
    (12, "Bag of caltrops", 1),
];

const BACKGROUNDS: &[(u32, &str, &str)] = &[
    (1, "Urchin", "You grew up in the merciless streets of a large city"),
    (2, "Wanted", "There's a price on your head, but you have allies"),
    (3, "Cult Initiate", "You know blasphemous secrets and rituals"),
    (4, "Thieves' Guild", "You have connections, contacts, and debts"),
    (5, "Banished", "Your people cast you out for supposed crimes"),
    (6, "Orphaned", "An unusual guardian rescued and raised you"),
    (7, "Wizard's Apprentice", "You have a knack and eye for arcana"),
    (8, "Jeweler", "You can easily appraise value and authenticity"),
    (9, "Herbalist", "You know plants, medicines, and poisons"),
    (10, "Barbarian", "You left the horde, but it never quite left you"),
    (11, "Mercenary", "You fought friend and foe alike for your coin"),
    (12, "Sailor", "Pirate, privateer, or merchant, the seas are yours"),
    (13, "Acolyte", "You're well trained in religious rites and doctrines"),
    (14, "Soldier", "You served as a fighter in an organized army"),
    (15, "Ranger", "The woods and wilds are your true home"),
    (16, "Scout", "You survived on stealth, observation, and speed"),
    (17, "Minstrel", "You've traveled far with your charm and talent"),
    (18, "Scholar", "You know much about ancient history and lore"),
    (19, "Noble", "A famous name has opened many doors for you"),
    (20, "Chirurgeon", "You know anatomy, surgery, and first aid"),
];

const NAMES: &[(u32, &str)] = &[
    (1, "Aldric"),
    (2, "Brenna"),
    (3, "Corwin"),
    (4, "Dagna"),
    (5, "Edric"),
    (6, "Fenna"),
    (7, "Garrick"),
    (8, "Hilde"),
    (9, "Isolde"),
    (10, "Jorund"),
    (11, "Kestrel"),
    (12, "Lorcan"),
    (13, "Maren"),
    (14, "Nyle"),
    (15, "Oswin"),
    (16, "Perrin"),
    (17, "Quill"),
    (18, "Rowena"),
    (19, "Sigrun"),
    (20, "Tobin"),
];

const TALENTS: &[(u32, &str)] = &[
    (2, "Roll twice more on this table and keep both results"),
    (6, "+2 to Strength, Dexterity, or Constitution"),
    (9, "+1 to melee or ranged attacks"),
    (11, "+2 to Intelligence, Wisdom, or Charisma"),
    (12, "Choose a talent, or +2 points to distribute among stats"),
];

const COMMON_LANGUAGES: &[(u32, &str, &str)] = &[
    (2, "Dwarvish", "Dwarves"),
    (4, "Elvish", "Elves"),
    (5, "Giant", "Giants, ogres, trolls"),
    (7, "Goblin", "Bugbears, goblins, hobgoblins"),
    (8, "Merran", "Merfolk, sahuagin, sirens"),
    (10, "Orcish", "Orcs"),
    (11, "Reptilian", "Lizardfolk, viperians"),
    (12, "Sylvan", "Centaurs, dryads, faeries"),
];

const RARE_LANGUAGES: &[(u32, &str, &str)] = &[
    (1, "Celestial", "Angels"),
    (2, "Diabolic", "Demons, devils"),
    (3, "Draconic", "Dragons"),
    (4, "Primordial", "Elder things, elementals"),
];

const CLERIC_SPELLS: &[(u32, &str)] = &[
    (1, "Cure Wounds"),
    (2, "Holy Weapon"),
    (3, "Light"),
    (4, "Protection From Evil"),
    (5, "Shield of Faith"),
    (6, "Turn Undead"),
];

const WIZARD_SPELLS: &[(u32, &str)] = &[
    (1, "Alarm"),
    (2, "Burning Hands"),
    (3, "Charm Person"),
    (4, "Detect Magic"),
    (5, "Feather Fall"),
    (6, "Floating Disk"),
    (7, "Hold Portal"),
    (8, "Light"),
    (9, "Mage Armor"),
    (10, "Magic Missile"),
    (11, "Protection From Evil"),
    (12, "Sleep"),
];

/// Sides on every deity die.
const DEITY_SIDES: u32 = 2;

const LAWFUL_DEITIES: &[(u32, &str, &str)] = &[
    (3, "Aurel the Just", "Law, justice, and oaths"),
    (4, "Ordanna", "Hearth, order, and harvest"),
];

const NEUTRAL_DEITIES: &[(u32, &str, &str)] = &[
    (3, "Meridan", "Balance and the turning seasons"),
    (4, "The Wandering Loom", "Fate and the roads between"),
];

const CHAOTIC_DEITIES: &[(u32, &str, &str)] = &[
    (4, "Vorrak", "Strife and conquest"),
    (5, "The Hollow Queen", "Secrets and forbidden lore"),
    (6, "Skarn", "Ruin and hunger"),
];

/// Title tiers; each row is a class, each column an alignment
/// (lawful, neutral, chaotic).
const TITLES: &[(u32, [[&str; 3]; 4])] = &[
    (
        2,
        [
            ["Squire", "Warrior", "Knave"],
            ["Acolyte", "Seeker", "Initiate"],
            ["Footpad", "Robber", "Thug"],
            ["Apprentice", "Wanderer", "Adept"],
        ],
    ),
    (
        4,
        [
            ["Cavalier", "Barbarian", "Bandit"],
            ["Crusader", "Invoker", "Zealot"],
            ["Burglar", "Outlaw", "Cutthroat"],
            ["Conjurer", "Seer", "Shadowmancer"],
        ],
    ),
    (
        6,
        [
            ["Knight", "Battlerager", "Slayer"],
            ["Templar", "Haruspex", "Cultist"],
            ["Rook", "Rogue", "Executioner"],
            ["Arcanist", "Warlock", "Hexer"],
        ],
    ),
    (
        8,
        [
            ["Thane", "Warchief", "Reaver"],
            ["Champion", "Mystic", "Scourge"],
            ["Underboss", "Renegade", "Assassin"],
            ["Mage", "Sage", "Necromancer"],
        ],
    ),
    (
        10,
        [
            ["Lord", "Chieftain", "Warlord"],
            ["Paladin", "Oracle", "Chaos Lord"],
            ["Boss", "Bandit King", "Shadow"],
            ["Archmage", "Druid", "Dread Sorcerer"],
        ],
    ),
];

fn d(sides: u32) -> DiceSpec {
    DiceSpec::one(Die::from_sides(sides))
}

fn deities(rows: &[(u32, &str, &str)], alignment: AlignmentType) -> Vec<RangeEntry<Deity>> {
    rows.iter()
        .map(|(bound, name, domain)| {
            RangeEntry::new(
                *bound,
                Deity {
                    name: (*name).to_string(),
                    alignment,
                    domain: (*domain).to_string(),
                },
            )
        })
        .collect()
}

fn languages(rows: &[(u32, &str, &str)]) -> Vec<RangeEntry<Language>> {
    rows.iter()
        .map(|(bound, name, speakers)| {
            RangeEntry::new(
                *bound,
                Language {
                    name: (*name).to_string(),
                    speakers: (*speakers).to_string(),
                },
            )
        })
        .collect()
}

fn spells(rows: &[(u32, &str)], tier: u8) -> Vec<RangeEntry<Spell>> {
    rows.iter()
        .map(|(bound, name)| {
            RangeEntry::new(
                *bound,
                Spell {
                    name: (*name).to_string(),
                    tier,
                },
            )
        })
        .collect()
}

/// Assemble the built-in table data.
pub(crate) fn table_data() -> TableData {
    let races = RACES
        .iter()
        .map(|(bound, name, talent)| {
            RangeEntry::new(
                *bound,
                Race {
                    name: (*name).to_string(),
                    talent: (*talent).to_string(),
                },
            )
        })
        .collect();

    let gear = GEAR
        .iter()
        .map(|(bound, name, quantity)| {
            RangeEntry::new(
                *bound,
                Gear {
                    name: (*name).to_string(),
                    quantity: *quantity,
                },
            )
        })
        .collect();

    let backgrounds = BACKGROUNDS
        .iter()
        .map(|(bound, name, description)| {
            RangeEntry::new(
                *bound,
                Background {
                    name: (*name).to_string(),
                    description: (*description).to_string(),
                },
            )
        })
        .collect();

    let titles = TITLES
        .iter()
        .map(|(level, matrix)| TitleTier {
            level: *level,
            titles: matrix
                .iter()
                .map(|row| row.iter().map(|title| (*title).to_string()).collect())
                .collect(),
        })
        .collect();

    TableData {
        races: TableSpec::new(d(12), races),
        classes: TableSpec::new(d(4), entries(CLASSES)),
        alignments: TableSpec::new(d(6), entries(ALIGNMENTS)),
        gear: TableSpec::new(d(12), gear),
        backgrounds: TableSpec::new(d(20), backgrounds),
        names: TableSpec::new(d(20), entries(NAMES)),
        talents: TableSpec::new(
            DiceSpec {
                count: 2,
                die: Die::D6,
            },
            entries(TALENTS),
        ),
        common_languages: TableSpec::new(d(12), languages(COMMON_LANGUAGES)),
        rare_languages: TableSpec::new(d(4), languages(RARE_LANGUAGES)),
        cleric_spells: TableSpec::new(d(6), spells(CLERIC_SPELLS, 1)),
        wizard_spells: TableSpec::new(d(12), spells(WIZARD_SPELLS, 1)),
        titles: TitleTable::new(titles),
        deities: DeityTables {
            sides: DEITY_SIDES,
            lawful: deities(LAWFUL_DEITIES, AlignmentType::Lawful),
            neutral: deities(NEUTRAL_DEITIES, AlignmentType::Neutral),
            chaotic: deities(CHAOTIC_DEITIES, AlignmentType::Chaotic),
        },
    }
}
