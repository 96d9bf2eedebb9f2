//! Character attributes produced by the tables.

use serde::{Deserialize, Serialize};

/// A character's moral alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlignmentType {
    /// Upholds order and law.
    Lawful,
    /// Walks between law and chaos.
    Neutral,
    /// Serves chaos and ruin.
    Chaotic,
}

impl AlignmentType {
    /// All alignments, in title-matrix column order.
    pub const ALL: [Self; 3] = [Self::Lawful, Self::Neutral, Self::Chaotic];

    /// Column of this alignment in a title matrix.
    pub fn index(self) -> usize {
        match self {
            Self::Lawful => 0,
            Self::Neutral => 1,
            Self::Chaotic => 2,
        }
    }
}

impl std::fmt::Display for AlignmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lawful => write!(f, "Lawful"),
            Self::Neutral => write!(f, "Neutral"),
            Self::Chaotic => write!(f, "Chaotic"),
        }
    }
}

/// A character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    /// Armored warrior.
    Fighter,
    /// Servant of a deity.
    Priest,
    /// Sneak and lockpick.
    Thief,
    /// Student of arcane magic.
    Wizard,
}

impl CharacterClass {
    /// All classes, in title-matrix row order.
    pub const ALL: [Self; 4] = [Self::Fighter, Self::Priest, Self::Thief, Self::Wizard];

    /// Row of this class in a title matrix.
    pub fn index(self) -> usize {
        match self {
            Self::Fighter => 0,
            Self::Priest => 1,
            Self::Thief => 2,
            Self::Wizard => 3,
        }
    }
}

impl std::fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fighter => write!(f, "Fighter"),
            Self::Priest => write!(f, "Priest"),
            Self::Thief => write!(f, "Thief"),
            Self::Wizard => write!(f, "Wizard"),
        }
    }
}

/// An ancestry and the talent it grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Race {
    /// Name of the ancestry.
    pub name: String,
    /// The ancestry's innate talent.
    pub talent: String,
}

/// A piece of starting equipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gear {
    /// Item name.
    pub name: String,
    /// How many of the item are carried.
    pub quantity: u32,
}

/// A character's life before adventuring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Background {
    /// Short name of the background.
    pub name: String,
    /// One-line description.
    pub description: String,
}

/// A god a character may worship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deity {
    /// Name of the deity.
    pub name: String,
    /// The deity's alignment.
    pub alignment: AlignmentType,
    /// What the deity holds sway over.
    pub domain: String,
}

/// A spoken language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Language name.
    pub name: String,
    /// Who typically speaks it.
    pub speakers: String,
}

/// A spell a caster can learn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    /// Spell name.
    pub name: String,
    /// Spell tier (1 is the lowest).
    pub tier: u8,
}

impl std::fmt::Display for Spell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (tier {})", self.name, self.tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_match_all_order() {
        for (i, alignment) in AlignmentType::ALL.iter().enumerate() {
            assert_eq!(alignment.index(), i);
        }
        for (i, class) in CharacterClass::ALL.iter().enumerate() {
            assert_eq!(class.index(), i);
        }
    }

    #[test]
    fn display() {
        assert_eq!(AlignmentType::Chaotic.to_string(), "Chaotic");
        assert_eq!(CharacterClass::Wizard.to_string(), "Wizard");
        let spell = Spell {
            name: "Light".to_string(),
            tier: 1,
        };
        assert_eq!(spell.to_string(), "Light (tier 1)");
    }

    #[test]
    fn deity_serde_roundtrip() {
        let deity = Deity {
            name: "Aurel".to_string(),
            alignment: AlignmentType::Lawful,
            domain: "Justice".to_string(),
        };
        let json = serde_json::to_string(&deity).unwrap();
        let back: Deity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, deity);
    }
}
