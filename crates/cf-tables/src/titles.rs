//! Title lookup by level, class and alignment.
//!
//! Titles are not rolled. Each tier covers every level up to its threshold
//! and holds a matrix of titles indexed by class row and alignment column.

use serde::{Deserialize, Serialize};

use crate::model::{AlignmentType, CharacterClass};

/// Titles for every level up to and including `level`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleTier {
    /// Highest level (inclusive) this tier applies to.
    pub level: u32,
    /// Titles indexed `[class][alignment]`.
    pub titles: Vec<Vec<String>>,
}

/// Level-ordered title tiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TitleTable {
    tiers: Vec<TitleTier>,
}

impl TitleTable {
    /// Create a title table from tiers ordered by ascending level.
    pub fn new(tiers: Vec<TitleTier>) -> Self {
        Self { tiers }
    }

    /// The tiers in lookup order.
    pub fn tiers(&self) -> &[TitleTier] {
        &self.tiers
    }

    /// The highest level any tier covers.
    pub fn max_level(&self) -> Option<u32> {
        self.tiers.iter().map(|tier| tier.level).max()
    }

    /// Look up the title for a level by raw matrix indices.
    ///
    /// Uses the first tier whose level is at or above `level`. Levels beyond
    /// every tier have no title and return an empty string.
    ///
    /// # Panics
    ///
    /// Panics if `class_index` or `alignment_index` is outside the matched
    /// tier's matrix.
    pub fn title_for(&self, level: u32, class_index: usize, alignment_index: usize) -> &str {
        self.tiers
            .iter()
            .find(|tier| tier.level >= level)
            .map_or("", |tier| tier.titles[class_index][alignment_index].as_str())
    }

    /// Look up the title for a level, class and alignment.
    pub fn title(&self, level: u32, class: CharacterClass, alignment: AlignmentType) -> &str {
        self.title_for(level, class.index(), alignment.index())
    }
}
