//! Die types and `NdS` dice notation.

use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Two-sided die (a coin).
    D2,
    /// Three-sided die.
    D3,
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// Percentile die (1-100).
    D100,
    /// A die with a custom number of sides.
    Custom(u32),
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D2 => 2,
            Self::D3 => 3,
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
            Self::Custom(n) => n,
        }
    }

    /// Build a die from a side count, preferring the named variants.
    pub fn from_sides(sides: u32) -> Self {
        match sides {
            2 => Self::D2,
            3 => Self::D3,
            4 => Self::D4,
            6 => Self::D6,
            8 => Self::D8,
            10 => Self::D10,
            12 => Self::D12,
            20 => Self::D20,
            100 => Self::D100,
            n => Self::Custom(n),
        }
    }

    /// Parse a die from a string like "d20", "d6", "d100".
    pub fn from_str_tag(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        let sides = s.strip_prefix('d')?.parse::<u32>().ok()?;
        (sides >= 1).then(|| Self::from_sides(sides))
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// A number of identical dice whose faces are summed, e.g. `2d6`.
///
/// Serialized as its notation string so data files can write `"dice": "2d6"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DiceSpec {
    /// How many dice are rolled and summed.
    pub count: u32,
    /// The die being rolled.
    pub die: Die,
}

impl DiceSpec {
    /// Create a dice spec, rejecting zero dice, zero-sided dice, and totals
    /// that cannot fit in a `u32`.
    pub fn new(count: u32, die: Die) -> DiceResult<Self> {
        let spec = Self { count, die };
        spec.validate()?;
        Ok(spec)
    }

    /// Check a spec built from its public fields.
    pub fn validate(&self) -> DiceResult<()> {
        let sides = self.sides();
        if self.count == 0 {
            return Err(DiceError::ZeroCount);
        }
        if sides == 0 {
            return Err(DiceError::ZeroSides);
        }
        if self.count.checked_mul(sides).is_none() {
            return Err(DiceError::TotalOverflow {
                count: self.count,
                sides,
            });
        }
        Ok(())
    }

    /// A single die of the given type.
    pub fn one(die: Die) -> Self {
        Self { count: 1, die }
    }

    /// Number of sides on each die.
    pub fn sides(&self) -> u32 {
        self.die.sides()
    }

    /// Lowest possible total (every die shows 1).
    pub fn min_roll(&self) -> u32 {
        self.count
    }

    /// Highest possible total (every die shows its top face).
    pub fn max_roll(&self) -> u32 {
        self.count.saturating_mul(self.sides())
    }

    /// Parse notation like `2d6`, `d20` or `1D12`. A missing count means one die.
    pub fn parse(notation: &str) -> DiceResult<Self> {
        let lower = notation.trim().to_lowercase();
        let invalid = || DiceError::InvalidNotation(notation.to_string());

        let (count, sides) = lower.split_once('d').ok_or_else(invalid)?;
        let count = if count.is_empty() {
            1
        } else {
            count.parse::<u32>().map_err(|_| invalid())?
        };
        let sides = sides.parse::<u32>().map_err(|_| invalid())?;
        if sides == 0 {
            return Err(DiceError::ZeroSides);
        }

        Self::new(count, Die::from_sides(sides))
    }
}

impl std::fmt::Display for DiceSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.count, self.die)
    }
}

impl std::str::FromStr for DiceSpec {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DiceSpec {
    type Error = DiceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DiceSpec> for String {
    fn from(spec: DiceSpec) -> Self {
        spec.to_string()
    }
}
