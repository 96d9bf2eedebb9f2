//! Error types for dice notation.

/// Errors that can occur while building or parsing dice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// The notation could not be parsed (expected `NdS` or `dS`).
    #[error("invalid dice notation: {0}")]
    InvalidNotation(String),

    /// A dice expression asked for zero dice.
    #[error("dice count must be at least 1")]
    ZeroCount,

    /// A die was declared with zero sides.
    #[error("a die must have at least 1 side")]
    ZeroSides,

    /// The highest possible total does not fit in a `u32`.
    #[error("{count}d{sides} can total more than {max}", max = u32::MAX)]
    TotalOverflow {
        /// Number of dice requested.
        count: u32,
        /// Sides on each die.
        sides: u32,
    },
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
