//! The dice-rolling capability consumed by rollable tables.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::RollerConfig;
use crate::die::DiceSpec;

/// Something that can roll `count` dice of `sides` faces and return the sum.
///
/// Implementations must return a value in `[count, count * sides]`.
pub trait DiceRoller {
    /// Roll `count` dice with `sides` faces each and return the total.
    fn roll(&mut self, count: u32, sides: u32) -> u32;

    /// Roll the dice described by `spec`.
    fn roll_spec(&mut self, spec: DiceSpec) -> u32 {
        self.roll(spec.count, spec.sides())
    }
}

impl<R: DiceRoller + ?Sized> DiceRoller for &mut R {
    fn roll(&mut self, count: u32, sides: u32) -> u32 {
        (**self).roll(count, sides)
    }
}

/// A roller backed by a seedable [`StdRng`].
#[derive(Debug, Clone)]
pub struct RngRoller {
    rng: StdRng,
}

impl RngRoller {
    /// Create a roller with a fixed seed for reproducible results.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a roller seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a roller from configuration.
    pub fn from_config(config: &RollerConfig) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// Wrap an existing RNG.
    pub fn from_rng(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl DiceRoller for RngRoller {
    /// # Panics
    ///
    /// Panics if `sides` is zero. Totals past `u32::MAX` saturate.
    fn roll(&mut self, count: u32, sides: u32) -> u32 {
        debug_assert!(count >= 1 && sides >= 1, "rolled {count}d{sides}");
        let sum: u64 = (0..count)
            .map(|_| u64::from(self.rng.random_range(1..=sides)))
            .sum();
        let total = u32::try_from(sum).unwrap_or(u32::MAX);
        tracing::trace!(count, sides, total, "rolled dice");
        total
    }
}

/// A roller that replays a fixed script of outcomes.
///
/// Each call pops the next scripted value; once the script is exhausted the
/// last value repeats. The requested dice are ignored, so a script can return
/// values no real roll could produce (useful for exercising fallbacks).
#[derive(Debug, Clone)]
pub struct ScriptedRoller {
    script: VecDeque<u32>,
    last: u32,
    calls: usize,
}

impl ScriptedRoller {
    /// Create a roller that returns `outcomes` in order, then repeats the last.
    pub fn new(outcomes: impl IntoIterator<Item = u32>) -> Self {
        let script: VecDeque<u32> = outcomes.into_iter().collect();
        let last = script.back().copied().unwrap_or(1);
        Self {
            script,
            last,
            calls: 0,
        }
    }

    /// Create a roller that always returns `outcome`.
    pub fn fixed(outcome: u32) -> Self {
        Self::new([outcome])
    }

    /// How many times this roller has been asked to roll.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl DiceRoller for ScriptedRoller {
    fn roll(&mut self, _count: u32, _sides: u32) -> u32 {
        self.calls += 1;
        if let Some(next) = self.script.pop_front() {
            self.last = next;
        }
        self.last
    }
}
