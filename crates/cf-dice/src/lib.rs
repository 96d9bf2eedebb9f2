//! Dice rolling capability for Charforge.
//!
//! Tables never roll dice themselves: they ask a [`DiceRoller`] for the sum
//! of `count` dice with `sides` faces each. This crate provides that trait,
//! the [`Die`] and [`DiceSpec`] notation types, an RNG-backed roller, and a
//! scripted roller for deterministic tests.

pub mod config;
pub mod die;
pub mod error;
pub mod roller;

pub use config::RollerConfig;
pub use die::{DiceSpec, Die};
pub use error::{DiceError, DiceResult};
pub use roller::{DiceRoller, RngRoller, ScriptedRoller};
