//! Configuration for dice rollers.

/// Configuration for building an [`RngRoller`](crate::RngRoller).
#[derive(Debug, Clone, Default)]
pub struct RollerConfig {
    /// RNG seed for reproducible rolls. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl RollerConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Clear the seed so rolls use fresh entropy.
    pub fn unseeded(mut self) -> Self {
        self.seed = None;
        self
    }
}
