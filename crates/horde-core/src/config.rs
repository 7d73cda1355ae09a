//! Top-level swarm configuration.

use crate::{HordeError, HordeResult};

/// Configuration shared by the registry, scheduler, and orchestrator.
///
/// Typically loaded from a TOML/JSON file by the application crate (with the
/// `serde` feature) and handed to `SwarmBuilder`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwarmConfig {
    /// Hard population ceiling.  Every SoA column is sized to this once and
    /// never reallocated; registration past it is rejected.
    pub capacity: usize,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
}

impl SwarmConfig {
    pub fn new(capacity: usize, seed: u64) -> Self {
        Self { capacity, seed }
    }

    /// Reject configurations no swarm can be built from.
    pub fn validate(&self) -> HordeResult<()> {
        if self.capacity == 0 {
            return Err(HordeError::Config("capacity must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self { capacity: 1_024, seed: 0 }
    }
}
