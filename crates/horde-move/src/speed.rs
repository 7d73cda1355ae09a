//! Live speed resolution.

use horde_core::AgentId;

/// Resolves an agent's effective speed for the coming tick.
///
/// Speeds change between ticks through forces outside this core — slows,
/// hastes, stuns.  The scheduler pulls the current value for every agent at
/// the top of each tick rather than trusting last tick's column.
///
/// # Thread safety
///
/// `Send + Sync` so the resolved columns can back the parallel steering pass.
pub trait SpeedSource: Send + Sync {
    /// Effective speed for `agent` this tick, given its registered base.
    fn live_speed(&self, agent: AgentId, base_speed: f32) -> f32;
}

/// The identity source: every agent moves at its registered base speed.
pub struct BaseSpeed;

impl SpeedSource for BaseSpeed {
    #[inline]
    fn live_speed(&self, _agent: AgentId, base_speed: f32) -> f32 {
        base_speed
    }
}
