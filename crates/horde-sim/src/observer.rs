//! Swarm observer trait for progress reporting and lifecycle accounting.

use horde_core::{AgentId, Tick};

/// Callbacks invoked by [`Swarm`][crate::Swarm] at key points.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — population logger
///
/// ```rust,ignore
/// struct EvictionLog(Vec<AgentId>);
///
/// impl SwarmObserver for EvictionLog {
///     fn on_evict(&mut self, _tick: Tick, agent: AgentId) {
///         self.0.push(agent);
///     }
/// }
/// ```
pub trait SwarmObserver {
    /// Called at the start of each tick, before the reference is sampled.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after a tick fully commits.  `moved` is the number of agents
    /// advanced.
    fn on_tick_end(&mut self, _tick: Tick, _moved: usize) {}

    /// Called when backpressure eviction removes `agent`.  This is the only
    /// signal the eviction path emits — deliberately distinct from a normal
    /// unregistration so hosts can reclaim the agent without running death
    /// behavior.
    fn on_evict(&mut self, _tick: Tick, _agent: AgentId) {}

    /// Called when the population is cleared; `dropped` is how many agents
    /// were active.
    fn on_clear(&mut self, _tick: Tick, _dropped: usize) {}
}

/// A [`SwarmObserver`] that does nothing.
pub struct NoopObserver;

impl SwarmObserver for NoopObserver {}
