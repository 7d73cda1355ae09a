//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter plus a per-tick delta in
//! seconds supplied by the host loop.  Unlike schedule-driven simulations
//! there is no wall-clock mapping here: the swarm advances whenever the host
//! frame does, many times per second, and `dt` is whatever the frame measured.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64`: at 60 ticks per second a u64 lasts ~9.7 billion years.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── TickClock ─────────────────────────────────────────────────────────────────

/// Tracks the current tick and the accumulated simulated time.
///
/// Cheap to copy; holds no heap data.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickClock {
    /// The current tick — advanced once per completed movement pass.
    pub current_tick: Tick,
    /// Total simulated seconds accumulated across all ticks so far.
    pub elapsed_secs: f64,
}

impl TickClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one tick of `dt` seconds.
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.current_tick = Tick(self.current_tick.0 + 1);
        self.elapsed_secs += dt as f64;
    }
}

impl fmt::Display for TickClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}s)", self.current_tick, self.elapsed_secs)
    }
}
