//! Per-agent movement columns.

use horde_core::{AgentId, Vec3};
use horde_registry::AgentColumns;

use crate::SpeedSource;

/// Movement parameters supplied when an agent registers.
#[derive(Copy, Clone, Debug)]
pub struct MotionParams {
    /// Nominal speed in units per second, before status effects.
    pub speed: f32,
    /// Hold radius around the reference; `<= 0` disables holding.
    pub stop_distance: f32,
    /// Flee radius around the reference; `<= 0` disables fleeing.
    pub flee_distance: f32,
}

/// The movement columns kept row-aligned with the registry.
///
/// `base_speed` is the registered nominal value; `speed` is refreshed from it
/// every tick through a [`SpeedSource`] so external status effects apply
/// multiplicatively to the base rather than compounding tick over tick.
///
/// Mutated only through the [`AgentColumns`] impl (driven by the registry's
/// paired register/unregister) and the scheduler's commit step.
pub struct MoveBuffers {
    pub(crate) base_speed: Vec<f32>,
    pub(crate) speed: Vec<f32>,
    pub(crate) stop_distance: Vec<f32>,
    pub(crate) flee_distance: Vec<f32>,
    /// Smoothed steering direction carried across ticks.  Fresh rows start at
    /// zero so a recycled slot never inherits another agent's smoothing.
    pub(crate) prev_dir: Vec<Vec3>,
}

impl MoveBuffers {
    /// Allocate every column to `capacity` once; nothing here reallocates
    /// afterwards.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            base_speed: Vec::with_capacity(capacity),
            speed: Vec::with_capacity(capacity),
            stop_distance: Vec::with_capacity(capacity),
            flee_distance: Vec::with_capacity(capacity),
            prev_dir: Vec::with_capacity(capacity),
        }
    }

    /// Re-derive every agent's live speed from its base value.
    ///
    /// `handles` must be the registry's dense handle list (row-aligned).
    pub(crate) fn refresh_speeds<S: SpeedSource>(&mut self, handles: &[AgentId], source: &S) {
        debug_assert_eq!(handles.len(), self.speed.len());
        for (i, &handle) in handles.iter().enumerate() {
            self.speed[i] = source.live_speed(handle, self.base_speed[i]);
        }
    }

    // ── Read-only views ───────────────────────────────────────────────────

    #[inline]
    pub fn speeds(&self) -> &[f32] {
        &self.speed
    }

    #[inline]
    pub fn stop_distances(&self) -> &[f32] {
        &self.stop_distance
    }

    #[inline]
    pub fn flee_distances(&self) -> &[f32] {
        &self.flee_distance
    }

    #[inline]
    pub fn prev_dirs(&self) -> &[Vec3] {
        &self.prev_dir
    }
}

impl AgentColumns for MoveBuffers {
    type Entry = MotionParams;

    fn push(&mut self, entry: MotionParams) {
        self.base_speed.push(entry.speed);
        self.speed.push(entry.speed);
        self.stop_distance.push(entry.stop_distance);
        self.flee_distance.push(entry.flee_distance);
        self.prev_dir.push(Vec3::ZERO);
    }

    fn swap_remove(&mut self, index: usize, last: usize) {
        if index != last {
            self.base_speed.swap(index, last);
            self.speed.swap(index, last);
            self.stop_distance.swap(index, last);
            self.flee_distance.swap(index, last);
            self.prev_dir.swap(index, last);
        }
        self.base_speed.pop();
        self.speed.pop();
        self.stop_distance.pop();
        self.flee_distance.pop();
        self.prev_dir.pop();
    }

    fn clear(&mut self) {
        self.base_speed.clear();
        self.speed.clear();
        self.stop_distance.clear();
        self.flee_distance.clear();
        self.prev_dir.clear();
    }

    fn len(&self) -> usize {
        self.base_speed.len()
    }
}
