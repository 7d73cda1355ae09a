//! Fixed steering constants.

/// Tuning constants shared by every agent's steering pass.
///
/// These are per-swarm, not per-agent: individual variation comes from the
/// per-agent speed / stop-distance / flee-distance columns instead.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SteerTuning {
    /// Strength of the lateral obstacle-avoidance nudge added to the desired
    /// direction before renormalizing.
    pub avoidance_weight: f32,

    /// Maximum facing rotation in radians per second.
    pub turn_rate: f32,

    /// Exponential-style blend rate (per second) between the previous and the
    /// newly desired direction.  Higher = snappier, lower = smoother.
    pub blend_rate: f32,
}

impl Default for SteerTuning {
    fn default() -> Self {
        Self {
            avoidance_weight: 1.5,
            turn_rate: 6.0,
            blend_rate: 8.0,
        }
    }
}
