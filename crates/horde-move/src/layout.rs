//! Probe fan geometry.

/// Geometry of the three-probe obstacle fan.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProbeLayout {
    /// Angle of the side probes off the facing, in degrees.
    pub spread_deg: f32,
    /// Probe length in world units.
    pub distance: f32,
    /// Height above the agent's position the probes originate from.
    pub chest_height: f32,
}

impl Default for ProbeLayout {
    fn default() -> Self {
        Self {
            spread_deg: 30.0,
            distance: 2.5,
            chest_height: 1.0,
        }
    }
}
