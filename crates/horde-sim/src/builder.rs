//! Fluent builder for constructing a [`Swarm`].

use horde_core::{SimRng, SwarmConfig, TickClock};
use horde_move::{MoveBuffers, MovementScheduler, ProbeLayout};
use horde_registry::AgentRegistry;
use horde_sense::{LayerMask, ObstacleField, ProbeCaster};
use horde_steer::SteerTuning;

use crate::{ReferenceFeed, Swarm, SwarmResult};

/// Fluent builder for [`Swarm<F, P>`].
///
/// # Required inputs
///
/// - [`SwarmConfig`] — capacity and seed
/// - `F: ReferenceFeed` — the live reference-position provider
/// - `P: ProbeCaster` — the batch probe backend (e.g.
///   [`RayonCaster`][horde_sense::RayonCaster])
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                  |
/// |--------------------|--------------------------|
/// | `.obstacles(f)`    | `ObstacleField::empty()` |
/// | `.obstacle_mask(m)`| `LayerMask::ALL`         |
/// | `.probe_layout(l)` | `ProbeLayout::default()` |
/// | `.steer_tuning(t)` | `SteerTuning::default()` |
pub struct SwarmBuilder<F: ReferenceFeed, P: ProbeCaster> {
    config: SwarmConfig,
    reference: F,
    caster: P,
    field: Option<ObstacleField>,
    mask: Option<LayerMask>,
    layout: Option<ProbeLayout>,
    tuning: Option<SteerTuning>,
}

impl<F: ReferenceFeed, P: ProbeCaster> SwarmBuilder<F, P> {
    /// Create a builder with all required inputs.
    pub fn new(config: SwarmConfig, reference: F, caster: P) -> Self {
        Self {
            config,
            reference,
            caster,
            field: None,
            mask: None,
            layout: None,
            tuning: None,
        }
    }

    /// Supply the static obstacle field probed for avoidance and visibility.
    pub fn obstacles(mut self, field: ObstacleField) -> Self {
        self.field = Some(field);
        self
    }

    /// Supply the classification mask applied to probes and visibility rays.
    pub fn obstacle_mask(mut self, mask: LayerMask) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Supply the probe fan geometry.
    pub fn probe_layout(mut self, layout: ProbeLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Supply the steering constants.
    pub fn steer_tuning(mut self, tuning: SteerTuning) -> Self {
        self.tuning = Some(tuning);
        self
    }

    /// Validate inputs, preallocate every column to capacity, and return a
    /// ready-to-run [`Swarm`].
    pub fn build(self) -> SwarmResult<Swarm<F, P>> {
        self.config.validate()?;
        let capacity = self.config.capacity;

        let layout = self.layout.unwrap_or_default();
        let tuning = self.tuning.unwrap_or_default();
        let scheduler = MovementScheduler::new(self.caster, layout, tuning, capacity);

        Ok(Swarm {
            rng: SimRng::new(self.config.seed),
            config: self.config,
            clock: TickClock::new(),
            registry: AgentRegistry::new(capacity),
            buffers: MoveBuffers::with_capacity(capacity),
            scheduler,
            field: self.field.unwrap_or_else(ObstacleField::empty),
            mask: self.mask.unwrap_or(LayerMask::ALL),
            reference: self.reference,
        })
    }
}
