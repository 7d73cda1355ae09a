//! The `Swarm` orchestrator and its public operation set.

use horde_core::{AgentId, ColliderId, SimRng, SwarmConfig, TickClock, Vec3};
use horde_move::{MotionParams, MoveBuffers, MovementScheduler, SpeedSource};
use horde_registry::AgentRegistry;
use horde_sense::{LayerMask, ObstacleField, ProbeCaster};
use horde_target::{TargetView, Targeting};

use crate::{ReferenceFeed, SwarmObserver, SwarmResult};

/// Owns the whole movement core and exposes its operation set.
///
/// One `Swarm` holds the registry, the movement buffers, the scheduler with
/// all its scratch, the obstacle field, and the reference feed — explicit
/// ownership instead of ambient singletons.  Anything that needs a piece
/// borrows it through here.
///
/// # Lifecycle
///
/// Hosts call [`register_agent`](Self::register_agent) when an agent becomes
/// active and [`unregister_agent`](Self::unregister_agent) when it dies or
/// despawns.  Registration past capacity fails and mutates nothing; callers
/// wanting room invoke [`evict_farthest`](Self::evict_farthest) and retry.
///
/// # Teardown
///
/// Dropping (or [`clear`](Self::clear)-ing) a swarm cannot race outstanding
/// parallel work: both per-tick joins complete inside [`tick`](Self::tick)
/// before it returns, and the scratch they wrote lives inside the scheduler
/// the swarm owns.
pub struct Swarm<F: ReferenceFeed, P: ProbeCaster> {
    pub(crate) config: SwarmConfig,
    pub(crate) clock: TickClock,
    pub(crate) registry: AgentRegistry,
    pub(crate) buffers: MoveBuffers,
    pub(crate) scheduler: MovementScheduler<P>,
    pub(crate) field: ObstacleField,
    pub(crate) mask: LayerMask,
    pub(crate) reference: F,
    pub(crate) rng: SimRng,
}

impl<F: ReferenceFeed, P: ProbeCaster> Swarm<F, P> {
    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Register an agent that just became active.
    ///
    /// Returns `false` — with no mutation — when at capacity or when the
    /// handle is already registered.
    pub fn register_agent(
        &mut self,
        handle: AgentId,
        collider: ColliderId,
        position: Vec3,
        facing: Vec3,
        params: MotionParams,
    ) -> bool {
        self.registry
            .register(handle, collider, position, facing, &mut self.buffers, params)
    }

    /// Unregister an agent that became inactive.  Unknown handles are a
    /// defensive no-op returning `false`.
    pub fn unregister_agent(&mut self, handle: AgentId, collider: ColliderId) -> bool {
        self.registry.unregister(handle, collider, &mut self.buffers)
    }

    /// Backpressure release: evict the agent farthest from the reference if
    /// that distance exceeds `min_distance`, reporting it through
    /// [`SwarmObserver::on_evict`] only — no death or despawn behavior runs.
    pub fn evict_farthest<O: SwarmObserver>(
        &mut self,
        min_distance: f32,
        observer: &mut O,
    ) -> Option<AgentId> {
        let reference = self.reference.position();
        let evicted = self
            .registry
            .evict_farthest(min_distance, reference, &mut self.buffers)?;
        observer.on_evict(self.clock.current_tick, evicted);
        Some(evicted)
    }

    /// Drop the entire population.
    pub fn clear<O: SwarmObserver>(&mut self, observer: &mut O) {
        let dropped = self.registry.len();
        self.registry.clear(&mut self.buffers);
        observer.on_clear(self.clock.current_tick, dropped);
    }

    // ── Ticking ───────────────────────────────────────────────────────────

    /// Advance every active agent by `dt` seconds using the given speed
    /// source.
    ///
    /// Samples the reference feed once, then runs the scheduler's
    /// probe-batch / parallel-steer / commit sequence.  Returns the number of
    /// agents moved.
    pub fn tick_with<S: SpeedSource, O: SwarmObserver>(
        &mut self,
        dt: f32,
        speeds: &S,
        observer: &mut O,
    ) -> SwarmResult<usize> {
        observer.on_tick_start(self.clock.current_tick);
        let reference = self.reference.position();
        let moved = self.scheduler.tick(
            &mut self.registry,
            &mut self.buffers,
            &self.field,
            self.mask,
            reference,
            dt,
            speeds,
        )?;
        observer.on_tick_end(self.clock.current_tick, moved);
        self.clock.advance(dt);
        Ok(moved)
    }

    /// [`tick_with`](Self::tick_with) using every agent's base speed.
    pub fn tick<O: SwarmObserver>(&mut self, dt: f32, observer: &mut O) -> SwarmResult<usize> {
        self.tick_with(dt, &horde_move::BaseSpeed, observer)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// O(1) reverse lookup from a collider identity (hit reactions, damage
    /// attribution).
    #[inline]
    pub fn lookup_collider(&self, collider: ColliderId) -> Option<AgentId> {
        self.registry.lookup_collider(collider)
    }

    /// All agents within `radius` of `center`.
    pub fn query_in_radius(&self, center: Vec3, radius: f32) -> Vec<AgentId> {
        self.registry.query_in_radius(center, radius)
    }

    /// Position of a registered agent.
    #[inline]
    pub fn position_of(&self, handle: AgentId) -> Option<Vec3> {
        self.registry.position_of(handle)
    }

    #[inline]
    pub fn active_count(&self) -> usize {
        self.registry.len()
    }

    #[inline]
    pub fn is_at_capacity(&self) -> bool {
        self.registry.is_at_capacity()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.registry.capacity()
    }

    #[inline]
    pub fn clock(&self) -> &TickClock {
        &self.clock
    }

    #[inline]
    pub fn config(&self) -> &SwarmConfig {
        &self.config
    }

    #[inline]
    pub fn reference(&self) -> &F {
        &self.reference
    }

    /// Mutable access to the feed so hosts can reposition a
    /// [`FixedReference`][crate::FixedReference] between ticks.
    #[inline]
    pub fn reference_mut(&mut self) -> &mut F {
        &mut self.reference
    }

    // ── Targeting ─────────────────────────────────────────────────────────

    /// Targeting queries over the current post-tick snapshot.
    ///
    /// Borrows `&self`, so it cannot coexist with an in-progress
    /// [`tick`](Self::tick) — the tick boundary is enforced by the borrow
    /// checker, not by convention.
    pub fn targets(&self) -> Targeting<'_> {
        Targeting::new(
            TargetView::new(self.registry.handles(), self.registry.positions()),
            &self.field,
            self.mask,
        )
    }

    /// The closest agent within `max_range` of `source`.
    pub fn nearest_target(&self, source: Vec3, max_range: f32, require_visibility: bool) -> Option<AgentId> {
        self.targets().nearest(source, max_range, require_visibility)
    }

    /// The agent in the thickest crowd within `range` of `source` (with the
    /// point-blank panic override).
    pub fn densest_target(
        &self,
        source: Vec3,
        range: f32,
        cluster_radius: f32,
        require_visibility: bool,
    ) -> Option<AgentId> {
        self.targets()
            .densest_cluster(source, range, cluster_radius, require_visibility)
    }

    /// A uniformly random qualifying agent within `range`, drawn from the
    /// swarm's seeded generator.
    pub fn random_target(&mut self, source: Vec3, range: f32, require_visibility: bool) -> Option<AgentId> {
        let targeting = Targeting::new(
            TargetView::new(self.registry.handles(), self.registry.positions()),
            &self.field,
            self.mask,
        );
        targeting.random(source, range, require_visibility, &mut self.rng)
    }
}
