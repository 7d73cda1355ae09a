//! The per-tick movement pass.

use rayon::prelude::*;

use horde_core::Vec3;
use horde_registry::{AgentColumns, AgentRegistry};
use horde_sense::{LayerMask, ObstacleField, ProbeCaster, ProbeRequest};
use horde_steer::{SteerInput, SteerOutput, SteerTuning, steer};

use crate::{MoveBuffers, MoveError, MoveResult, ProbeLayout, SpeedSource};

/// Probes per agent: center, left, right.
const PROBES_PER_AGENT: usize = 3;

/// Drives one movement tick over the registry's whole active set.
///
/// Owns all per-tick scratch (probe requests, probe hits, steering outputs),
/// preallocated to capacity at construction.  Probe scratch is resized only
/// when `3 × active_count` differs from the previous tick, never
/// unconditionally.
///
/// # Type parameter
///
/// `P` is the batch probe backend.  Swap [`RayonCaster`] for
/// [`SerialCaster`] (or anything else honoring the [`ProbeCaster`] contract)
/// at compile time with no runtime overhead.
///
/// [`RayonCaster`]: horde_sense::RayonCaster
/// [`SerialCaster`]: horde_sense::SerialCaster
pub struct MovementScheduler<P: ProbeCaster> {
    caster: P,
    layout: ProbeLayout,
    tuning: SteerTuning,

    // ── Per-tick scratch ──────────────────────────────────────────────────
    requests: Vec<ProbeRequest>,
    hits: Vec<bool>,
    outputs: Vec<SteerOutput>,
}

impl<P: ProbeCaster> MovementScheduler<P> {
    /// Create a scheduler with scratch preallocated for `capacity` agents.
    pub fn new(caster: P, layout: ProbeLayout, tuning: SteerTuning, capacity: usize) -> Self {
        Self {
            caster,
            layout,
            tuning,
            requests: Vec::with_capacity(capacity * PROBES_PER_AGENT),
            hits: Vec::with_capacity(capacity * PROBES_PER_AGENT),
            outputs: Vec::with_capacity(capacity),
        }
    }

    /// Number of probe request slots currently held (3 × the active count of
    /// the last tick).
    pub fn probe_slots(&self) -> usize {
        self.requests.len()
    }

    pub fn tuning(&self) -> &SteerTuning {
        &self.tuning
    }

    pub fn layout(&self) -> &ProbeLayout {
        &self.layout
    }

    /// Advance every active agent by `dt` seconds.
    ///
    /// Returns the number of agents moved.  Errors only on a registry/column
    /// row-count mismatch, which is structural misuse — see
    /// [`MoveError::ColumnsOutOfSync`].
    pub fn tick<S: SpeedSource>(
        &mut self,
        registry: &mut AgentRegistry,
        buffers: &mut MoveBuffers,
        field: &ObstacleField,
        mask: LayerMask,
        reference: Vec3,
        dt: f32,
        speeds: &S,
    ) -> MoveResult<usize> {
        let n = registry.len();
        if buffers.len() != n {
            return Err(MoveError::ColumnsOutOfSync {
                registry: n,
                columns: buffers.len(),
            });
        }
        if n == 0 {
            return Ok(0);
        }

        // ── ① Refresh live speeds ─────────────────────────────────────────
        buffers.refresh_speeds(registry.handles(), speeds);

        // ── ② Assemble the probe fan ──────────────────────────────────────
        let want = n * PROBES_PER_AGENT;
        if self.requests.len() != want {
            self.requests.resize(want, ProbeRequest::default());
        }
        let spread = self.layout.spread_deg.to_radians();
        let lift = Vec3::UP * self.layout.chest_height;
        let max_dist = self.layout.distance;
        {
            let positions = registry.positions();
            let facings = registry.facings();
            for i in 0..n {
                let origin = positions[i] + lift;
                let facing = facings[i];
                let probe = |dir: Vec3| ProbeRequest { origin, dir, max_dist };
                self.requests[i * PROBES_PER_AGENT] = probe(facing);
                self.requests[i * PROBES_PER_AGENT + 1] = probe(facing.yawed(-spread));
                self.requests[i * PROBES_PER_AGENT + 2] = probe(facing.yawed(spread));
            }
        }

        // ── ③ One batched dispatch ────────────────────────────────────────
        //
        // cast_all returns only when every hit is written; nothing below may
        // run before that join.
        self.caster
            .cast_all(field, mask, &self.requests, &mut self.hits);

        // ── ④ Data-parallel steering ──────────────────────────────────────
        //
        // Explicit field borrows so the closure captures only shared
        // immutable state; each task writes solely its own output slot.
        {
            let handles = registry.handles();
            let positions = registry.positions();
            let facings = registry.facings();
            let hits = &self.hits;
            let tuning = &self.tuning;
            let buffers = &*buffers;

            (0..n)
                .into_par_iter()
                .map(|i| {
                    let input = SteerInput {
                        handle: handles[i],
                        position: positions[i],
                        facing: facings[i],
                        reference,
                        speed: buffers.speed[i],
                        stop_distance: buffers.stop_distance[i],
                        flee_distance: buffers.flee_distance[i],
                        hit_center: hits[i * PROBES_PER_AGENT],
                        hit_left: hits[i * PROBES_PER_AGENT + 1],
                        hit_right: hits[i * PROBES_PER_AGENT + 2],
                        prev_dir: buffers.prev_dir[i],
                        dt,
                    };
                    steer(&input, tuning)
                })
                .collect_into_vec(&mut self.outputs);
        }

        // ── ⑤ Sequential commit ───────────────────────────────────────────
        for (i, out) in self.outputs.iter().enumerate() {
            registry.commit_move(i, out.position, out.facing);
            buffers.prev_dir[i] = out.next_dir;
        }

        Ok(n)
    }
}
