//! Unit tests for horde-move.

use horde_core::{AgentId, ColliderId, Vec3};
use horde_registry::{AgentColumns, AgentRegistry};
use horde_sense::{LayerMask, ObstacleField, ObstacleFieldBuilder, SerialCaster};
use horde_steer::SteerTuning;

use crate::{BaseSpeed, MotionParams, MoveBuffers, MoveError, MovementScheduler, ProbeLayout, SpeedSource};

// ── Helpers ───────────────────────────────────────────────────────────────────

const MASK: LayerMask = LayerMask(1);

fn params(speed: f32, stop: f32, flee: f32) -> MotionParams {
    MotionParams { speed, stop_distance: stop, flee_distance: flee }
}

fn scheduler() -> MovementScheduler<SerialCaster> {
    MovementScheduler::new(SerialCaster, ProbeLayout::default(), SteerTuning::default(), 16)
}

struct World {
    registry: AgentRegistry,
    buffers: MoveBuffers,
    scheduler: MovementScheduler<SerialCaster>,
    field: ObstacleField,
}

impl World {
    fn empty() -> Self {
        Self {
            registry: AgentRegistry::new(16),
            buffers: MoveBuffers::with_capacity(16),
            scheduler: scheduler(),
            field: ObstacleField::empty(),
        }
    }

    fn spawn(&mut self, id: u32, at: Vec3, p: MotionParams) {
        assert!(self.registry.register(
            AgentId(id),
            ColliderId(id as u64),
            at,
            Vec3::FORWARD,
            &mut self.buffers,
            p,
        ));
    }

    fn tick(&mut self, reference: Vec3, dt: f32) -> usize {
        self.scheduler
            .tick(
                &mut self.registry,
                &mut self.buffers,
                &self.field,
                MASK,
                reference,
                dt,
                &BaseSpeed,
            )
            .unwrap()
    }
}

// ── Buffer columns ────────────────────────────────────────────────────────────

#[cfg(test)]
mod buffers {
    use super::*;

    #[test]
    fn fresh_rows_start_with_zero_prev_dir() {
        let mut b = MoveBuffers::with_capacity(4);
        b.push(params(2.0, 1.0, 0.0));
        assert_eq!(b.prev_dirs()[0], Vec3::ZERO);
        assert_eq!(b.speeds()[0], 2.0);
        assert_eq!(b.stop_distances()[0], 1.0);
        assert_eq!(b.flee_distances()[0], 0.0);
    }

    #[test]
    fn swap_remove_mirrors_across_all_columns() {
        let mut b = MoveBuffers::with_capacity(4);
        b.push(params(1.0, 1.0, 1.0));
        b.push(params(2.0, 2.0, 2.0));
        b.push(params(3.0, 3.0, 3.0));
        b.swap_remove(0, 2);
        assert_eq!(b.len(), 2);
        assert_eq!(b.speeds(), &[3.0, 2.0]);
        assert_eq!(b.stop_distances(), &[3.0, 2.0]);
        assert_eq!(b.flee_distances(), &[3.0, 2.0]);
    }

    #[test]
    fn removing_tail_row_needs_no_swap() {
        let mut b = MoveBuffers::with_capacity(4);
        b.push(params(1.0, 0.0, 0.0));
        b.push(params(2.0, 0.0, 0.0));
        b.swap_remove(1, 1);
        assert_eq!(b.speeds(), &[1.0]);
    }
}

// ── Tick behavior ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod ticking {
    use super::*;

    #[test]
    fn empty_registry_moves_nothing() {
        let mut w = World::empty();
        assert_eq!(w.tick(Vec3::ZERO, 0.1), 0);
    }

    #[test]
    fn seeker_closes_on_reference() {
        let mut w = World::empty();
        w.spawn(0, Vec3::ZERO, params(2.0, 0.0, 0.0));
        let moved = w.tick(Vec3::new(0.0, 0.0, 10.0), 0.1);
        assert_eq!(moved, 1);
        let pos = w.registry.positions()[0];
        assert!((pos.z - 0.2).abs() < 1e-4, "expected z ≈ 0.2, got {pos}");
        assert_eq!(pos.x, 0.0);
        // Smoothed direction carried for next tick.
        assert_eq!(w.buffers.prev_dirs()[0], Vec3::FORWARD);
    }

    #[test]
    fn holder_stops_inside_stop_distance() {
        let mut w = World::empty();
        w.spawn(0, Vec3::ZERO, params(2.0, 2.0, 0.0));
        w.tick(Vec3::new(0.0, 0.0, 1.0), 0.1);
        assert_eq!(w.registry.positions()[0], Vec3::ZERO);
    }

    #[test]
    fn fleer_retreats_from_reference() {
        let mut w = World::empty();
        w.spawn(0, Vec3::ZERO, params(2.0, 2.0, 5.0));
        w.tick(Vec3::new(0.0, 0.0, 3.0), 0.1);
        assert!(w.registry.positions()[0].z < 0.0);
    }

    #[test]
    fn repeated_ticks_converge_then_hold() {
        let mut w = World::empty();
        w.spawn(0, Vec3::ZERO, params(4.0, 1.5, 0.0));
        let reference = Vec3::new(0.0, 0.0, 6.0);
        for _ in 0..200 {
            w.tick(reference, 0.05);
        }
        let dist = w.registry.positions()[0].distance(reference);
        // Settled at the hold boundary, never pushed past it.
        assert!(dist <= 1.6, "agent should hold near 1.5 out, is {dist} away");
        assert!(dist >= 1.2);
    }

    #[test]
    fn center_obstacle_forces_lateral_deviation() {
        let mut w = World::empty();
        let mut b = ObstacleFieldBuilder::new();
        // Sphere dead ahead at chest height, inside probe range.
        b.add(Vec3::new(0.0, 1.0, 2.0), 0.5, MASK);
        w.field = b.build();
        w.spawn(0, Vec3::ZERO, params(2.0, 0.0, 0.0));
        w.tick(Vec3::new(0.0, 0.0, 10.0), 0.1);
        let pos = w.registry.positions()[0];
        // Even handle swerves toward +X.
        assert!(pos.x > 0.0, "expected lateral deviation, got {pos}");
        assert!(pos.z > 0.0);
    }

    #[test]
    fn obstacle_on_other_mask_is_ignored() {
        let mut w = World::empty();
        let mut b = ObstacleFieldBuilder::new();
        b.add(Vec3::new(0.0, 1.0, 2.0), 0.5, LayerMask(0b100));
        w.field = b.build();
        w.spawn(0, Vec3::ZERO, params(2.0, 0.0, 0.0));
        w.tick(Vec3::new(0.0, 0.0, 10.0), 0.1);
        assert_eq!(w.registry.positions()[0].x, 0.0);
    }
}

// ── Speed refresh ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod speeds {
    use super::*;

    /// Halves every agent's base speed — a stand-in for an external slow.
    struct Slowed;
    impl SpeedSource for Slowed {
        fn live_speed(&self, _agent: AgentId, base_speed: f32) -> f32 {
            base_speed * 0.5
        }
    }

    #[test]
    fn live_speed_derives_from_base_without_compounding() {
        let mut w = World::empty();
        w.spawn(0, Vec3::ZERO, params(2.0, 0.0, 0.0));
        let reference = Vec3::new(0.0, 0.0, 100.0);
        for _ in 0..2 {
            w.scheduler
                .tick(&mut w.registry, &mut w.buffers, &w.field, MASK, reference, 0.1, &Slowed)
                .unwrap();
        }
        // Two ticks at half of base (1.0 u/s × 0.1 s each).  A compounding
        // refresh would travel 0.15 instead.
        let z = w.registry.positions()[0].z;
        assert!((z - 0.2).abs() < 1e-4, "expected z ≈ 0.2, got {z}");
    }
}

// ── Scratch sizing and misuse ─────────────────────────────────────────────────

#[cfg(test)]
mod scratch {
    use super::*;

    #[test]
    fn probe_slots_track_active_count_changes_only() {
        let mut w = World::empty();
        for i in 0..4 {
            w.spawn(i, Vec3::new(i as f32, 0.0, 0.0), params(1.0, 0.0, 0.0));
        }
        w.tick(Vec3::ZERO, 0.016);
        assert_eq!(w.scheduler.probe_slots(), 12);
        w.tick(Vec3::ZERO, 0.016);
        assert_eq!(w.scheduler.probe_slots(), 12);

        w.registry.unregister(AgentId(2), ColliderId(2), &mut w.buffers);
        w.tick(Vec3::ZERO, 0.016);
        assert_eq!(w.scheduler.probe_slots(), 9);
    }

    #[test]
    fn column_mismatch_is_rejected_before_dispatch() {
        let mut w = World::empty();
        w.spawn(0, Vec3::ZERO, params(1.0, 0.0, 0.0));
        // Push a row behind the registry's back — structural misuse.
        w.buffers.push(params(1.0, 0.0, 0.0));
        let err = w
            .scheduler
            .tick(&mut w.registry, &mut w.buffers, &w.field, MASK, Vec3::ZERO, 0.1, &BaseSpeed)
            .unwrap_err();
        assert!(matches!(err, MoveError::ColumnsOutOfSync { registry: 1, columns: 2 }));
    }
}
