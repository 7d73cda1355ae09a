//! One tick of steering for one agent.

use horde_core::{AgentId, Vec3};

use crate::SteerTuning;

/// Everything one steering invocation reads.
///
/// All fields are plain values: the scheduler assembles one of these per
/// agent from shared read-only state and that agent's own probe results.
#[derive(Copy, Clone, Debug)]
pub struct SteerInput {
    /// The agent's handle.  Only its parity is used (swerve-side selection) —
    /// handles are stable for an agent's lifetime, so the chosen side never
    /// flips when unrelated agents despawn.
    pub handle: AgentId,
    pub position: Vec3,
    /// Current facing (unit, movement-plane).
    pub facing: Vec3,
    /// The reference target's position this tick.
    pub reference: Vec3,
    /// Live speed in units per second.
    pub speed: f32,
    /// Hold when closer than this to the reference; `<= 0` disables holding.
    pub stop_distance: f32,
    /// Flee when closer than this to the reference; `<= 0` disables fleeing.
    pub flee_distance: f32,
    /// Probe hits: straight ahead, left, right.
    pub hit_center: bool,
    pub hit_left: bool,
    pub hit_right: bool,
    /// Smoothed direction carried over from the previous tick; zero on the
    /// agent's first tick.
    pub prev_dir: Vec3,
    /// Seconds advanced this tick.
    pub dt: f32,
}

/// Everything one steering invocation writes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SteerOutput {
    pub position: Vec3,
    pub facing: Vec3,
    /// Smoothed direction to carry into the next tick.
    pub next_dir: Vec3,
}

/// Behavior selected by the priority rule.  Flee outranks hold outranks seek.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Mode {
    Flee,
    Hold,
    Seek,
}

/// Compute one tick's movement for one agent.
///
/// Pure: identical inputs produce identical outputs on every call.
pub fn steer(input: &SteerInput, tuning: &SteerTuning) -> SteerOutput {
    let to_ref_raw = (input.reference - input.position).flattened();
    let planar_dist = to_ref_raw.length();
    let to_ref = to_ref_raw.normalized_or(input.prev_dir);

    // ── Behavior priority: flee > hold > seek ─────────────────────────────
    let mode = if input.flee_distance > 0.0 && planar_dist < input.flee_distance {
        Mode::Flee
    } else if input.stop_distance > 0.0 && planar_dist < input.stop_distance {
        Mode::Hold
    } else {
        Mode::Seek
    };

    let (mut desired, speed_mult) = match mode {
        Mode::Flee => (-to_ref, 1.0),
        Mode::Hold => (Vec3::ZERO, 0.0),
        Mode::Seek => (to_ref, 1.0),
    };

    // ── Obstacle avoidance ────────────────────────────────────────────────
    let any_hit = input.hit_center || input.hit_left || input.hit_right;
    if speed_mult > 0.0 && any_hit {
        let right = Vec3::UP.cross(desired);
        let mut nudge = Vec3::ZERO;
        if input.hit_left {
            nudge += right;
        }
        if input.hit_right {
            nudge += -right;
        }
        if nudge.is_near_zero() && input.hit_center {
            // Only the center probe is blocked (or both sides cancelled):
            // pick a side by handle parity so neighbouring agents split
            // around the obstacle instead of all swerving the same way.
            nudge = if input.handle.0 % 2 == 0 { right } else { -right };
        }
        desired = (desired + nudge * tuning.avoidance_weight).normalized_or(desired);
    }

    // ── Temporal smoothing ────────────────────────────────────────────────
    let final_dir = if input.prev_dir.is_near_zero() {
        desired
    } else {
        let t = (tuning.blend_rate * input.dt).clamp(0.0, 1.0);
        input.prev_dir.lerp(desired, t).normalized_or(input.prev_dir)
    };

    // ── Integrate ─────────────────────────────────────────────────────────
    let position = input.position + final_dir * (input.speed * speed_mult * input.dt);
    let facing = if final_dir.is_near_zero() {
        // Holding with no motion history: keep the current facing rather
        // than spinning toward a meaningless direction.
        input.facing
    } else {
        input
            .facing
            .rotate_toward(final_dir, tuning.turn_rate * input.dt)
    };

    SteerOutput { position, facing, next_dir: final_dir }
}
