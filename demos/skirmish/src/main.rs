//! skirmish — smallest runnable example for the rust_horde movement core.
//!
//! Spawns a ring of hostiles around a slowly orbiting reference target inside
//! a small obstacle course, runs a few seconds of simulated combat at 60 Hz
//! with continuous spawn pressure against a tight capacity, and prints what
//! the targeting queries see along the way.

use std::time::Instant;

use anyhow::Result;

use horde_core::{AgentId, ColliderId, SimRng, SwarmConfig, Tick, Vec3};
use horde_move::MotionParams;
use horde_sense::{LayerMask, ObstacleFieldBuilder, RayonCaster};
use horde_sim::{FixedReference, SwarmBuilder, SwarmObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const CAPACITY: usize = 64;
const SEED: u64 = 42;
const DT: f32 = 1.0 / 60.0;
const SIM_SECONDS: f32 = 10.0;
const SPAWN_RING_RADIUS: f32 = 25.0;
const WALL_MASK: LayerMask = LayerMask(0b1);

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct SkirmishLog {
    ticks: usize,
    moved_total: usize,
    evictions: usize,
}

impl SwarmObserver for SkirmishLog {
    fn on_tick_end(&mut self, _tick: Tick, moved: usize) {
        self.ticks += 1;
        self.moved_total += moved;
    }

    fn on_evict(&mut self, tick: Tick, agent: AgentId) {
        self.evictions += 1;
        if self.evictions <= 3 {
            println!("  {tick}: evicted {agent} to make room");
        }
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    // A courtyard: four pillars around the middle and one long wall.
    let mut course = ObstacleFieldBuilder::new();
    for (x, z) in [(6.0, 6.0), (-6.0, 6.0), (6.0, -6.0), (-6.0, -6.0)] {
        course.add(Vec3::new(x, 1.0, z), 1.5, WALL_MASK);
    }
    course.add(Vec3::new(0.0, 1.0, 12.0), 3.0, WALL_MASK);

    let mut swarm = SwarmBuilder::new(
        SwarmConfig::new(CAPACITY, SEED),
        FixedReference(Vec3::ZERO),
        RayonCaster,
    )
    .obstacles(course.build())
    .obstacle_mask(WALL_MASK)
    .build()?;

    // Seed the ring.  A third of the population holds at range (archers), a
    // few are skittish (flee radius), the rest charge.
    let mut rng = SimRng::new(SEED);
    let mut next_id = 0u32;
    let mut spawn = |swarm: &mut horde_sim::Swarm<_, _>, rng: &mut SimRng, id: u32| {
        let angle: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
        let at = Vec3::new(angle.cos(), 0.0, angle.sin()) * SPAWN_RING_RADIUS;
        let params = match id % 6 {
            0 | 1 => MotionParams { speed: 4.5, stop_distance: 8.0, flee_distance: 0.0 },
            2 => MotionParams { speed: 6.0, stop_distance: 0.0, flee_distance: 5.0 },
            _ => MotionParams { speed: 5.0, stop_distance: 1.5, flee_distance: 0.0 },
        };
        swarm.register_agent(AgentId(id), ColliderId(id as u64), at, -at, params)
    };
    for _ in 0..CAPACITY {
        spawn(&mut swarm, &mut rng, next_id);
        next_id += 1;
    }

    let mut log = SkirmishLog::default();
    let started = Instant::now();
    let total_ticks = (SIM_SECONDS / DT) as usize;

    println!(
        "skirmish: {} hostiles, {} obstacle volumes, {total_ticks} ticks at {:.0} Hz",
        swarm.active_count(),
        5,
        1.0 / DT,
    );

    for tick in 0..total_ticks {
        // The reference target circles the courtyard.
        let t = tick as f32 * DT * 0.4;
        swarm.reference_mut().0 = Vec3::new(t.cos() * 6.0, 0.0, t.sin() * 6.0);

        swarm.tick(DT, &mut log)?;

        // Relentless spawn pressure: one new hostile per quarter second,
        // evicting the farthest straggler whenever the ring is full.
        if tick % 15 == 0 {
            if swarm.is_at_capacity() {
                swarm.evict_farthest(12.0, &mut log);
            }
            if !swarm.is_at_capacity() {
                spawn(&mut swarm, &mut rng, next_id);
                next_id += 1;
            }
        }

        // Periodic targeting readout, the way a turret or player would ask.
        if tick % 120 == 0 {
            let eye = swarm.reference().0;
            let nearest = swarm.nearest_target(eye, 40.0, true);
            let densest = swarm.densest_target(eye, 40.0, 4.0, true);
            let random = swarm.random_target(eye, 40.0, false);
            println!(
                "  {}: pop {:2}  nearest {:?}  densest {:?}  random {:?}",
                swarm.clock().current_tick,
                swarm.active_count(),
                nearest,
                densest,
                random,
            );
        }
    }

    let elapsed = started.elapsed();
    println!(
        "done: {} ticks, {} agent-moves, {} evictions in {:.1} ms ({:.2} µs/agent-move)",
        log.ticks,
        log.moved_total,
        log.evictions,
        elapsed.as_secs_f64() * 1e3,
        elapsed.as_secs_f64() * 1e6 / log.moved_total.max(1) as f64,
    );

    Ok(())
}
