//! Unit tests for horde-registry.

use horde_core::{AgentId, ColliderId, SimRng, Vec3};

use crate::columns::NoColumns;
use crate::{AgentColumns, AgentRegistry};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// One-column test implementation that records each agent's tag value, so
/// swap-removal mirroring can be checked row by row.
#[derive(Default)]
struct TagColumn {
    tags: Vec<u32>,
}

impl AgentColumns for TagColumn {
    type Entry = u32;

    fn push(&mut self, entry: u32) {
        self.tags.push(entry);
    }

    fn swap_remove(&mut self, index: usize, last: usize) {
        if index != last {
            self.tags.swap(index, last);
        }
        self.tags.pop();
    }

    fn clear(&mut self) {
        self.tags.clear();
    }

    fn len(&self) -> usize {
        self.tags.len()
    }
}

fn agent(i: u32) -> (AgentId, ColliderId) {
    (AgentId(i), ColliderId(1_000 + i as u64))
}

fn pos(i: u32) -> Vec3 {
    Vec3::new(i as f32, 0.0, -(i as f32))
}

/// Register agents 0..n with tag = handle id.
fn filled(n: u32, capacity: usize) -> (AgentRegistry, TagColumn) {
    let mut reg = AgentRegistry::new(capacity);
    let mut col = TagColumn::default();
    for i in 0..n {
        let (h, c) = agent(i);
        assert!(reg.register(h, c, pos(i), Vec3::FORWARD, &mut col, i));
    }
    (reg, col)
}

// ── Registration and lookup ───────────────────────────────────────────────────

#[cfg(test)]
mod registration {
    use super::*;

    #[test]
    fn count_tracks_register_unregister() {
        let (mut reg, mut col) = filled(5, 16);
        assert_eq!(reg.len(), 5);
        let (h, c) = agent(2);
        assert!(reg.unregister(h, c, &mut col));
        assert_eq!(reg.len(), 4);
        assert_eq!(col.len(), 4);
    }

    #[test]
    fn every_active_handle_reachable_by_collider() {
        let (reg, _) = filled(8, 16);
        for i in 0..8 {
            let (h, c) = agent(i);
            assert_eq!(reg.lookup_collider(c), Some(h));
        }
    }

    #[test]
    fn double_register_rejected_without_mutation() {
        let (mut reg, mut col) = filled(3, 16);
        let (h, _) = agent(1);
        assert!(!reg.register(h, ColliderId(9_999), pos(9), Vec3::FORWARD, &mut col, 99));
        assert_eq!(reg.len(), 3);
        assert_eq!(reg.lookup_collider(ColliderId(9_999)), None);
    }

    #[test]
    fn unregister_unknown_is_defensive_noop() {
        let (mut reg, mut col) = filled(2, 16);
        let (h, c) = agent(7);
        assert!(!reg.unregister(h, c, &mut col));
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn unregistered_collider_lookup_is_none() {
        let (mut reg, mut col) = filled(2, 16);
        let (h, c) = agent(0);
        reg.unregister(h, c, &mut col);
        assert_eq!(reg.lookup_collider(c), None);
        // The surviving agent is unaffected.
        let (h1, c1) = agent(1);
        assert_eq!(reg.lookup_collider(c1), Some(h1));
    }

    #[test]
    fn facing_is_flattened_and_normalized() {
        let mut reg = AgentRegistry::new(4);
        let mut col = NoColumns::default();
        let (h, c) = agent(0);
        reg.register(h, c, Vec3::ZERO, Vec3::new(0.0, 3.0, 4.0), &mut col, ());
        let facing = reg.facings()[0];
        assert_eq!(facing.y, 0.0);
        assert!((facing.length() - 1.0).abs() < 1e-4);
        // A vertical-only facing collapses to the default forward.
        let (h2, c2) = agent(1);
        reg.register(h2, c2, Vec3::ZERO, Vec3::UP, &mut col, ());
        assert_eq!(reg.facings()[1], Vec3::FORWARD);
    }
}

// ── Capacity and eviction ─────────────────────────────────────────────────────

#[cfg(test)]
mod capacity {
    use super::*;

    #[test]
    fn register_at_capacity_fails_without_mutation() {
        let (mut reg, mut col) = filled(4, 4);
        let (h, c) = agent(99);
        assert!(reg.is_at_capacity());
        assert!(!reg.register(h, c, pos(99), Vec3::FORWARD, &mut col, 99));
        assert_eq!(reg.len(), 4);
        assert_eq!(col.len(), 4);
        assert_eq!(reg.lookup_collider(c), None);
    }

    #[test]
    fn evict_farthest_removes_true_maximum() {
        let (mut reg, mut col) = filled(5, 8);
        // Agent 4 sits at distance sqrt(32) ≈ 5.66 from the origin reference.
        let evicted = reg.evict_farthest(5.0, Vec3::ZERO, &mut col);
        assert_eq!(evicted, Some(AgentId(4)));
        assert_eq!(reg.len(), 4);
        assert_eq!(reg.lookup_collider(agent(4).1), None);
    }

    #[test]
    fn evict_below_threshold_changes_nothing() {
        let (mut reg, mut col) = filled(5, 8);
        assert_eq!(reg.evict_farthest(100.0, Vec3::ZERO, &mut col), None);
        assert_eq!(reg.len(), 5);
        assert_eq!(col.len(), 5);
    }

    #[test]
    fn evict_empty_registry_is_none() {
        let mut reg = AgentRegistry::new(4);
        let mut col = NoColumns::default();
        assert_eq!(reg.evict_farthest(0.0, Vec3::ZERO, &mut col), None);
    }

    #[test]
    fn evict_then_register_succeeds() {
        let (mut reg, mut col) = filled(4, 4);
        assert!(reg.evict_farthest(1.0, Vec3::ZERO, &mut col).is_some());
        let (h, c) = agent(50);
        assert!(reg.register(h, c, pos(50), Vec3::FORWARD, &mut col, 50));
        assert_eq!(reg.len(), 4);
    }
}

// ── Swap-removal consistency ──────────────────────────────────────────────────

#[cfg(test)]
mod swap_removal {
    use super::*;

    #[test]
    fn last_row_moves_into_vacated_slot() {
        let (mut reg, mut col) = filled(5, 8);
        let (h1, c1) = agent(1);
        reg.unregister(h1, c1, &mut col);

        // Agent 4 (formerly last) now occupies row 1 in every column.
        assert_eq!(reg.row_of(AgentId(4)), Some(1));
        assert_eq!(reg.handles()[1], AgentId(4));
        assert_eq!(reg.positions()[1], pos(4));
        assert_eq!(col.tags[1], 4);
    }

    #[test]
    fn removing_last_row_needs_no_swap() {
        let (mut reg, mut col) = filled(3, 8);
        let (h, c) = agent(2);
        reg.unregister(h, c, &mut col);
        assert_eq!(reg.handles(), &[AgentId(0), AgentId(1)]);
        assert_eq!(col.tags, vec![0, 1]);
    }

    /// Randomized register/unregister churn: after every operation, each
    /// handle's row must carry its own tag and position in every column.
    #[test]
    fn randomized_churn_preserves_alignment() {
        let mut rng = SimRng::new(0xC0FFEE);
        let mut reg = AgentRegistry::new(64);
        let mut col = TagColumn::default();
        let mut next_id = 0u32;
        let mut live: Vec<(AgentId, ColliderId)> = Vec::new();

        for _ in 0..500 {
            let remove = !live.is_empty() && (reg.is_at_capacity() || rng.gen_bool(0.45));
            if remove {
                let pick = rng.gen_range(0..live.len());
                let (h, c) = live.swap_remove(pick);
                assert!(reg.unregister(h, c, &mut col));
            } else {
                let (h, c) = agent(next_id);
                assert!(reg.register(h, c, pos(next_id), Vec3::FORWARD, &mut col, next_id));
                live.push((h, c));
                next_id += 1;
            }

            // Full-table audit.
            assert_eq!(reg.len(), live.len());
            assert_eq!(col.len(), live.len());
            for &(h, c) in &live {
                let row = reg.row_of(h).expect("live handle must have a row");
                assert_eq!(reg.handles()[row], h);
                assert_eq!(reg.positions()[row], pos(h.0));
                assert_eq!(col.tags[row], h.0);
                assert_eq!(reg.lookup_collider(c), Some(h));
            }
        }
    }
}

// ── Scans ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scans {
    use super::*;

    #[test]
    fn radius_query_filters_by_squared_distance() {
        let mut reg = AgentRegistry::new(8);
        let mut col = NoColumns::default();
        let coords = [0.0_f32, 1.5, 3.0, 10.0];
        for (i, &x) in coords.iter().enumerate() {
            let (h, c) = agent(i as u32);
            reg.register(h, c, Vec3::new(x, 0.0, 0.0), Vec3::FORWARD, &mut col, ());
        }
        let hits = reg.query_in_radius(Vec3::ZERO, 3.0);
        assert_eq!(hits, vec![AgentId(0), AgentId(1), AgentId(2)]);
    }

    #[test]
    fn radius_query_skips_non_finite_rows() {
        let mut reg = AgentRegistry::new(8);
        let mut col = NoColumns::default();
        let (h0, c0) = agent(0);
        let (h1, c1) = agent(1);
        reg.register(h0, c0, Vec3::new(f32::NAN, 0.0, 0.0), Vec3::FORWARD, &mut col, ());
        reg.register(h1, c1, Vec3::ZERO, Vec3::FORWARD, &mut col, ());
        assert_eq!(reg.query_in_radius(Vec3::ZERO, 5.0), vec![AgentId(1)]);
    }

    #[test]
    fn clear_empties_everything() {
        let (mut reg, mut col) = filled(6, 8);
        reg.clear(&mut col);
        assert!(reg.is_empty());
        assert!(col.tags.is_empty());
        assert_eq!(reg.lookup_collider(agent(0).1), None);
        assert!(!reg.is_at_capacity());
    }
}
