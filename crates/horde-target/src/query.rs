//! Target-selection queries.

use horde_core::{AgentId, SimRng, Vec3};
use horde_sense::{LayerMask, ObstacleField, line_of_sight};

use crate::TargetView;

/// Any agent this close is an immediate threat: `densest_cluster` returns the
/// nearest such agent before doing any cluster counting, so a point-blank
/// attacker is never ignored in favor of a distant crowd.
pub const PANIC_RADIUS: f32 = 4.0;

/// Height above the source position that visibility rays originate from.
const EYE_HEIGHT: f32 = 1.6;
/// Height above a candidate's position that visibility rays aim at.
const CHEST_HEIGHT: f32 = 1.0;

/// Target-selection queries over one post-tick snapshot.
///
/// Bundles the snapshot with the obstacle field and mask used for visibility
/// gating so call sites pass only the parameters that vary per query.
#[derive(Copy, Clone)]
pub struct Targeting<'a> {
    view: TargetView<'a>,
    field: &'a ObstacleField,
    mask: LayerMask,
}

impl<'a> Targeting<'a> {
    pub fn new(view: TargetView<'a>, field: &'a ObstacleField, mask: LayerMask) -> Self {
        Self { view, field, mask }
    }

    /// The closest agent within `max_range` of `source`.
    ///
    /// With `require_visibility`, candidates occluded by the obstacle field
    /// (one ray, eye height to chest height) are rejected.  O(n) scan.
    pub fn nearest(&self, source: Vec3, max_range: f32, require_visibility: bool) -> Option<AgentId> {
        let range_sq = max_range * max_range;
        let mut best: Option<(AgentId, f32)> = None;
        for (handle, pos) in self.view.iter() {
            let d2 = pos.distance_sq(source);
            if d2 > range_sq {
                continue;
            }
            if best.is_some_and(|(_, best_d2)| d2 >= best_d2) {
                continue;
            }
            if require_visibility && !self.visible(source, pos) {
                continue;
            }
            best = Some((handle, d2));
        }
        best.map(|(handle, _)| handle)
    }

    /// The agent sitting in the thickest crowd within `range` of `source`.
    ///
    /// Panic override first: if any in-range (and visible, when gated) agent
    /// is within [`PANIC_RADIUS`], the nearest such agent wins outright.
    /// Otherwise each candidate's neighbors within `cluster_radius` are
    /// counted over the filtered set — O(n²), acceptable because the registry
    /// is capacity-bounded — with ties broken by scan order.  Falls back to
    /// [`nearest`](Self::nearest) when no candidate qualifies.
    pub fn densest_cluster(
        &self,
        source: Vec3,
        range: f32,
        cluster_radius: f32,
        require_visibility: bool,
    ) -> Option<AgentId> {
        let range_sq = range * range;

        // In-range (and visible, if gated) candidates, in scan order.
        let candidates: Vec<(AgentId, Vec3, f32)> = self
            .view
            .iter()
            .filter_map(|(handle, pos)| {
                let d2 = pos.distance_sq(source);
                if d2 > range_sq {
                    return None;
                }
                if require_visibility && !self.visible(source, pos) {
                    return None;
                }
                Some((handle, pos, d2))
            })
            .collect();

        // ── Panic override ────────────────────────────────────────────────
        let panic_sq = PANIC_RADIUS * PANIC_RADIUS;
        if let Some(&(handle, _, _)) = candidates
            .iter()
            .filter(|(_, _, d2)| *d2 <= panic_sq)
            .min_by(|a, b| a.2.total_cmp(&b.2))
        {
            return Some(handle);
        }

        // ── Density scan ──────────────────────────────────────────────────
        let cluster_sq = cluster_radius * cluster_radius;
        let mut best: Option<(AgentId, usize)> = None;
        for &(handle, pos, _) in &candidates {
            let neighbors = candidates
                .iter()
                .filter(|(other, other_pos, _)| *other != handle && other_pos.distance_sq(pos) <= cluster_sq)
                .count();
            // Strict greater-than keeps the first-scanned candidate on ties.
            if best.is_none_or(|(_, best_n)| neighbors > best_n) {
                best = Some((handle, neighbors));
            }
        }
        match best {
            Some((handle, _)) => Some(handle),
            None => self.nearest(source, range, require_visibility),
        }
    }

    /// A uniformly random qualifying agent within `range`, or `None`.
    pub fn random(
        &self,
        source: Vec3,
        range: f32,
        require_visibility: bool,
        rng: &mut SimRng,
    ) -> Option<AgentId> {
        let range_sq = range * range;
        let qualifying: Vec<AgentId> = self
            .view
            .iter()
            .filter(|(_, pos)| pos.distance_sq(source) <= range_sq)
            .filter(|(_, pos)| !require_visibility || self.visible(source, *pos))
            .map(|(handle, _)| handle)
            .collect();
        rng.choose(&qualifying).copied()
    }

    /// One ray from `source` at eye height to `target` at chest height,
    /// filtered by the query mask.
    pub fn visible(&self, source: Vec3, target: Vec3) -> bool {
        line_of_sight(
            self.field,
            source + Vec3::UP * EYE_HEIGHT,
            target + Vec3::UP * CHEST_HEIGHT,
            self.mask,
        )
    }
}
