//! The `AgentRegistry` — dense handle set, transform columns, collider map.

use rustc_hash::FxHashMap;

use horde_core::{AgentId, ColliderId, Vec3};

use crate::AgentColumns;

/// Capacity-bounded registry of active agents.
///
/// Storage is a structure of arrays: `handles`, `colliders`, `positions`, and
/// `facings` all share row indices, and delegated [`AgentColumns`] add more
/// columns at the same indices.  Two FxHashMaps (integer keys, hot paths)
/// provide O(1) handle→row and collider→handle lookup.
///
/// Removal is swap-with-last: the tail row moves into the vacated index across
/// every column and the maps are patched, so removal never leaves gaps and
/// costs O(1) amortized.
pub struct AgentRegistry {
    capacity: usize,

    // ── Row-aligned columns ───────────────────────────────────────────────
    handles: Vec<AgentId>,
    colliders: Vec<ColliderId>,
    positions: Vec<Vec3>,
    facings: Vec<Vec3>,

    // ── Lookup maps ───────────────────────────────────────────────────────
    /// Handle → current row index.  Patched on every swap-removal.
    index_of: FxHashMap<AgentId, u32>,
    /// Collider identity → handle.  Exactly one entry per active agent.
    by_collider: FxHashMap<ColliderId, AgentId>,
}

impl AgentRegistry {
    /// Create a registry with a fixed population ceiling.  Every column is
    /// allocated to `capacity` once; nothing here reallocates afterwards.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            handles: Vec::with_capacity(capacity),
            colliders: Vec::with_capacity(capacity),
            positions: Vec::with_capacity(capacity),
            facings: Vec::with_capacity(capacity),
            index_of: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            by_collider: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    // ── Registration / removal ────────────────────────────────────────────

    /// Register `handle` with its collider identity and initial transform,
    /// pushing `entry` into the delegated columns in the same call.
    ///
    /// Returns `false` — with no mutation anywhere — when the registry is at
    /// capacity or the handle is already registered.
    pub fn register<C: AgentColumns>(
        &mut self,
        handle: AgentId,
        collider: ColliderId,
        position: Vec3,
        facing: Vec3,
        columns: &mut C,
        entry: C::Entry,
    ) -> bool {
        if self.handles.len() >= self.capacity || self.index_of.contains_key(&handle) {
            return false;
        }
        debug_assert_eq!(columns.len(), self.handles.len(), "columns out of sync");

        let row = self.handles.len() as u32;
        self.handles.push(handle);
        self.colliders.push(collider);
        self.positions.push(position);
        self.facings.push(facing.flattened().normalized_or(Vec3::FORWARD));
        self.index_of.insert(handle, row);
        self.by_collider.insert(collider, handle);
        columns.push(entry);
        true
    }

    /// Unregister `handle`, swap-removing its row from every column.
    ///
    /// The collider mapping is removed for the departing identity only — the
    /// moved tail agent keeps its own entry untouched.  Unknown handles are
    /// ignored defensively and return `false`.
    pub fn unregister<C: AgentColumns>(
        &mut self,
        handle: AgentId,
        collider: ColliderId,
        columns: &mut C,
    ) -> bool {
        let Some(row) = self.index_of.remove(&handle) else {
            return false;
        };
        let row = row as usize;
        let last = self.handles.len() - 1;
        let departing = self.colliders[row];
        debug_assert_eq!(departing, collider, "collider identity mismatch on unregister");

        if row != last {
            let moved = self.handles[last];
            self.handles.swap(row, last);
            self.colliders.swap(row, last);
            self.positions.swap(row, last);
            self.facings.swap(row, last);
            self.index_of.insert(moved, row as u32);
        }
        self.handles.pop();
        self.colliders.pop();
        self.positions.pop();
        self.facings.pop();
        columns.swap_remove(row, last);

        if self.by_collider.get(&departing) == Some(&handle) {
            self.by_collider.remove(&departing);
        }
        true
    }

    /// Remove the agent farthest from `reference` if that distance exceeds
    /// `min_distance`, returning its handle.
    ///
    /// This is the backpressure release valve for callers stuck at capacity.
    /// Bookkeeping-wise it is a plain unregistration; it is "silent" in that
    /// nothing here runs death or despawn behavior — reporting the eviction
    /// is the orchestrator's business.
    pub fn evict_farthest<C: AgentColumns>(
        &mut self,
        min_distance: f32,
        reference: Vec3,
        columns: &mut C,
    ) -> Option<AgentId> {
        let mut best: Option<(usize, f32)> = None;
        for (row, pos) in self.positions.iter().enumerate() {
            if !pos.is_finite() {
                continue;
            }
            let d2 = pos.distance_sq(reference);
            if best.is_none_or(|(_, best_d2)| d2 > best_d2) {
                best = Some((row, d2));
            }
        }
        let (row, d2) = best?;
        if d2 <= min_distance * min_distance {
            return None;
        }
        let handle = self.handles[row];
        let collider = self.colliders[row];
        self.unregister(handle, collider, columns);
        Some(handle)
    }

    /// Empty every column and both maps.
    pub fn clear<C: AgentColumns>(&mut self, columns: &mut C) {
        self.handles.clear();
        self.colliders.clear();
        self.positions.clear();
        self.facings.clear();
        self.index_of.clear();
        self.by_collider.clear();
        columns.clear();
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// O(1) reverse lookup from a collider identity.
    #[inline]
    pub fn lookup_collider(&self, collider: ColliderId) -> Option<AgentId> {
        self.by_collider.get(&collider).copied()
    }

    /// Current row of `handle`, if registered.
    #[inline]
    pub fn row_of(&self, handle: AgentId) -> Option<usize> {
        self.index_of.get(&handle).map(|&i| i as usize)
    }

    /// Position of `handle`, if registered.
    #[inline]
    pub fn position_of(&self, handle: AgentId) -> Option<Vec3> {
        self.row_of(handle).map(|row| self.positions[row])
    }

    // ── Scans ─────────────────────────────────────────────────────────────

    /// All agents within `radius` of `center`.  O(n) squared-distance scan;
    /// rows with non-finite positions are skipped defensively.
    pub fn query_in_radius(&self, center: Vec3, radius: f32) -> Vec<AgentId> {
        let r2 = radius * radius;
        self.positions
            .iter()
            .zip(&self.handles)
            .filter(|(pos, _)| pos.is_finite() && pos.distance_sq(center) <= r2)
            .map(|(_, &handle)| handle)
            .collect()
    }

    // ── Transform commit ──────────────────────────────────────────────────

    /// Write back one agent's post-steering transform.  The only position or
    /// facing write path after registration; never changes row count or order.
    #[inline]
    pub fn commit_move(&mut self, row: usize, position: Vec3, facing: Vec3) {
        self.positions[row] = position;
        self.facings[row] = facing;
    }

    // ── Dimensions and views ──────────────────────────────────────────────

    #[inline]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_at_capacity(&self) -> bool {
        self.handles.len() >= self.capacity
    }

    /// Dense handle list, row-aligned with every other column.
    #[inline]
    pub fn handles(&self) -> &[AgentId] {
        &self.handles
    }

    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[inline]
    pub fn facings(&self) -> &[Vec3] {
        &self.facings
    }
}
