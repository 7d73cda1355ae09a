//! Static obstacle field and exact segment tests.
//!
//! # Data layout
//!
//! Obstacles are bounding spheres (the probe and visibility rays only need a
//! blocked/clear answer, so the cheapest convex volume wins).  An R-tree over
//! their AABBs (via `rstar`) provides the broad phase: a segment query
//! gathers every obstacle whose box intersects the segment's box, then runs
//! the exact segment-vs-sphere test on those few candidates.

use rstar::{AABB, RTree, RTreeObject};

use horde_core::vec::EPSILON;
use horde_core::{ObstacleId, Vec3};

use crate::LayerMask;

// ── Obstacle ──────────────────────────────────────────────────────────────────

/// One static blocking volume.
#[derive(Clone, Debug)]
pub struct Obstacle {
    pub id: ObstacleId,
    pub center: Vec3,
    pub radius: f32,
    /// Classification layers this obstacle occupies.
    pub mask: LayerMask,
}

impl RTreeObject for Obstacle {
    type Envelope = AABB<[f32; 3]>;

    fn envelope(&self) -> Self::Envelope {
        let r = self.radius;
        AABB::from_corners(
            [self.center.x - r, self.center.y - r, self.center.z - r],
            [self.center.x + r, self.center.y + r, self.center.z + r],
        )
    }
}

// ── ObstacleField ─────────────────────────────────────────────────────────────

/// Immutable spatial index over all static obstacles.
///
/// Built once via [`ObstacleFieldBuilder`]; queries are `&self` and therefore
/// freely shareable across the probe batch's worker threads.
pub struct ObstacleField {
    tree: RTree<Obstacle>,
    count: usize,
}

impl ObstacleField {
    /// A field with no obstacles — every ray is clear.
    pub fn empty() -> Self {
        ObstacleFieldBuilder::new().build()
    }

    pub fn obstacle_count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// `true` if a segment of length `max_dist` from `origin` along unit
    /// `dir` hits any obstacle whose mask intersects `mask`.
    pub fn segment_hit(&self, origin: Vec3, dir: Vec3, max_dist: f32, mask: LayerMask) -> bool {
        if max_dist <= 0.0 || dir.is_near_zero() || mask.is_empty() {
            return false;
        }
        let end = origin + dir * max_dist;
        let envelope = AABB::from_corners(
            [
                origin.x.min(end.x),
                origin.y.min(end.y),
                origin.z.min(end.z),
            ],
            [
                origin.x.max(end.x),
                origin.y.max(end.y),
                origin.z.max(end.z),
            ],
        );
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .any(|o| o.mask.intersects(mask) && sphere_blocks(o.center, o.radius, origin, dir, max_dist))
    }

    /// `true` if the straight segment between `from` and `to` is blocked.
    pub fn blocked_between(&self, from: Vec3, to: Vec3, mask: LayerMask) -> bool {
        let delta = to - from;
        let dist = delta.length();
        if dist < EPSILON {
            return false;
        }
        self.segment_hit(from, delta * (1.0 / dist), dist, mask)
    }
}

/// Exact segment-vs-sphere intersection.
///
/// `dir` must be unit length.  A segment starting inside the sphere counts as
/// blocked.
fn sphere_blocks(center: Vec3, radius: f32, origin: Vec3, dir: Vec3, max_dist: f32) -> bool {
    let m = origin - center;
    let c = m.length_sq() - radius * radius;
    if c <= 0.0 {
        return true;
    }
    let b = m.dot(dir);
    if b > 0.0 {
        // Sphere entirely behind the origin.
        return false;
    }
    let disc = b * b - c;
    if disc < 0.0 {
        return false;
    }
    let t = -b - disc.sqrt();
    t >= 0.0 && t <= max_dist
}

// ── ObstacleFieldBuilder ──────────────────────────────────────────────────────

/// Accumulate obstacles, then bulk-load the R-tree in one pass.
pub struct ObstacleFieldBuilder {
    obstacles: Vec<Obstacle>,
}

impl ObstacleFieldBuilder {
    pub fn new() -> Self {
        Self { obstacles: Vec::new() }
    }

    pub fn with_capacity(n: usize) -> Self {
        Self { obstacles: Vec::with_capacity(n) }
    }

    /// Add a blocking sphere and return its `ObstacleId` (sequential from 0).
    pub fn add(&mut self, center: Vec3, radius: f32, mask: LayerMask) -> ObstacleId {
        let id = ObstacleId(self.obstacles.len() as u32);
        self.obstacles.push(Obstacle { id, center, radius, mask });
        id
    }

    /// Consume the builder and produce an [`ObstacleField`].
    ///
    /// Bulk load is O(n log n) — faster than n individual inserts.
    pub fn build(self) -> ObstacleField {
        let count = self.obstacles.len();
        ObstacleField {
            tree: RTree::bulk_load(self.obstacles),
            count,
        }
    }
}

impl Default for ObstacleFieldBuilder {
    fn default() -> Self {
        Self::new()
    }
}
