//! Probe requests and the batched casting contract.

use rayon::prelude::*;

use horde_core::Vec3;

use crate::{LayerMask, ObstacleField};

/// One directional obstacle query.
#[derive(Copy, Clone, Debug, Default)]
pub struct ProbeRequest {
    pub origin: Vec3,
    /// Unit direction.  A zero direction yields a clear result.
    pub dir: Vec3,
    pub max_dist: f32,
}

/// Pluggable batch probe backend.
///
/// # Contract
///
/// - Exactly one result per request, written to `hits` in request order
///   (`hits.len() == requests.len()` on return).
/// - Requests may be evaluated concurrently with each other in any order.
/// - The call returns only once every result is written; the caller must not
///   read `hits` through any other path while a cast is in flight (the `&mut`
///   borrow enforces this).
///
/// Any backend honoring this — thread pool, SIMD batch, sequential loop — is
/// interchangeable.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so the scheduler can share them with
/// its own worker threads.
pub trait ProbeCaster: Send + Sync {
    fn cast_all(
        &self,
        field: &ObstacleField,
        mask: LayerMask,
        requests: &[ProbeRequest],
        hits: &mut Vec<bool>,
    );
}

/// Rayon-backed caster: the whole batch fans out across the thread pool in a
/// single dispatch, amortizing per-call overhead over the population.
pub struct RayonCaster;

impl ProbeCaster for RayonCaster {
    fn cast_all(
        &self,
        field: &ObstacleField,
        mask: LayerMask,
        requests: &[ProbeRequest],
        hits: &mut Vec<bool>,
    ) {
        requests
            .par_iter()
            .map(|r| field.segment_hit(r.origin, r.dir, r.max_dist, mask))
            .collect_into_vec(hits);
    }
}

/// Single-threaded fallback caster.  Same contract, no concurrency — useful
/// for tests and for hosts that already saturate their cores.
pub struct SerialCaster;

impl ProbeCaster for SerialCaster {
    fn cast_all(
        &self,
        field: &ObstacleField,
        mask: LayerMask,
        requests: &[ProbeRequest],
        hits: &mut Vec<bool>,
    ) {
        hits.clear();
        hits.extend(
            requests
                .iter()
                .map(|r| field.segment_hit(r.origin, r.dir, r.max_dist, mask)),
        );
    }
}
