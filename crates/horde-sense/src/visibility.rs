//! Single-ray line-of-sight check.

use horde_core::Vec3;

use crate::{LayerMask, ObstacleField};

/// `true` if the segment from `from` to `to` crosses no obstacle matching
/// `mask`.
///
/// Callers are expected to lift both endpoints to the heights they care about
/// (eye height at the source, chest height at the target) before calling —
/// this function tests exactly the segment it is given.
#[inline]
pub fn line_of_sight(field: &ObstacleField, from: Vec3, to: Vec3, mask: LayerMask) -> bool {
    !field.blocked_between(from, to, mask)
}
