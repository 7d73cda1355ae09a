//! Obstacle classification bitmask.

use std::ops::{BitOr, BitOrAssign};

/// A 32-layer classification mask.
///
/// Obstacles carry one, queries carry one; a probe or visibility ray only
/// collides with obstacles whose mask intersects the query's.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const NONE: LayerMask = LayerMask(0);
    pub const ALL: LayerMask = LayerMask(u32::MAX);

    /// Mask with the single bit `layer` (0–31) set.
    #[inline]
    pub const fn layer(layer: u32) -> LayerMask {
        LayerMask(1 << layer)
    }

    /// `true` if any bit is shared with `other`.
    #[inline]
    pub const fn intersects(self, other: LayerMask) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for LayerMask {
    type Output = LayerMask;
    #[inline]
    fn bitor(self, rhs: LayerMask) -> LayerMask {
        LayerMask(self.0 | rhs.0)
    }
}

impl BitOrAssign for LayerMask {
    #[inline]
    fn bitor_assign(&mut self, rhs: LayerMask) {
        self.0 |= rhs.0;
    }
}
