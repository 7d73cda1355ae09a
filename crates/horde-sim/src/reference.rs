//! The live reference-position seam.

use horde_core::Vec3;

/// Supplies the reference target's position.
///
/// The orchestrator reads this exactly once per tick, before any dispatch;
/// everything downstream sees that single sampled value, so the provider may
/// move its target freely between ticks without racing the movement pass.
///
/// # Thread safety
///
/// `Send + Sync` so a swarm holding a feed can itself cross threads.
pub trait ReferenceFeed: Send + Sync {
    fn position(&self) -> Vec3;
}

/// A reference that sits where you put it.  The field is public: hosts that
/// own the swarm mutably can reposition it between ticks
/// (`swarm.reference_mut().0 = new_pos`).
pub struct FixedReference(pub Vec3);

impl ReferenceFeed for FixedReference {
    #[inline]
    fn position(&self) -> Vec3 {
        self.0
    }
}
