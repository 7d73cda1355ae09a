//! Borrowed read-only snapshot of the active set.

use horde_core::{AgentId, Vec3};

/// A stable view of every active agent's handle and position.
///
/// Both slices borrow the registry's dense columns directly (no copy) and
/// stay row-aligned for the lifetime of the borrow.
#[derive(Copy, Clone)]
pub struct TargetView<'a> {
    handles: &'a [AgentId],
    positions: &'a [Vec3],
}

impl<'a> TargetView<'a> {
    /// Build a view over row-aligned handle and position slices.
    ///
    /// # Panics
    ///
    /// Panics if the slices disagree on length — that would mean the columns
    /// were mutated outside the paired register/unregister path.
    pub fn new(handles: &'a [AgentId], positions: &'a [Vec3]) -> Self {
        assert_eq!(handles.len(), positions.len(), "snapshot columns out of sync");
        Self { handles, positions }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Iterate `(handle, position)` pairs, skipping rows whose position is
    /// not finite — a corrupted transform must not poison a query.
    ///
    /// Takes `self` by value (the view is `Copy`), so the iterator borrows
    /// only the underlying columns.
    #[inline]
    pub fn iter(self) -> impl Iterator<Item = (AgentId, Vec3)> + 'a {
        self.handles
            .iter()
            .zip(self.positions)
            .filter(|(_, p)| p.is_finite())
            .map(|(&h, &p)| (h, p))
    }
}
