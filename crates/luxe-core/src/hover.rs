use smallvec::SmallVec;

/// Index of an interactive element in the mount-time trigger snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TriggerId(pub usize);

/// Tracks which hover-triggers the pointer is currently inside.
///
/// Hovering stays true until the last entered trigger is left, so nested or
/// overlapping triggers (a link inside a card) do not flicker the cursor state.
#[derive(Default, Clone, Debug)]
pub struct HoverTracker {
    active: SmallVec<[TriggerId; 4]>,
}

impl HoverTracker {
    /// Returns the new hovering value if it changed.
    pub fn enter(&mut self, id: TriggerId) -> Option<bool> {
        let was = self.is_hovering();
        if !self.active.contains(&id) {
            self.active.push(id);
        }
        (was != self.is_hovering()).then_some(true)
    }

    /// Returns the new hovering value if it changed. Unknown ids are ignored.
    pub fn leave(&mut self, id: TriggerId) -> Option<bool> {
        let was = self.is_hovering();
        self.active.retain(|a| *a != id);
        (was != self.is_hovering()).then_some(false)
    }

    #[inline]
    pub fn is_hovering(&self) -> bool {
        !self.active.is_empty()
    }

    #[inline]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}
