use crate::surface::Surface;
use fnv::FnvHashSet;

/// Index of a revealable element in the registry built at effects start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RevealId(pub usize);

/// One-way scroll reveal over a fixed registry of elements.
#[derive(Clone, Debug)]
pub struct RevealController {
    count: usize,
    threshold: f32,
    revealed: FnvHashSet<RevealId>,
}

impl RevealController {
    pub fn new(count: usize, threshold: f32) -> Self {
        Self {
            count,
            threshold,
            revealed: FnvHashSet::default(),
        }
    }

    /// An element is due once its top edge is above `viewport_height - threshold`.
    #[inline]
    pub fn should_reveal(top: f32, viewport_height: f32, threshold: f32) -> bool {
        top < viewport_height - threshold
    }

    /// Check every unrevealed element and flip those now in view.
    /// Returns the ids revealed by this call, in registry order.
    pub fn scan<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Vec<RevealId> {
        let viewport_height = surface.viewport_height();
        let mut newly = Vec::new();
        for i in 0..self.count {
            let id = RevealId(i);
            if self.revealed.contains(&id) {
                continue;
            }
            let Some(top) = surface.element_top(id) else {
                log::trace!("[reveal] no geometry for {:?}", id);
                continue;
            };
            if Self::should_reveal(top, viewport_height, self.threshold) {
                self.revealed.insert(id);
                if let Err(e) = surface.mark_revealed(id) {
                    log::trace!("[reveal] mark {:?} skipped: {}", id, e);
                }
                newly.push(id);
            }
        }
        if !newly.is_empty() {
            log::debug!(
                "[reveal] {} revealed ({}/{})",
                newly.len(),
                self.revealed.len(),
                self.count
            );
        }
        newly
    }

    #[inline]
    pub fn is_revealed(&self, id: RevealId) -> bool {
        self.revealed.contains(&id)
    }

    #[inline]
    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
