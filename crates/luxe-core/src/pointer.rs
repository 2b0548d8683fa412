use glam::Vec2;

/// Latest raw pointer position in viewport pixels.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerTracker {
    position: Vec2,
}

impl PointerTracker {
    /// Store the event coordinates as-is; they may lie outside the viewport.
    #[inline]
    pub fn record(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }
}

/// Trailing position eased toward a target by a fixed fraction per tick.
///
/// This is a discrete exponential decay: with `0 < k < 1` the distance to a
/// fixed target shrinks by `(1 - k)` each step and never overshoots.
#[derive(Clone, Copy, Debug)]
pub struct SmoothedFollower {
    position: Vec2,
    factor: f32,
}

impl SmoothedFollower {
    pub fn new(factor: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            factor,
        }
    }

    #[inline]
    pub fn step(&mut self, target: Vec2) -> Vec2 {
        self.position += (target - self.position) * self.factor;
        self.position
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn factor(&self) -> f32 {
        self.factor
    }
}
