use crate::config::EffectsConfig;
use crate::surface::Surface;
use glam::Vec2;

/// The three independently styled cursor elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CursorLayer {
    Dot,
    Outline,
    Glow,
}

/// CSS transform placing an element's top-left corner at `at`.
#[inline]
pub fn translate3d(at: Vec2) -> String {
    format!("translate3d({}px, {}px, 0)", at.x, at.y)
}

#[derive(Clone, Copy, Debug)]
pub struct CursorRenderer {
    dot_offset: Vec2,
    outline_offset: Vec2,
    glow_offset: Vec2,
}

impl CursorRenderer {
    pub fn new(config: &EffectsConfig) -> Self {
        Self {
            dot_offset: Vec2::splat(config.dot_offset),
            outline_offset: Vec2::splat(config.outline_offset),
            glow_offset: Vec2::splat(config.glow_offset),
        }
    }

    /// Where each layer should sit for the given raw and smoothed positions.
    pub fn placements(&self, pointer: Vec2, smoothed: Vec2) -> [(CursorLayer, Vec2); 3] {
        [
            (CursorLayer::Glow, pointer - self.glow_offset),
            (CursorLayer::Dot, pointer - self.dot_offset),
            (CursorLayer::Outline, smoothed - self.outline_offset),
        ]
    }

    /// Position every layer; a layer the surface cannot reach is skipped for this tick.
    /// Returns how many layers were written.
    pub fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        pointer: Vec2,
        smoothed: Vec2,
    ) -> usize {
        let mut written = 0;
        for (layer, at) in self.placements(pointer, smoothed) {
            match surface.translate(layer, at) {
                Ok(()) => written += 1,
                Err(e) => log::trace!("[cursor] skip {:?}: {}", layer, e),
            }
        }
        written
    }
}
