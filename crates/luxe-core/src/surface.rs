//! Capability interface to the rendering layer.
//!
//! The engine never addresses visual elements directly; the host hands it a
//! `Surface` that can read geometry and write presentation properties. Reveal
//! elements are addressed by their registration index.

use crate::cursor::CursorLayer;
use crate::error::SurfaceError;
use crate::reveal::RevealId;
use glam::Vec2;

pub trait Surface {
    /// Snapshot the revealable elements present right now and return how many.
    /// Ids `0..n` address them from then on.
    fn collect_reveals(&mut self) -> usize;

    /// Current viewport height in pixels.
    fn viewport_height(&self) -> f32;

    /// Bounding-box top of a reveal element relative to the viewport, if mounted.
    fn element_top(&self, id: RevealId) -> Option<f32>;

    /// Translate a cursor layer so its top-left corner sits at `at`.
    fn translate(&mut self, layer: CursorLayer, at: Vec2) -> Result<(), SurfaceError>;

    fn mark_revealed(&mut self, id: RevealId) -> Result<(), SurfaceError>;

    fn set_hovering(&mut self, hovering: bool) -> Result<(), SurfaceError>;

    fn set_loading(&mut self, loading: bool) -> Result<(), SurfaceError>;
}
