// Recording stand-in for the browser surface.

#![allow(dead_code)]
use glam::Vec2;
use luxe_core::{CursorLayer, RevealId, Surface, SurfaceError};
use std::collections::HashMap;

#[derive(Default)]
pub struct FakeSurface {
    pub viewport_height: f32,
    /// Tops of the elements the page would find at effects start.
    pub tops: Vec<f32>,
    pub collected: usize,
    pub missing_layers: Vec<CursorLayer>,
    pub transforms: HashMap<CursorLayer, Vec2>,
    pub revealed: Vec<RevealId>,
    pub hovering: bool,
    pub loading: Option<bool>,
    pub writes: usize,
}

impl FakeSurface {
    pub fn new(viewport_height: f32, tops: Vec<f32>) -> Self {
        Self {
            viewport_height,
            tops,
            ..Default::default()
        }
    }
}

impl Surface for FakeSurface {
    fn collect_reveals(&mut self) -> usize {
        self.collected = self.tops.len();
        self.collected
    }

    fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    fn element_top(&self, id: RevealId) -> Option<f32> {
        if id.0 >= self.collected {
            return None;
        }
        self.tops.get(id.0).copied()
    }

    fn translate(&mut self, layer: CursorLayer, at: Vec2) -> Result<(), SurfaceError> {
        if self.missing_layers.contains(&layer) {
            return Err(SurfaceError::LayerMissing(layer));
        }
        self.writes += 1;
        self.transforms.insert(layer, at);
        Ok(())
    }

    fn mark_revealed(&mut self, id: RevealId) -> Result<(), SurfaceError> {
        self.writes += 1;
        self.revealed.push(id);
        Ok(())
    }

    fn set_hovering(&mut self, hovering: bool) -> Result<(), SurfaceError> {
        self.writes += 1;
        self.hovering = hovering;
        Ok(())
    }

    fn set_loading(&mut self, loading: bool) -> Result<(), SurfaceError> {
        self.writes += 1;
        self.loading = Some(loading);
        Ok(())
    }
}

pub fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-3
}
