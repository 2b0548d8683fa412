use crate::constants::*;
use crate::dom;
use crate::overlay;
use glam::Vec2;
use luxe_core::{translate3d, CursorLayer, RevealId, Surface, SurfaceError};
use web_sys as web;

/// [`Surface`] backed by the live document.
///
/// Cursor layers are looked up on every write so a layer that mounts late (or
/// is removed) is simply skipped until it exists.
pub struct DomSurface {
    window: web::Window,
    document: web::Document,
    reveals: Vec<web::Element>,
}

impl DomSurface {
    pub fn new(window: web::Window, document: web::Document) -> Self {
        Self {
            window,
            document,
            reveals: Vec::new(),
        }
    }

    fn layer_selector(layer: CursorLayer) -> &'static str {
        match layer {
            CursorLayer::Dot => CURSOR_DOT_SELECTOR,
            CursorLayer::Outline => CURSOR_OUTLINE_SELECTOR,
            CursorLayer::Glow => CURSOR_GLOW_SELECTOR,
        }
    }

    fn reveal(&self, id: RevealId) -> Result<&web::Element, SurfaceError> {
        self.reveals
            .get(id.0)
            .filter(|el| el.is_connected())
            .ok_or(SurfaceError::ElementMissing(id))
    }
}

impl Surface for DomSurface {
    fn collect_reveals(&mut self) -> usize {
        self.reveals = dom::query_all(&self.document, REVEAL_SELECTOR);
        self.reveals.len()
    }

    fn viewport_height(&self) -> f32 {
        self.window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32
    }

    fn element_top(&self, id: RevealId) -> Option<f32> {
        self.reveal(id)
            .ok()
            .map(|el| el.get_bounding_client_rect().top() as f32)
    }

    fn translate(&mut self, layer: CursorLayer, at: Vec2) -> Result<(), SurfaceError> {
        let el = dom::query(&self.document, Self::layer_selector(layer))
            .ok_or(SurfaceError::LayerMissing(layer))?;
        el.style()
            .set_property("transform", &translate3d(at))
            .map_err(|e| SurfaceError::Rejected(format!("{:?}", e)))
    }

    fn mark_revealed(&mut self, id: RevealId) -> Result<(), SurfaceError> {
        self.reveal(id)?
            .class_list()
            .add_1(REVEALED_CLASS)
            .map_err(|e| SurfaceError::Rejected(format!("{:?}", e)))
    }

    fn set_hovering(&mut self, hovering: bool) -> Result<(), SurfaceError> {
        let body = self
            .document
            .body()
            .ok_or_else(|| SurfaceError::Rejected("no <body>".into()))?;
        let classes = body.class_list();
        let res = if hovering {
            classes.add_1(HOVERING_CLASS)
        } else {
            classes.remove_1(HOVERING_CLASS)
        };
        res.map_err(|e| SurfaceError::Rejected(format!("{:?}", e)))
    }

    fn set_loading(&mut self, loading: bool) -> Result<(), SurfaceError> {
        if loading {
            overlay::show(&self.document);
        } else if !overlay::is_hidden(&self.document) {
            overlay::hide(&self.document);
        }
        Ok(())
    }
}
