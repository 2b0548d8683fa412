//! Page-level composition: one owner for every effect and for the shared
//! presentation flags.
//!
//! All notifications funnel through [`Page`]. Before the effects have started
//! (preloader still running, when gated) and after [`Page::unmount`], every
//! notification is a no-op.

use crate::config::EffectsConfig;
use crate::cursor::CursorRenderer;
use crate::hover::{HoverTracker, TriggerId};
use crate::pointer::{PointerTracker, SmoothedFollower};
use crate::preloader::{PreloadPhase, Preloader};
use crate::reveal::{RevealController, RevealId};
use crate::surface::Surface;
use glam::Vec2;
use std::time::Duration;

/// Presentation flags read by the rendering layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageState {
    hovering: bool,
    loading: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            hovering: false,
            loading: true,
        }
    }
}

impl PageState {
    #[inline]
    pub fn hovering(&self) -> bool {
        self.hovering
    }

    #[inline]
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Returns true if the value changed.
    fn set_hovering(&mut self, hovering: bool) -> bool {
        std::mem::replace(&mut self.hovering, hovering) != hovering
    }

    fn set_loading(&mut self, loading: bool) -> bool {
        std::mem::replace(&mut self.loading, loading) != loading
    }
}

struct Effects {
    pointer: PointerTracker,
    follower: SmoothedFollower,
    renderer: CursorRenderer,
    hover: HoverTracker,
    reveal: RevealController,
}

pub struct Page<S: Surface> {
    config: EffectsConfig,
    surface: S,
    state: PageState,
    preloader: Preloader,
    effects: Option<Effects>,
    mounted: bool,
}

impl<S: Surface> Page<S> {
    pub fn mount(surface: S, config: EffectsConfig) -> Self {
        let mut page = Self {
            preloader: Preloader::new(config.preload_delay),
            config,
            surface,
            state: PageState::default(),
            effects: None,
            mounted: true,
        };
        if let Err(e) = page.surface.set_loading(true) {
            log::trace!("[page] loading flag not applied: {}", e);
        }
        log::info!(
            "[page] mounted (preload {:?}, gated={})",
            page.config.preload_delay,
            page.config.gate_on_preload
        );
        if !page.config.gate_on_preload {
            page.start_effects();
        }
        page
    }

    fn start_effects(&mut self) {
        if self.effects.is_some() {
            return;
        }
        let reveal_count = self.surface.collect_reveals();
        let mut effects = Effects {
            pointer: PointerTracker::default(),
            follower: SmoothedFollower::new(self.config.smoothing),
            renderer: CursorRenderer::new(&self.config),
            hover: HoverTracker::default(),
            reveal: RevealController::new(reveal_count, self.config.reveal_threshold),
        };
        effects.reveal.scan(&mut self.surface);
        log::info!("[page] effects started ({} reveal targets)", reveal_count);
        self.effects = Some(effects);
    }

    /// Feed time since mount to the preloader. Returns `Some(Loaded)` on the transition.
    pub fn advance_preloader(&mut self, elapsed: Duration) -> Option<PreloadPhase> {
        if !self.mounted {
            return None;
        }
        let step = self.preloader.advance(elapsed)?;
        if self.state.set_loading(false) {
            if let Err(e) = self.surface.set_loading(false) {
                log::trace!("[page] loading flag not applied: {}", e);
            }
        }
        log::info!("[page] preloader done after {:?}", elapsed);
        if self.config.gate_on_preload {
            self.start_effects();
        }
        Some(step)
    }

    /// Time until the preloader transition, if it is still pending.
    pub fn preload_remaining(&self, elapsed: Duration) -> Option<Duration> {
        if !self.mounted {
            return None;
        }
        self.preloader.remaining(elapsed)
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        if !self.mounted {
            return;
        }
        if let Some(fx) = self.effects.as_mut() {
            fx.pointer.record(x, y);
        }
    }

    /// One animation tick: ease the follower and reposition the cursor layers.
    pub fn tick(&mut self) {
        if !self.mounted {
            return;
        }
        let Some(fx) = self.effects.as_mut() else {
            return;
        };
        let pointer = fx.pointer.position();
        let smoothed = fx.follower.step(pointer);
        fx.renderer.render(&mut self.surface, pointer, smoothed);
    }

    /// Re-check every unrevealed element. Returns the ids revealed by this call.
    pub fn scrolled(&mut self) -> Vec<RevealId> {
        if !self.mounted {
            return Vec::new();
        }
        match self.effects.as_mut() {
            Some(fx) => fx.reveal.scan(&mut self.surface),
            None => Vec::new(),
        }
    }

    pub fn hover_enter(&mut self, id: TriggerId) {
        let changed = match self.effects.as_mut() {
            Some(fx) if self.mounted => fx.hover.enter(id),
            _ => None,
        };
        if let Some(hovering) = changed {
            self.apply_hovering(hovering);
        }
    }

    pub fn hover_leave(&mut self, id: TriggerId) {
        let changed = match self.effects.as_mut() {
            Some(fx) if self.mounted => fx.hover.leave(id),
            _ => None,
        };
        if let Some(hovering) = changed {
            self.apply_hovering(hovering);
        }
    }

    fn apply_hovering(&mut self, hovering: bool) {
        if self.state.set_hovering(hovering) {
            log::debug!("[hover] hovering={}", hovering);
            if let Err(e) = self.surface.set_hovering(hovering) {
                log::trace!("[hover] flag not applied: {}", e);
            }
        }
    }

    /// Tear everything down. Returns false if the page was already unmounted.
    pub fn unmount(&mut self) -> bool {
        if !std::mem::replace(&mut self.mounted, false) {
            return false;
        }
        self.preloader.cancel();
        // Presentation flags live on the shared document and outlive this page.
        self.apply_hovering(false);
        self.effects = None;
        log::info!("[page] unmounted");
        true
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[inline]
    pub fn effects_active(&self) -> bool {
        self.mounted && self.effects.is_some()
    }

    #[inline]
    pub fn state(&self) -> PageState {
        self.state
    }

    #[inline]
    pub fn config(&self) -> &EffectsConfig {
        &self.config
    }

    #[inline]
    pub fn phase(&self) -> PreloadPhase {
        self.preloader.phase()
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.effects.as_ref().map(|fx| fx.pointer.position())
    }

    pub fn smoothed(&self) -> Option<Vec2> {
        self.effects.as_ref().map(|fx| fx.follower.position())
    }

    pub fn is_revealed(&self, id: RevealId) -> bool {
        self.effects
            .as_ref()
            .map(|fx| fx.reveal.is_revealed(id))
            .unwrap_or(false)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
