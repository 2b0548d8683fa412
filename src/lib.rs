#![cfg(target_arch = "wasm32")]
use instant::Instant;
use luxe_core::{timer_millis, Page};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod surface;
mod timer;

use events::{EffectsBindings, SharedPage};
use surface::DomSurface;

thread_local! {
    static MOUNTED: RefCell<Option<Mount>> = const { RefCell::new(None) };
}

/// At most one preloader timeout is pending. The previous one is parked rather
/// than dropped, since a re-arm runs inside its callback.
#[derive(Default)]
struct PreloadTimers {
    pending: Option<timer::Timeout>,
    _fired: Option<timer::Timeout>,
}

/// Everything one mount owns. Cloned into the timer callbacks.
#[derive(Clone)]
struct Mount {
    window: web::Window,
    document: web::Document,
    page: SharedPage,
    effects: Rc<RefCell<Option<EffectsBindings>>>,
    timers: Rc<RefCell<PreloadTimers>>,
    armed_at: Instant,
}

impl Mount {
    fn new(window: web::Window, document: web::Document) -> Self {
        let config = config::from_body(&document);
        let surface = DomSurface::new(window.clone(), document.clone());
        Self {
            page: Rc::new(RefCell::new(Page::mount(surface, config))),
            window,
            document,
            effects: Rc::new(RefCell::new(None)),
            timers: Rc::new(RefCell::new(PreloadTimers::default())),
            armed_at: Instant::now(),
        }
    }

    fn arm_preloader(&self, delay: Duration) -> anyhow::Result<()> {
        let this = self.clone();
        let t = timer::Timeout::arm(timer_millis(delay), move || this.on_preload_timer())?;
        let timers = &mut *self.timers.borrow_mut();
        timers._fired = timers.pending.replace(t);
        Ok(())
    }

    fn on_preload_timer(&self) {
        let elapsed = self.armed_at.elapsed();
        let (step, remaining) = {
            let Ok(mut p) = self.page.try_borrow_mut() else {
                return;
            };
            (p.advance_preloader(elapsed), p.preload_remaining(elapsed))
        };
        if step.is_some() {
            if let Err(e) = self.start_effects_if_ready() {
                log::error!("effects init error: {:?}", e);
            }
        } else if let Some(rem) = remaining {
            // The timer clock and `Instant` can disagree by a fraction of a millisecond.
            if let Err(e) = self.arm_preloader(rem) {
                log::error!("preloader re-arm error: {:?}", e);
            }
        }
    }

    fn start_effects_if_ready(&self) -> anyhow::Result<()> {
        if !self.page.borrow().effects_active() || self.effects.borrow().is_some() {
            return Ok(());
        }
        let bindings = events::wire_effects(&self.window, &self.document, &self.page)?;
        *self.effects.borrow_mut() = Some(bindings);
        Ok(())
    }

    /// Release listeners, the frame loop and pending timers, then the page state.
    fn unmount(self) {
        self.effects.borrow_mut().take();
        let timers = std::mem::take(&mut *self.timers.borrow_mut());
        drop(timers);
        if let Ok(mut p) = self.page.try_borrow_mut() {
            p.unmount();
        }
    }
}

async fn dom_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let target: web::EventTarget = document.clone().into();
    let options = web::AddEventListenerOptions::new();
    options.set_once(true);
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            &resolve,
            &options,
        ) {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("DOMContentLoaded: {:?}", e))?;
    Ok(())
}

fn mount_page(window: web::Window, document: web::Document) -> anyhow::Result<()> {
    if let Some(old) = MOUNTED.with(|slot| slot.borrow_mut().take()) {
        old.unmount();
    }

    let mount = Mount::new(window, document);
    let delay = mount.page.borrow().config().preload_delay;
    let wired = mount
        .arm_preloader(delay)
        .and_then(|()| mount.start_effects_if_ready());
    if let Err(e) = wired {
        // The armed timeout holds a clone of the mount; release it here.
        mount.unmount();
        return Err(e);
    }
    MOUNTED.with(|slot| *slot.borrow_mut() = Some(mount));
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom_ready(&document).await?;
    mount_page(window, document)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("luxe-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Mount the effects again, replacing any current mount.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    mount_page(window, document).map_err(|e| JsValue::from_str(&format!("{:?}", e)))
}

/// Tear down the current mount. Returns false if nothing was mounted.
#[wasm_bindgen]
pub fn unmount() -> bool {
    match MOUNTED.with(|slot| slot.borrow_mut().take()) {
        Some(m) => {
            m.unmount();
            true
        }
        None => false,
    }
}
