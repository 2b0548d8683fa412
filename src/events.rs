use crate::constants::HOVER_TRIGGER_SELECTOR;
use crate::dom::{self, Listener};
use crate::frame::{self, FrameLoop};
use crate::surface::DomSurface;
use luxe_core::{Page, TriggerId};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedPage = Rc<RefCell<Page<DomSurface>>>;

/// Everything the running effects hold on the page. Dropping it detaches every
/// listener and stops the frame loop.
pub struct EffectsBindings {
    _listeners: Vec<Listener>,
    _frame: FrameLoop,
}

/// Run `f` against the page unless it is already borrowed further up the stack.
#[inline]
fn with_page(page: &SharedPage, f: impl FnOnce(&mut Page<DomSurface>)) {
    if let Ok(mut p) = page.try_borrow_mut() {
        f(&mut p);
    }
}

pub fn wire_effects(
    window: &web::Window,
    document: &web::Document,
    page: &SharedPage,
) -> anyhow::Result<EffectsBindings> {
    let mut listeners = vec![wire_pointermove(window, page)?, wire_scroll(window, page)?];
    listeners.extend(wire_hover_triggers(document, page));

    let page_tick = page.clone();
    let frame = frame::start_loop(move |_ts| with_page(&page_tick, |p| p.tick()))?;

    log::info!("[events] wired {} listeners", listeners.len());
    Ok(EffectsBindings {
        _listeners: listeners,
        _frame: frame,
    })
}

fn wire_pointermove(window: &web::Window, page: &SharedPage) -> anyhow::Result<Listener> {
    let page = page.clone();
    Listener::attach(window.as_ref(), "mousemove", move |ev: web::Event| {
        let Ok(ev) = ev.dyn_into::<web::MouseEvent>() else {
            return;
        };
        with_page(&page, |p| {
            p.pointer_moved(ev.client_x() as f32, ev.client_y() as f32)
        });
    })
}

fn wire_scroll(window: &web::Window, page: &SharedPage) -> anyhow::Result<Listener> {
    let page = page.clone();
    Listener::attach(window.as_ref(), "scroll", move |_ev: web::Event| {
        with_page(&page, |p| {
            p.scrolled();
        });
    })
}

/// Bind enter/leave on the triggers present right now. Elements added later
/// are not tracked.
fn wire_hover_triggers(document: &web::Document, page: &SharedPage) -> Vec<Listener> {
    let triggers = dom::query_all(document, HOVER_TRIGGER_SELECTOR);
    let mut listeners = Vec::with_capacity(triggers.len() * 2);
    for (i, el) in triggers.iter().enumerate() {
        let id = TriggerId(i);
        let page_enter = page.clone();
        let page_leave = page.clone();
        let enter = Listener::attach(el.as_ref(), "mouseenter", move |_ev: web::Event| {
            with_page(&page_enter, |p| p.hover_enter(id));
        });
        let leave = Listener::attach(el.as_ref(), "mouseleave", move |_ev: web::Event| {
            with_page(&page_leave, |p| p.hover_leave(id));
        });
        for l in [enter, leave] {
            match l {
                Ok(l) => listeners.push(l),
                Err(e) => log::debug!("[hover] trigger {} not bound: {}", i, e),
            }
        }
    }
    log::debug!("[hover] {} triggers bound", triggers.len());
    listeners
}
