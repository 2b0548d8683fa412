use luxe_core::StopSignal;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A `requestAnimationFrame` loop that re-arms itself after every frame until
/// stopped. Dropping the loop stops it and cancels the pending frame.
pub struct FrameLoop {
    stop: StopSignal,
    pending: Rc<Cell<Option<i32>>>,
    tick: TickSlot,
}

fn request(window: &web::Window, tick: &TickSlot) -> Option<i32> {
    let slot = tick.borrow();
    let cb = slot.as_ref()?;
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .ok()
}

pub fn start_loop(mut on_frame: impl FnMut(f64) + 'static) -> anyhow::Result<FrameLoop> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let stop = StopSignal::new();
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: TickSlot = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let stop_tick = stop.clone();
    let pending_tick = pending.clone();
    let window_tick = window.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        pending_tick.set(None);
        if stop_tick.is_stopped() {
            return;
        }
        on_frame(ts);
        if stop_tick.is_stopped() {
            return;
        }
        pending_tick.set(request(&window_tick, &tick_clone));
    }) as Box<dyn FnMut(f64)>));

    let first = request(&window, &tick)
        .ok_or_else(|| anyhow::anyhow!("requestAnimationFrame failed"))?;
    pending.set(Some(first));
    Ok(FrameLoop {
        stop,
        pending,
        tick,
    })
}

impl FrameLoop {
    fn stop(&self) {
        if !self.stop.stop() {
            return;
        }
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
        // Break the closure's self-reference so it can be freed.
        self.tick.borrow_mut().take();
    }
}
