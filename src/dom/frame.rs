use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Milliseconds on the page clock, `performance.now()`.
pub fn now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn request_frame(callback: &Closure<dyn FnMut(f64)>) -> Option<i32> {
    web_sys::window()?
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .ok()
}

/// A `requestAnimationFrame` loop that sleeps when there is nothing to do.
///
/// The step runs once per frame with the page clock and returns whether it
/// wants another frame. [`FrameLoop::start`] wakes a sleeping loop and is a
/// no-op while one is already scheduled.
pub struct FrameLoop {
    slot: FrameSlot,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn new<F>(mut step: F) -> Self
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let slot: FrameSlot = Rc::new(RefCell::new(None));
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let weak_slot = Rc::downgrade(&slot);
        let frame_pending = pending.clone();
        *slot.borrow_mut() = Some(Closure::new(move |_timestamp: f64| {
            frame_pending.set(None);
            if !step(now()) {
                return;
            }
            if let Some(slot) = weak_slot.upgrade() {
                if let Some(callback) = slot.borrow().as_ref() {
                    frame_pending.set(request_frame(callback));
                }
            }
        }));

        Self { slot, pending }
    }

    pub fn start(&self) {
        if self.pending.get().is_some() {
            return;
        }
        if let Some(callback) = self.slot.borrow().as_ref() {
            self.pending.set(request_frame(callback));
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(handle), Some(window)) = (self.pending.take(), web_sys::window()) {
            let _ = window.cancel_animation_frame(handle);
        }
        self.slot.borrow_mut().take();
    }
}
