use crate::constants::FRAME_FALLBACK_MS;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy, Debug)]
enum Pending {
    Animation(i32),
    Timeout(i32),
}

struct LoopState {
    running: Cell<bool>,
    pending: Cell<Option<Pending>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

/// Self-rescheduling frame callback.
///
/// Driven by `requestAnimationFrame`, falling back to a timeout chain when the
/// window refuses it. `stop` cancels the pending request synchronously, so no
/// callback runs afterwards.
pub struct FrameLoop {
    state: Rc<LoopState>,
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut() + 'static) -> Self {
        let state = Rc::new(LoopState {
            running: Cell::new(true),
            pending: Cell::new(None),
            tick: RefCell::new(None),
        });
        let weak: Weak<LoopState> = Rc::downgrade(&state);
        *state.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.pending.set(None);
            if !state.running.get() {
                return;
            }
            on_frame();
            if state.running.get() {
                schedule(&state);
            }
        }) as Box<dyn FnMut()>));
        schedule(&state);
        Self { state }
    }

    /// Idempotent.
    pub fn stop(&self) {
        if !self.state.running.replace(false) {
            return;
        }
        if let (Some(pending), Some(w)) = (self.state.pending.take(), web::window()) {
            match pending {
                Pending::Animation(id) => {
                    _ = w.cancel_animation_frame(id);
                }
                Pending::Timeout(id) => w.clear_timeout_with_handle(id),
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule(state: &LoopState) {
    let Some(w) = web::window() else {
        return;
    };
    let tick = state.tick.borrow();
    let Some(cb) = tick.as_ref() else {
        return;
    };
    let f = cb.as_ref().unchecked_ref();
    let pending = match w.request_animation_frame(f) {
        Ok(id) => Some(Pending::Animation(id)),
        Err(_) => w
            .set_timeout_with_callback_and_timeout_and_arguments_0(f, FRAME_FALLBACK_MS)
            .ok()
            .map(Pending::Timeout),
    };
    if pending.is_none() {
        log::warn!("[frame] no frame primitive available; loop halted");
    }
    state.pending.set(pending);
}

/// `setInterval` handle, cleared on drop.
pub struct Interval {
    id: i32,
    _tick: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn every(ms: u32, on_tick: impl FnMut() + 'static) -> Option<Self> {
        let window = web::window()?;
        let tick = Closure::wrap(Box::new(on_tick) as Box<dyn FnMut()>);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                tick.as_ref().unchecked_ref(),
                ms.min(i32::MAX as u32) as i32,
            )
            .ok()?;
        Some(Self { id, _tick: tick })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.id);
        }
    }
}
