//! `requestAnimationFrame` loop with RAII cleanup
//!
//! The loop keeps calling its step function once per frame until the step
//! returns `false`. Dropping the `AnimationLoop` cancels the pending frame
//! and releases the JS closure, so a loop never outlives the component that
//! owns it and no closure has to be leaked with `Closure::forget`.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::services::confetti::ConfettiError;

type FrameCallback = Closure<dyn FnMut(f64)>;

struct LoopState {
    callback: RefCell<Option<FrameCallback>>,
    frame_id: Cell<Option<i32>>,
}

impl LoopState {
    fn schedule(&self, window: &web_sys::Window) -> Result<(), ConfettiError> {
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return Ok(());
        };
        let id = window.request_animation_frame(callback.as_ref().unchecked_ref())?;
        self.frame_id.set(Some(id));
        Ok(())
    }
}

pub struct AnimationLoop {
    state: Rc<LoopState>,
}

impl AnimationLoop {
    /// Start calling `step` with the frame timestamp (ms) on every animation frame.
    ///
    /// The first call happens on the next frame, not synchronously.
    pub fn start<F>(mut step: F) -> Result<Self, ConfettiError>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let window = web_sys::window().ok_or(ConfettiError::NoWindow)?;
        let state = Rc::new(LoopState {
            callback: RefCell::new(None),
            frame_id: Cell::new(None),
        });

        // Weak so the closure does not keep its own owner alive
        let weak: Weak<LoopState> = Rc::downgrade(&state);
        let frame_window = window.clone();
        let callback = Closure::wrap(Box::new(move |timestamp: f64| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.frame_id.set(None);

            if !step(timestamp) {
                log::debug!("Animation loop finished");
                return;
            }

            if let Err(e) = state.schedule(&frame_window) {
                log::warn!("Failed to schedule animation frame: {}", e);
            }
        }) as Box<dyn FnMut(f64)>);

        *state.callback.borrow_mut() = Some(callback);
        state.schedule(&window)?;
        log::debug!("Animation loop started");

        Ok(Self { state })
    }

    /// Whether a frame is currently scheduled
    pub fn is_running(&self) -> bool {
        self.state.frame_id.get().is_some()
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let Some(id) = self.state.frame_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
            log::debug!("Animation loop cancelled");
        }
        self.state.callback.borrow_mut().take();
    }
}
