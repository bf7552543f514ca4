// Handles of the timers driving a round (countdown interval, pop timeout chain)
// and the animation frame loop.
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

#[derive(Debug, Default)]
pub struct RoundTimers {
    countdown: Option<i32>,
    pop: Option<i32>,
}

impl RoundTimers {
    pub fn set_countdown(&mut self, id: i32) {
        self.countdown = Some(id);
    }

    pub fn set_pop(&mut self, id: i32) {
        self.pop = Some(id);
    }

    pub fn is_armed(&self) -> bool {
        self.countdown.is_some() || self.pop.is_some()
    }

    /// Cancel whatever is still pending. Closures stay owned by the caller.
    pub fn clear(&mut self, window: &Window) {
        if let Some(id) = self.countdown.take() {
            window.clear_interval_with_handle(id);
        }
        if let Some(id) = self.pop.take() {
            window.clear_timeout_with_handle(id);
        }
    }
}

/// requestAnimationFrame loop that is only scheduled while something moves.
#[derive(Default)]
pub struct FrameLoop {
    callback: Option<Closure<dyn FnMut()>>,
    pending: Option<i32>,
}

impl FrameLoop {
    pub fn install(&mut self, callback: Closure<dyn FnMut()>) {
        self.callback = Some(callback);
    }

    /// Call first thing inside the callback: the queued request has fired.
    pub fn frame_started(&mut self) {
        self.pending = None;
    }

    /// Queue the next frame unless one is already queued.
    pub fn request(&mut self, window: &Window) {
        if self.pending.is_some() {
            return;
        }
        if let Some(cb) = &self.callback {
            if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                self.pending = Some(id);
            }
        }
    }

    /// Cancel any queued frame and drop the callback.
    pub fn stop(&mut self, window: &Window) {
        if let Some(id) = self.pending.take() {
            let _ = window.cancel_animation_frame(id);
        }
        self.callback = None;
    }
}
