use site_core::FrameScheduler;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame`-backed scheduler.
pub struct RafScheduler {
    window: web::Window,
}

impl RafScheduler {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) {
        let cb = Closure::once_into_js(move || callback());
        if let Err(e) = self.window.request_animation_frame(cb.unchecked_ref()) {
            log::error!("[frame] requestAnimationFrame failed: {:?}", e);
        }
    }
}
