use crate::dom;
use glam::Vec2;
use site_core::scene::scene_pointer;
use site_core::PointerTracker;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn on_mousemove(document: &web::Document, mut handler: impl FnMut(Vec2) + 'static) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        handler(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
    }) as Box<dyn FnMut(_)>);

    if let Err(e) =
        document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())
    {
        log::warn!("[pointer] add mousemove listener failed: {:?}", e);
    }

    closure.forget();
}

/// Record every `mousemove` position (viewport px) into `tracker`.
pub fn wire_pointer_tracker(document: &web::Document, tracker: PointerTracker) {
    on_mousemove(document, move |client| tracker.record(client.x, client.y));
}

/// Record the pointer's offset from the viewport centre, in scene units.
/// Stays at the origin until the pointer first moves.
pub fn wire_scene_pointer(window: &web::Window, document: &web::Document, tracker: PointerTracker) {
    let window = window.clone();
    on_mousemove(document, move |client| {
        let p = scene_pointer(client, dom::viewport_size(&window));
        tracker.record(p.x, p.y);
    });
}
