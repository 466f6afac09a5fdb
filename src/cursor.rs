use crate::constants::{CURSOR_DOT_CLASS, CURSOR_OVERRIDE_PREFIX, CURSOR_RING_CLASS};
use crate::events;
use crate::frame::RafScheduler;
use crate::markers;
use site_core::config::OVERRIDE_KEYS;
use site_core::{
    CursorConfig, CursorFollower, FollowerLoop, HoverModulator, LoopHandle, Marker, MarkerSet,
};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Defaults, overridden by any valid `data-cursor-*` attribute on `<body>`.
pub fn read_config(document: &web::Document) -> CursorConfig {
    let mut cfg = CursorConfig::default();
    let Some(body) = document.body() else {
        return cfg;
    };
    for key in OVERRIDE_KEYS {
        let attr = format!("{CURSOR_OVERRIDE_PREFIX}{key}");
        if let Some(value) = body.get_attribute(&attr) {
            match cfg.apply_override(key, &value) {
                Ok(()) => log::info!("[cursor] {} = {}", attr, value),
                Err(e) => log::warn!("[cursor] ignoring {}: {}", attr, e),
            }
        }
    }
    cfg
}

/// Create the markers, wire pointer and hover events, and start the follower
/// loop. The loop runs for the lifetime of the page.
pub fn start(window: &web::Window, document: &web::Document) -> LoopHandle {
    let follower = CursorFollower::new(read_config(document));

    let ring = markers::ensure_marker(document, CURSOR_RING_CLASS)
        .map(|m| Rc::new(m) as Rc<dyn Marker>);
    let dot = markers::ensure_marker(document, CURSOR_DOT_CLASS)
        .map(|m| Rc::new(m) as Rc<dyn Marker>);

    let hover = Rc::new(HoverModulator::new(&follower, ring.clone()));
    hover.reset();

    events::wire_pointer_tracker(document, follower.tracker());
    events::wire_hover_targets(document, hover);

    let handle = FollowerLoop::start(
        Rc::new(RefCell::new(follower)),
        MarkerSet::new(ring, dot),
        Rc::new(RafScheduler::new(window.clone())),
    );
    log::info!("[cursor] follower loop started");
    handle
}
