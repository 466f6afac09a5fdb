use crate::constants::HOVER_TARGETS;
use crate::dom;
use site_core::HoverModulator;
use std::rc::Rc;
use web_sys as web;

/// Grow the ring while any link or button present at startup is hovered.
pub fn wire_hover_targets(document: &web::Document, hover: Rc<HoverModulator>) {
    let targets = dom::query_all(document, HOVER_TARGETS);
    for el in &targets {
        let enter = hover.clone();
        dom::listen(el, "mouseenter", move |_| enter.on_enter());
        let leave = hover.clone();
        dom::listen(el, "mouseleave", move |_| leave.on_leave());
    }
    log::debug!("[hover] {} targets", targets.len());
}
