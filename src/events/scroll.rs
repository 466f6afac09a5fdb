use crate::constants::{BACK_TO_TOP_ID, HIDDEN_CLASS, NAVBAR, NAVBAR_SOLID_CLASSES, REVEAL_TARGETS};
use crate::dom;
use site_core::constants::REVEAL_TRANSITION;
use site_core::scroll::{back_to_top_visible, navbar_solid, should_reveal, RevealState};
use site_core::SiteError;
use std::rc::Rc;
use web_sys as web;

fn document_scroll_top(document: &web::Document) -> f64 {
    let body = document.body().map(|b| b.scroll_top()).unwrap_or(0);
    let root = document.document_element().map(|e| e.scroll_top()).unwrap_or(0);
    body.max(root) as f64
}

fn smooth_scroll_to_top(window: &web::Window) {
    let opts = web::ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(web::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

/// Show `#back-to-top` once the page has scrolled a little; clicking it
/// scrolls smoothly home.
pub fn wire_back_to_top(window: &web::Window, document: &web::Document) {
    let Some(button) = dom::by_id(document, BACK_TO_TOP_ID) else {
        log::warn!("[scroll] {}", SiteError::missing(format!("#{BACK_TO_TOP_ID}")));
        return;
    };

    let doc = document.clone();
    let toggled = button.clone();
    dom::listen(window, "scroll", move |_| {
        let classes = toggled.class_list();
        _ = if back_to_top_visible(document_scroll_top(&doc)) {
            classes.remove_1(HIDDEN_CLASS)
        } else {
            classes.add_1(HIDDEN_CLASS)
        };
    });

    let w = window.clone();
    dom::listen(&button, "click", move |ev| {
        ev.prevent_default();
        smooth_scroll_to_top(&w);
    });
}

pub fn wire_navbar(window: &web::Window, document: &web::Document) {
    let Some(navbar) = dom::query_one(document, NAVBAR) else {
        log::warn!("[scroll] {}", SiteError::missing(NAVBAR));
        return;
    };
    let w = window.clone();
    dom::listen(window, "scroll", move |_| {
        let solid = navbar_solid(w.scroll_y().unwrap_or(0.0));
        let classes = navbar.class_list();
        for class in NAVBAR_SOLID_CLASSES {
            _ = if solid {
                classes.add_1(class)
            } else {
                classes.remove_1(class)
            };
        }
    });
}

fn apply_reveal(el: &web::HtmlElement, state: RevealState) {
    dom::set_style(el, "opacity", state.opacity());
    dom::set_style(el, "transform", &state.transform());
}

fn reveal_in_view(window: &web::Window, targets: &[web::HtmlElement]) {
    let Some(viewport_h) = window.inner_height().ok().and_then(|v| v.as_f64()) else {
        return;
    };
    for el in targets {
        if should_reveal(el.get_bounding_client_rect().top(), viewport_h) {
            apply_reveal(el, RevealState::Shown);
        }
    }
}

/// Cards and timeline entries start hidden and fade in as they scroll into
/// view. Once shown they stay shown.
pub fn wire_reveal(window: &web::Window, document: &web::Document) {
    let targets = Rc::new(dom::query_all(document, REVEAL_TARGETS));
    for el in targets.iter() {
        apply_reveal(el, RevealState::Hidden);
        dom::set_style(el, "transition", REVEAL_TRANSITION);
    }
    log::debug!("[scroll] {} reveal targets", targets.len());

    let w = window.clone();
    let on_scroll = targets.clone();
    dom::listen(window, "scroll", move |_| reveal_in_view(&w, &on_scroll));
    reveal_in_view(window, &targets);
}
