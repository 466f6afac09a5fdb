use crate::constants::ANCHOR_LINKS;
use crate::dom;
use site_core::scroll::anchor_target_id;
use web_sys as web;

/// In-page links scroll smoothly to their target instead of jumping.
pub fn wire_smooth_anchors(document: &web::Document) {
    for anchor in dom::query_all(document, ANCHOR_LINKS) {
        let doc = document.clone();
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |ev| {
            ev.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            let target = anchor_target_id(&href).and_then(|id| doc.get_element_by_id(id));
            match target {
                Some(el) => {
                    let opts = web::ScrollIntoViewOptions::new();
                    opts.set_behavior(web::ScrollBehavior::Smooth);
                    el.scroll_into_view_with_scroll_into_view_options(&opts);
                }
                None => log::debug!("[anchors] no target for {:?}", href),
            }
        });
    }
}
