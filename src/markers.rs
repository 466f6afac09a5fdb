use crate::dom;
use site_core::Marker;
use web_sys as web;

/// Cursor marker backed by an absolutely positioned element.
pub struct DomMarker {
    el: web::HtmlElement,
}

impl Marker for DomMarker {
    fn set_translate(&self, x: f32, y: f32) {
        dom::set_style(&self.el, "transform", &format!("translate({x}px, {y}px)"));
    }

    fn set_size(&self, px: f32) {
        let v = format!("{px}px");
        dom::set_style(&self.el, "width", &v);
        dom::set_style(&self.el, "height", &v);
    }

    fn set_border_color(&self, color: &str) {
        dom::set_style(&self.el, "border-color", color);
    }
}

/// Adopt the page's element with `class`, or append a fresh one to `<body>`.
pub fn ensure_marker(document: &web::Document, class: &str) -> Option<DomMarker> {
    if let Some(el) = dom::query_one(document, &format!(".{class}")) {
        return Some(DomMarker { el });
    }
    let body = document.body()?;
    let el = dom::create_div(document)?;
    el.class_list().add_1(class).ok()?;
    body.append_child(&el).ok()?;
    Some(DomMarker { el })
}
