use crate::constants::{CANVAS_CONTAINER_ID, FALLBACK_SHAPE_CLASS, SHAPES};
use crate::dom;
use crate::scene::{self, Three};
use rand::rngs::StdRng;
use rand::SeedableRng;
use site_core::backdrop::{fallback_shapes, shape_float};
use site_core::constants::{
    FALLBACK_GRADIENT, FALLBACK_SHAPE_COUNT, FALLBACK_SHAPE_FILL, FALLBACK_SHAPE_OPACITY,
};
use site_core::{SiteError, SiteResult};
use web_sys as web;

/// Give each `.shape` its own float timing so they drift out of phase.
fn animate_page_shapes(document: &web::Document, rng: &mut StdRng) {
    for shape in dom::query_all(document, SHAPES) {
        dom::set_style(&shape, "animation", &shape_float(rng).to_css());
    }
}

fn install_fallback(document: &web::Document, rng: &mut StdRng) -> SiteResult<()> {
    let container = dom::by_id(document, CANVAS_CONTAINER_ID)
        .ok_or_else(|| SiteError::missing(format!("#{CANVAS_CONTAINER_ID}")))?;
    dom::set_style(&container, "background", FALLBACK_GRADIENT);

    for shape in fallback_shapes(rng, FALLBACK_SHAPE_COUNT) {
        let Some(el) = dom::create_div(document) else {
            continue;
        };
        el.set_class_name(FALLBACK_SHAPE_CLASS);
        let size = format!("{:.1}px", shape.size_px);
        let left = format!("{:.2}%", shape.left_pct);
        let top = format!("{:.2}%", shape.top_pct);
        let animation = shape.animation.to_css();
        for (property, value) in [
            ("width", size.as_str()),
            ("height", size.as_str()),
            ("background", FALLBACK_SHAPE_FILL),
            ("border-radius", "50%"),
            ("position", "absolute"),
            ("left", left.as_str()),
            ("top", top.as_str()),
            ("opacity", FALLBACK_SHAPE_OPACITY),
            ("animation", animation.as_str()),
        ] {
            dom::set_style(&el, property, value);
        }
        _ = container.append_child(&el);
    }
    Ok(())
}

/// Float the page's shapes and fill `#canvas-container`: the particle scene
/// when the 3D library is loaded, the CSS-only backdrop otherwise or if the
/// scene cannot be built.
pub fn init(window: &web::Window, document: &web::Document) {
    let mut rng = StdRng::from_entropy();
    animate_page_shapes(document, &mut rng);

    match Three::load() {
        Some(three) => match scene::start(&three, window, document, &mut rng) {
            Ok(_) => return,
            Err(e) => log::error!("[backdrop] 3D scene failed: {e}; using fallback animation"),
        },
        None => log::info!("[backdrop] 3D scene library not loaded, using fallback animation"),
    }
    if let Err(e) = install_fallback(document, &mut rng) {
        log::warn!("[backdrop] {e}");
    }
}
