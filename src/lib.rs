#![cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod backdrop;
mod constants;
mod cursor;
mod dom;
mod events;
mod frame;
mod markers;
mod scene;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Resolves once the document has been parsed.
async fn dom_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let doc = document.clone();
    let ready = js_sys::Promise::new(&mut |resolve, _reject| {
        let on_ready = Closure::once_into_js(move || {
            _ = resolve.call0(&JsValue::NULL);
        });
        if let Err(e) =
            doc.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        {
            log::error!("[init] DOMContentLoaded listener failed: {:?}", e);
        }
    });
    JsFuture::from(ready)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom_ready(&document).await?;

    backdrop::init(&window, &document);

    events::wire_smooth_anchors(&document);
    events::wire_back_to_top(&window, &document);
    events::wire_navbar(&window, &document);
    events::wire_reveal(&window, &document);

    let _cursor = cursor::start(&window, &document);
    Ok(())
}
