#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod app;
mod constants;
mod dom;
mod events;
mod frame;
mod sink;
mod views;

use constants::ROOT_ID;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("action-items-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("[init] already started; ignoring");
        return Ok(());
    }

    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window or document"))?;
    let root = document
        .get_element_by_id(ROOT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", ROOT_ID))?;

    let app = Rc::new(RefCell::new(app::App::new(window.clone(), document, root)));
    events::wire_popstate(&window, &app);
    app::mount_location(&app);

    // Particle expiry and scroll effects run off requestAnimationFrame
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(app)));
    frame::start_loop(frame_ctx);
    Ok(())
}
