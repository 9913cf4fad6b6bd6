#![cfg(target_arch = "wasm32")]
//! Browser front-end: the full-page blueprint loader and scroll-scrubbed
//! illustrations, drawn through Canvas2D.

mod canvas;
pub mod constants;
mod dom;
mod frame;
pub mod layout;
mod overlay;
mod scroll;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

thread_local! {
    static LOADER: RefCell<Option<frame::LoaderHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("room-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    match frame::start_loader(&document) {
        Ok(handle) => LOADER.with(|slot| *slot.borrow_mut() = handle),
        Err(e) => log::error!("[loader] disabled: {:?}", e),
    }
    scroll::attach_all(&document)?;
    Ok(())
}

/// Tear the loader down early (e.g. when the page navigates away).
#[wasm_bindgen(js_name = stopLoader)]
pub fn stop_loader() {
    LOADER.with(|slot| {
        if let Some(handle) = slot.borrow_mut().take() {
            handle.stop();
        }
    });
}

#[wasm_bindgen(js_name = loaderRunning)]
pub fn loader_running() -> bool {
    LOADER.with(|slot| slot.borrow().as_ref().is_some_and(|h| h.is_running()))
}
