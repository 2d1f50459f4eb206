#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

mod constants;
pub mod core;
mod cursor;
mod dom;
mod events;
mod frame;
mod overlay;

use cursor::Cursor;

thread_local! {
    static MOUNTED: RefCell<Option<Cursor>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("soft-cursor starting");

    if let Err(e) = mount() {
        log::error!("mount error: {:?}", e);
    }
    Ok(())
}

fn mount() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let config = cursor::config_from_document(&document);
    // Tear down any previous instance before the new one attaches listeners.
    unmount();
    let cursor = Cursor::mount(config)?;
    MOUNTED.with(|m| *m.borrow_mut() = Some(cursor));
    Ok(())
}

/// Mount again after `unmount()`, re-reading config overrides.
#[wasm_bindgen]
pub fn remount() -> Result<(), JsValue> {
    mount().map_err(|e| JsValue::from_str(&format!("{:?}", e)))
}

/// Remove the cursor: listeners, frame loop and elements.
#[wasm_bindgen]
pub fn unmount() {
    let previous = MOUNTED.with(|m| m.borrow_mut().take());
    drop(previous);
}

/// Whether the cursor is currently mounted and tracking a fine pointer.
#[wasm_bindgen]
pub fn is_active() -> bool {
    MOUNTED.with(|m| m.borrow().as_ref().map(Cursor::is_active).unwrap_or(false))
}
