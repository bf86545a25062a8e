//! RecycleVision Rewards Web App (Leptos + WASM)

mod app;
mod camera;
mod classifier;
mod components;
mod js_util;
mod notify;
mod storage;

pub use classifier::TransformersClassifier;
pub use storage::BrowserStorage;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
