//! 商品名自動修正侍 管理ダッシュボード (Leptos + WASM)

pub mod api;
mod app;
mod components;
pub mod session_storage;

pub use app::{client_config, AdminController, SignalState};

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
