//! Indoor Cycling Admin Entry Point

mod app;
mod components;
mod context;
mod hooks;
mod pages;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;
use rolling_logger::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init_logger("IndoorAdmin", LevelFilter::INFO) {
        web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
    }
    mount_to_body(App);
}
