pub mod analytics;
pub mod app;
pub mod config;
pub mod debug;
pub mod layout;
pub mod shared;
pub mod usecases;

use config::SiteConfig;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    if let Err(e) = app::bind_when_ready(SiteConfig::default()) {
        log::error!("page behaviours not bound: {}", e);
    }
}
