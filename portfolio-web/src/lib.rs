#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod config;
pub mod dom;
pub mod effects;
pub mod i18n;
pub mod storage;
pub mod styles;
pub mod surface;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // The configured level is applied once the site config is known.
    if console_log::init_with_level(log::Level::Trace).is_ok() {
        log::set_max_level(log::LevelFilter::Warn);
    }
    app::boot_when_ready();
}
