//! Oil-Change Records Frontend
//!
//! Binds the rental and maintenance pages to the records API. The page
//! markup loads the wasm module and calls `initPage(config)` once.

pub mod api;
mod components;
pub mod config;
pub mod controller;
mod dom;
pub mod error;
pub mod i18n;
pub mod models;
pub mod table;

use log::LevelFilter;
use wasm_bindgen::prelude::*;

use config::PageConfig;
use error::UiError;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed
    let _ = console_logger::init(LevelFilter::Info);
}

/// Bind the current page. Errors surface as a JS exception.
#[wasm_bindgen(js_name = initPage)]
pub fn init_page(config: JsValue) -> Result<(), JsValue> {
    let config = PageConfig::from_js(config).map_err(UiError::from)?;
    if let Some(level) = config.log_level {
        console_logger::set_level(level);
    }
    dom::bind_page(&config)?;
    Ok(())
}
