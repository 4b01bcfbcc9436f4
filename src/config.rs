//! Runtime Configuration
//!
//! The host page may set `window.__PRODUCT_FEED__` before the bundle loads;
//! any key it omits keeps its default.

use infinite_scroll::FeedConfig;
use log::{debug, info, warn};
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "__PRODUCT_FEED__";

/// Read the page-provided config, falling back to defaults on any problem.
pub fn load() -> FeedConfig {
    let Some(window) = web_sys::window() else {
        return FeedConfig::default();
    };

    let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .unwrap_or(JsValue::UNDEFINED);
    if raw.is_undefined() || raw.is_null() {
        debug!(target: "config", "No {} set, using defaults", CONFIG_GLOBAL);
        return FeedConfig::default();
    }

    let config = match serde_wasm_bindgen::from_value::<FeedConfig>(raw) {
        Ok(config) => config,
        Err(e) => {
            warn!(target: "config", "Ignoring malformed {}: {}", CONFIG_GLOBAL, e);
            return FeedConfig::default();
        }
    };

    match config.validate() {
        Ok(()) => {
            info!(
                target: "config",
                "Catalog {} (page size {}, disabled={})",
                config.base_url, config.page_size, config.disabled
            );
            config
        }
        Err(e) => {
            warn!(target: "config", "Ignoring invalid {}: {}", CONFIG_GLOBAL, e);
            FeedConfig::default()
        }
    }
}
