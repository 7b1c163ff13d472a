//! Debug surface for poking at the page from the browser console.
//!
//! Published as `window.LimboWorks` unless the query string mentions `no-debug`.

use crate::app::PageHandle;
use crate::shared::dom;
use wasm_bindgen::prelude::*;

pub const DEBUG_OPT_OUT_FLAG: &str = "no-debug";
pub const DEBUG_GLOBAL: &str = "LimboWorks";

/// Whether the raw query string leaves debugging on.
///
/// Any occurrence of `no-debug` turns it off, whether it is a key, a value
/// or part of one. Percent-encoded text is decoded first.
pub fn debug_enabled(query: &str) -> bool {
    let decoded = urlencoding::decode(query)
        .map(|q| q.into_owned())
        .unwrap_or_else(|_| query.to_string());
    !query.contains(DEBUG_OPT_OUT_FLAG) && !decoded.contains(DEBUG_OPT_OUT_FLAG)
}

#[wasm_bindgen]
pub struct SiteDebug {
    page: PageHandle,
}

#[wasm_bindgen]
impl SiteDebug {
    #[wasm_bindgen(js_name = openQuickView)]
    pub fn open_quick_view(&self, model: Option<String>) -> bool {
        self.page.open_quick_view(model.as_deref().unwrap_or_default())
    }

    #[wasm_bindgen(js_name = closeQuickView)]
    pub fn close_quick_view(&self) {
        self.page.close_quick_view();
    }

    #[wasm_bindgen(js_name = showToast)]
    pub fn show_toast(&self, message: String, timeout_ms: Option<u32>) {
        self.page.show_toast(&message, timeout_ms);
    }

    /// Logs the event and returns the JSON line that was written.
    #[wasm_bindgen(js_name = logEvent)]
    pub fn log_event(&self, name: String, payload: JsValue) -> Result<String, JsValue> {
        let payload = if payload.is_undefined() || payload.is_null() {
            None
        } else {
            Some(
                serde_wasm_bindgen::from_value::<serde_json::Value>(payload)
                    .map_err(|e| JsValue::from_str(&e.to_string()))?,
            )
        };
        Ok(self.page.log_event(&name, payload).to_json())
    }
}

/// Expose `page` as `window.LimboWorks` when the URL allows it.
pub fn publish_if_enabled(page: &PageHandle) {
    let Ok(window) = dom::window() else {
        return;
    };
    let query = window.location().search().unwrap_or_default();
    if !debug_enabled(&query) {
        log::debug!("debug handle not published ({})", DEBUG_OPT_OUT_FLAG);
        return;
    }
    let handle = JsValue::from(SiteDebug { page: page.clone() });
    if js_sys::Reflect::set(&window, &JsValue::from_str(DEBUG_GLOBAL), &handle).is_err() {
        log::warn!("could not publish window.{}", DEBUG_GLOBAL);
    }
}
