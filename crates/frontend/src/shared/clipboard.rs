//! Clipboard access through the Web Clipboard API.
//!
//! Browsers on insecure origins do not expose `navigator.clipboard` at all,
//! so availability is checked before the write is attempted.

use crate::shared::error::PageError;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};

/// Copy text to the system clipboard and report the result to `done`.
///
/// `done` runs synchronously with `ClipboardUnavailable` when the API is
/// missing, otherwise after the write promise settles.
pub fn write_text<F>(text: &str, done: F)
where
    F: FnOnce(Result<(), PageError>) + 'static,
{
    let Some(window) = web_sys::window() else {
        done(Err(PageError::NoWindow));
        return;
    };
    let navigator = window.navigator();
    let has_clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false);
    if !has_clipboard {
        done(Err(PageError::ClipboardUnavailable));
        return;
    }

    let promise = navigator.clipboard().write_text(text);
    spawn_local(async move {
        let result = JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| PageError::ClipboardRejected(format!("{:?}", e)));
        done(result);
    });
}
