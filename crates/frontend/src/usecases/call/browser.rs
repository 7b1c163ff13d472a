use super::CallPlatform;
use crate::shared::clipboard;
use crate::shared::error::PageError;

/// `CallPlatform` backed by `window.navigator` and `window.location`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPlatform;

impl CallPlatform for BrowserPlatform {
    fn user_agent(&self) -> String {
        web_sys::window()
            .and_then(|w| w.navigator().user_agent().ok())
            .unwrap_or_default()
    }

    fn dial(&self, tel_uri: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(tel_uri) {
                log::warn!("dial {} failed: {:?}", tel_uri, e);
            }
        }
    }

    fn write_clipboard(&self, text: &str, done: Box<dyn FnOnce(Result<(), PageError>)>) {
        clipboard::write_text(text, done);
    }
}
