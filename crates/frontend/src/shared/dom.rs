//! Null-safe element lookup and listener helpers.
//!
//! Every lookup returns `Option`/`Vec`; callers skip a behaviour when the
//! markup is not there.

use crate::shared::error::PageError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, MouseEvent, Window};

pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub fn document() -> Result<Document, PageError> {
    window()?.document().ok_or(PageError::NoDocument)
}

pub fn body() -> Result<HtmlElement, PageError> {
    document()?.body().ok_or(PageError::NoBody)
}

pub fn by_id(id: &str) -> Option<Element> {
    let found = document().ok()?.get_element_by_id(id);
    if found.is_none() {
        log::debug!("#{} not found, skipping", id);
    }
    found
}

/// All elements matching `selector`, in document order.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Ok(list) = document().and_then(|d| {
        d.query_selector_all(selector)
            .map_err(|_| PageError::NoDocument)
    }) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attach a click listener for the lifetime of the page.
pub fn on_click<F>(target: &EventTarget, handler: F)
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    if let Err(e) = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
    {
        log::warn!("click listener not attached: {:?}", e);
    }
    // Listeners live as long as the page; nothing ever detaches them.
    closure.forget();
}

/// Run `f` once the document has been parsed.
pub fn on_ready<F>(f: F) -> Result<(), PageError>
where
    F: FnOnce() + 'static,
{
    let document = document()?;
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let closure = Closure::once(f);
    if let Err(e) = document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())
    {
        log::warn!("DOMContentLoaded listener not attached: {:?}", e);
    }
    closure.forget();
    Ok(())
}
