//! Product quick-view dialog.
//!
//! `QuickViewService` owns the open dialog as a signal. The host layer is
//! mounted the first time a dialog opens; clearing the signal removes the
//! overlay together with its `<style>` node.

mod model;
mod view;

pub use model::{card_model, ProductCard, QuickView, MODEL_ATTRIBUTE};
pub use view::QUICK_VIEW_STYLE_ID;

use crate::config::SiteConfig;
use crate::shared::dom;
use crate::shared::error::PageError;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

/// Attaches the layer that renders the open dialog.
pub trait QuickViewMount {
    /// Called once, right before the first dialog opens.
    fn mount(&self, current: RwSignal<Option<QuickView>>, on_call: fn()) -> Result<(), PageError>;
}

/// Mounts the host into `<body>` and closes the dialog on Escape.
#[derive(Clone, Copy, Debug, Default)]
pub struct BodyMount;

impl QuickViewMount for BodyMount {
    fn mount(&self, current: RwSignal<Option<QuickView>>, on_call: fn()) -> Result<(), PageError> {
        let body = dom::body()?;
        leptos::mount::mount_to(body, move || {
            view! { <view::QuickViewHost current=current on_call=on_call /> }
        })
        .forget();
        listen_for_escape(current);
        Ok(())
    }
}

#[derive(Clone)]
pub struct QuickViewService {
    config: SiteConfig,
    current: RwSignal<Option<QuickView>>,
    on_call: fn(),
    mounted: Rc<Cell<bool>>,
    mount: Rc<dyn QuickViewMount>,
}

impl QuickViewService {
    /// `on_call` runs when the dialog's "Call Sales" button is clicked.
    pub fn new(config: SiteConfig, on_call: fn()) -> Self {
        Self::with_mount(config, on_call, Rc::new(BodyMount))
    }

    pub fn with_mount(config: SiteConfig, on_call: fn(), mount: Rc<dyn QuickViewMount>) -> Self {
        Self {
            config,
            current: RwSignal::new(None),
            on_call,
            mounted: Rc::new(Cell::new(false)),
            mount,
        }
    }

    /// Open the dialog for `model`, replacing one that is already open.
    ///
    /// Returns false (and touches nothing) for a blank model.
    pub fn open(&self, model: &str) -> bool {
        let Some(quick_view) = QuickView::for_model(model, &self.config) else {
            log::debug!("quick view skipped: empty model");
            return false;
        };
        if !self.ensure_mounted() {
            return false;
        }
        self.current.set(Some(quick_view));
        true
    }

    /// Open the dialog for the model of `card`, if it names one.
    pub fn open_card<C: ProductCard + ?Sized>(&self, card: Option<&C>) -> bool {
        match card_model(card) {
            Some(model) => self.open(&model),
            None => {
                log::debug!("view details clicked on a card without {}", MODEL_ATTRIBUTE);
                false
            }
        }
    }

    /// Close on the next tick; safe to call from the dialog's own handlers.
    pub fn close(&self) {
        close_deferred(self.current);
    }

    pub fn close_now(&self) {
        self.current.set(None);
    }

    pub fn is_open(&self) -> bool {
        self.current.with_untracked(|c| c.is_some())
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    pub fn open_model(&self) -> Option<String> {
        self.current
            .with_untracked(|c| c.as_ref().map(|qv| qv.model.clone()))
    }

    fn ensure_mounted(&self) -> bool {
        if self.mounted.get() {
            return true;
        }
        if let Err(e) = self.mount.mount(self.current, self.on_call) {
            log::warn!("quick view not mounted: {}", e);
            return false;
        }
        self.mounted.set(true);
        true
    }
}

/// Clear the open dialog on the next tick.
///
/// The overlay is usually removed from inside its own click dispatch;
/// deferring keeps Leptos from calling a dropped handler.
fn close_deferred(current: RwSignal<Option<QuickView>>) {
    spawn_local(async move {
        TimeoutFuture::new(0).await;
        current.set(None);
    });
}

fn listen_for_escape(current: RwSignal<Option<QuickView>>) {
    let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
        if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
            if keyboard_event.key() == "Escape" && current.with_untracked(|c| c.is_some()) {
                close_deferred(current);
            }
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(window) = web_sys::window() {
        if let Err(e) =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
        {
            log::warn!("quick view Escape listener not attached: {:?}", e);
        }
        // The host stays mounted for the page lifetime; keep the closure alive.
        closure.forget();
    }
}
