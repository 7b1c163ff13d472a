//! Toast notifications.
//!
//! One banner per page: the host is mounted into `<body>` on the first
//! `show` and reused afterwards. Only the latest hide timer is kept alive.

mod state;

pub use state::{ToastState, ToastTicket, DEFAULT_TOAST_TIMEOUT_MS};

use crate::shared::dom;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone)]
pub struct Toaster {
    state: RwSignal<ToastState>,
    mounted: Rc<Cell<bool>>,
    hide_timer: Rc<RefCell<Option<Timeout>>>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ToastState::default()),
            mounted: Rc::new(Cell::new(false)),
            hide_timer: Rc::new(RefCell::new(None)),
        }
    }

    /// Show `message` and hide it after `timeout_ms` (3000 by default).
    pub fn show(&self, message: &str, timeout_ms: Option<u32>) {
        self.ensure_mounted();

        let mut ticket = None;
        self.state.update(|s| ticket = Some(s.show(message, timeout_ms)));
        let Some(ticket) = ticket else {
            return;
        };

        let state = self.state;
        let timer = Timeout::new(ticket.timeout_ms, move || {
            state.update(|s| {
                s.expire(ticket);
            });
        });
        // Dropping the previous Timeout cancels it.
        self.hide_timer.replace(Some(timer));
    }

    pub fn state(&self) -> ToastState {
        self.state.get_untracked()
    }

    fn ensure_mounted(&self) {
        if self.mounted.get() {
            return;
        }
        let Ok(body) = dom::body() else {
            log::warn!("toast not mounted: document has no body");
            return;
        };
        let state = self.state;
        leptos::mount::mount_to(body, move || view! { <ToastHost state=state /> }).forget();
        self.mounted.set(true);
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

pub const TOAST_ELEMENT_ID: &str = "lw-toast";

const TOAST_STYLE: &str = "position: fixed; bottom: 20px; left: 50%; transform: translateX(-50%); \
    background: #2b2b2b; color: #fff; padding: 10px 16px; border-radius: 8px; \
    box-shadow: 0 8px 20px rgba(0,0,0,.2); z-index: 400; transition: opacity 0.3s ease;";

#[component]
fn ToastHost(state: RwSignal<ToastState>) -> impl IntoView {
    let style = move || {
        let opacity = if state.with(|s| s.is_visible()) { 1 } else { 0 };
        format!("{TOAST_STYLE} opacity: {opacity};")
    };

    view! {
        <div
            id=TOAST_ELEMENT_ID
            role="status"
            aria-live="polite"
            style=style
        >
            {move || state.with(|s| s.message().to_string())}
        </div>
    }
}
