//! Page behaviour controller: binds every interactive element once the
//! document is ready.

use crate::analytics::{
    self, AnalyticsEvent, CALL_CTA_SOURCE, EVENT_CALL_CTA, EVENT_VIEW_QUICK_VIEW,
};
use crate::config::SiteConfig;
use crate::debug;
use crate::layout::footer;
use crate::shared::dom;
use crate::shared::error::PageError;
use crate::shared::toast::Toaster;
use crate::usecases::call::{place_call, BrowserPlatform, CallContext, CallOutcome, CallPlatform};
use crate::usecases::quick_view::QuickViewService;
use serde_json::{json, Value};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};

pub const CALL_BUTTON_ID: &str = "callBtn";
pub const LEARN_BUTTON_ID: &str = "learnBtn";
pub const ABOUT_SECTION_ID: &str = "about";
pub const PRODUCT_CARD_SELECTOR: &str = ".product-card";
pub const VIEW_DETAILS_SELECTOR: &str = ".view-details";
pub const CALL_SALES_SELECTOR: &str = ".call-sales";

thread_local! {
    static PAGE: RefCell<Option<PageHandle>> = const { RefCell::new(None) };
}

/// Everything the page behaviours share.
///
/// Also the entry point for driving the page from tests and the debug console.
#[derive(Clone)]
pub struct PageHandle {
    config: Rc<SiteConfig>,
    platform: Rc<dyn CallPlatform>,
    toaster: Toaster,
    quick_view: QuickViewService,
}

impl PageHandle {
    pub fn new(config: SiteConfig, platform: Rc<dyn CallPlatform>) -> Self {
        Self {
            quick_view: QuickViewService::new(config.clone(), call_from_quick_view),
            config: Rc::new(config),
            platform,
            toaster: Toaster::new(),
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn toaster(&self) -> &Toaster {
        &self.toaster
    }

    pub fn quick_view(&self) -> &QuickViewService {
        &self.quick_view
    }

    /// Dial or copy the configured number; the result is shown as a toast.
    pub fn call(&self, context: CallContext) -> CallOutcome {
        let toaster = self.toaster.clone();
        place_call(self.platform.as_ref(), &self.config, context, move |message| {
            toaster.show(&message, None)
        })
    }

    pub fn open_quick_view(&self, model: &str) -> bool {
        self.quick_view.open(model)
    }

    pub fn close_quick_view(&self) {
        self.quick_view.close();
    }

    pub fn show_toast(&self, message: &str, timeout_ms: Option<u32>) {
        self.toaster.show(message, timeout_ms);
    }

    pub fn log_event(&self, name: &str, payload: Option<Value>) -> AnalyticsEvent {
        analytics::log_event(name, payload)
    }
}

/// "Call Sales" inside the quick-view dialog.
fn call_from_quick_view() {
    let page = PAGE.with(|p| p.borrow().clone());
    match page {
        Some(page) => {
            page.call(CallContext::QuickView);
        }
        None => log::debug!("quick view call ignored: page not bound"),
    }
}

/// Bind the page as soon as the document has been parsed.
pub fn bind_when_ready(config: SiteConfig) -> Result<(), PageError> {
    dom::on_ready(move || match mount_page(config) {
        Ok(_) => log::debug!("page behaviours bound"),
        Err(e) => log::error!("page behaviours not bound: {}", e),
    })
}

/// Bind all behaviours with the browser platform.
///
/// Binding happens once per page; later calls return the first handle.
pub fn mount_page(config: SiteConfig) -> Result<PageHandle, PageError> {
    if let Some(page) = PAGE.with(|p| p.borrow().clone()) {
        log::debug!("page already bound, ignoring new config");
        return Ok(page);
    }
    dom::document()?;

    let page = PageHandle::new(config, Rc::new(BrowserPlatform));
    footer::render_year();
    bind_call_button(&page);
    bind_learn_more();
    bind_product_cards(&page);
    debug::publish_if_enabled(&page);

    PAGE.with(|p| *p.borrow_mut() = Some(page.clone()));
    Ok(page)
}

fn bind_call_button(page: &PageHandle) {
    let Some(button) = dom::by_id(CALL_BUTTON_ID) else {
        return;
    };
    let page = page.clone();
    dom::on_click(&button, move |_| {
        analytics::log_event(EVENT_CALL_CTA, Some(json!({ "source": CALL_CTA_SOURCE })));
        page.call(CallContext::Header);
    });
}

fn bind_learn_more() {
    let Some(button) = dom::by_id(LEARN_BUTTON_ID) else {
        return;
    };
    dom::on_click(&button, move |_| {
        // Looked up on click so late-rendered sections are still found.
        if let Some(section) = dom::by_id(ABOUT_SECTION_ID) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });
}

fn bind_product_cards(page: &PageHandle) {
    for button in dom::query_all(VIEW_DETAILS_SELECTOR) {
        let page = page.clone();
        dom::on_click(&button, move |ev| {
            analytics::log_event(EVENT_VIEW_QUICK_VIEW, None);
            page.quick_view.open_card(clicked_card(&ev).as_ref());
        });
    }

    for button in dom::query_all(CALL_SALES_SELECTOR) {
        let page = page.clone();
        dom::on_click(&button, move |_| {
            page.call(CallContext::Sales);
        });
    }
}

/// Product card enclosing the clicked button.
fn clicked_card(ev: &MouseEvent) -> Option<Element> {
    let button = ev.current_target()?.dyn_into::<Element>().ok()?;
    button.closest(PRODUCT_CARD_SELECTOR).ok().flatten()
}
