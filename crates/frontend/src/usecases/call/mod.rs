//! Call-to-action: dial on phones, copy the number everywhere else.

mod browser;

pub use browser::BrowserPlatform;

use crate::config::SiteConfig;
use crate::shared::device::is_mobile_user_agent;
use crate::shared::error::PageError;

/// Browser capabilities the call flow needs.
pub trait CallPlatform {
    fn user_agent(&self) -> String;

    /// Navigate to a `tel:` URI.
    fn dial(&self, tel_uri: &str);

    /// Write `text` to the clipboard and report the outcome to `done`.
    fn write_clipboard(&self, text: &str, done: Box<dyn FnOnce(Result<(), PageError>)>);
}

/// Which button started the call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallContext {
    /// The hero `#callBtn`.
    Header,
    /// A `.call-sales` button on a product card.
    Sales,
    /// The "Call Sales" button inside the quick-view dialog.
    QuickView,
}

impl CallContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallContext::Header => "header",
            CallContext::Sales => "sales",
            CallContext::QuickView => "quick_view",
        }
    }

    pub fn copied_message(&self, config: &SiteConfig) -> String {
        match self {
            CallContext::Header => {
                format!("Phone number {} copied to clipboard — call us!", config.phone)
            }
            CallContext::Sales => format!("Sales number {}.", config.phone),
            CallContext::QuickView => format!("Phone number {} copied", config.phone),
        }
    }

    /// Shown when the number could not be copied.
    pub fn fallback_message(&self, config: &SiteConfig) -> String {
        format!("Call us at {}", config.phone)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallOutcome {
    Dialed,
    CopyRequested,
}

/// Dial on mobile, otherwise copy the number and report through `notify`.
///
/// `notify` receives the confirmation, or the fallback message with the
/// number when the clipboard is missing or refuses the write.
pub fn place_call<P, N>(
    platform: &P,
    config: &SiteConfig,
    context: CallContext,
    notify: N,
) -> CallOutcome
where
    P: CallPlatform + ?Sized,
    N: FnOnce(String) + 'static,
{
    if is_mobile_user_agent(&platform.user_agent()) {
        platform.dial(&config.tel_uri());
        return CallOutcome::Dialed;
    }

    let copied = context.copied_message(config);
    let fallback = context.fallback_message(config);
    platform.write_clipboard(
        &config.phone,
        Box::new(move |result| match result {
            Ok(()) => notify(copied),
            Err(e) => {
                log::warn!("copy failed, showing number instead: {}", e);
                notify(fallback)
            }
        }),
    );
    CallOutcome::CopyRequested
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    const IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) Mobile/15E148";
    const ANDROID: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) Mobile";
    const DESKTOP: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) Chrome/120.0";

    enum Clipboard {
        Works,
        Missing,
        Rejects,
    }

    struct FakePlatform {
        user_agent: &'static str,
        clipboard: Clipboard,
        dialed: RefCell<Vec<String>>,
        copied: RefCell<Vec<String>>,
    }

    impl FakePlatform {
        fn new(user_agent: &'static str, clipboard: Clipboard) -> Self {
            Self {
                user_agent,
                clipboard,
                dialed: RefCell::new(Vec::new()),
                copied: RefCell::new(Vec::new()),
            }
        }
    }

    impl CallPlatform for FakePlatform {
        fn user_agent(&self) -> String {
            self.user_agent.to_string()
        }

        fn dial(&self, tel_uri: &str) {
            self.dialed.borrow_mut().push(tel_uri.to_string());
        }

        fn write_clipboard(&self, text: &str, done: Box<dyn FnOnce(Result<(), PageError>)>) {
            match self.clipboard {
                Clipboard::Works => {
                    self.copied.borrow_mut().push(text.to_string());
                    done(Ok(()));
                }
                Clipboard::Missing => done(Err(PageError::ClipboardUnavailable)),
                Clipboard::Rejects => {
                    done(Err(PageError::ClipboardRejected("NotAllowedError".into())))
                }
            }
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl FnOnce(String) + 'static) {
        let toasts = Rc::new(RefCell::new(Vec::new()));
        let sink = toasts.clone();
        (toasts, move |msg: String| sink.borrow_mut().push(msg))
    }

    #[test]
    fn test_mobile_dials_without_clipboard() {
        let config = SiteConfig::default();
        for ua in [IPHONE, ANDROID] {
            for context in [CallContext::Header, CallContext::Sales, CallContext::QuickView] {
                let platform = FakePlatform::new(ua, Clipboard::Works);
                let (toasts, notify) = recorder();

                let outcome = place_call(&platform, &config, context, notify);

                assert_eq!(outcome, CallOutcome::Dialed);
                assert_eq!(*platform.dialed.borrow(), vec![config.tel_uri()]);
                assert!(platform.copied.borrow().is_empty());
                assert!(toasts.borrow().is_empty());
            }
        }
    }

    #[test]
    fn test_desktop_copies_exact_number() {
        let config = SiteConfig::default();
        let platform = FakePlatform::new(DESKTOP, Clipboard::Works);
        let (toasts, notify) = recorder();

        let outcome = place_call(&platform, &config, CallContext::Header, notify);

        assert_eq!(outcome, CallOutcome::CopyRequested);
        assert!(platform.dialed.borrow().is_empty());
        assert_eq!(*platform.copied.borrow(), vec![config.phone.clone()]);
        let toasts = toasts.borrow();
        assert_eq!(toasts.len(), 1);
        assert!(toasts[0].contains(&config.phone));
        assert_eq!(toasts[0], CallContext::Header.copied_message(&config));
    }

    #[test]
    fn test_sales_message_differs_from_header() {
        let config = SiteConfig::default();
        let platform = FakePlatform::new(DESKTOP, Clipboard::Works);
        let (toasts, notify) = recorder();

        place_call(&platform, &config, CallContext::Sales, notify);

        let toasts = toasts.borrow();
        assert_eq!(toasts[0], CallContext::Sales.copied_message(&config));
        assert_eq!(toasts[0], "Sales number +2348126876435.");
    }

    #[test]
    fn test_copied_messages_per_button() {
        let config = SiteConfig::default();
        assert_eq!(
            CallContext::Header.copied_message(&config),
            "Phone number +2348126876435 copied to clipboard — call us!"
        );
        assert_eq!(
            CallContext::QuickView.copied_message(&config),
            "Phone number +2348126876435 copied"
        );
    }

    #[test]
    fn test_quick_view_call_dials_on_mobile() {
        let config = SiteConfig::default();
        let platform = FakePlatform::new(ANDROID, Clipboard::Works);
        let (toasts, notify) = recorder();

        let outcome = place_call(&platform, &config, CallContext::QuickView, notify);

        assert_eq!(outcome, CallOutcome::Dialed);
        assert_eq!(*platform.dialed.borrow(), vec!["tel:+2348126876435".to_string()]);
        assert!(toasts.borrow().is_empty());
    }

    #[test]
    fn test_clipboard_failure_falls_back_to_number() {
        let config = SiteConfig::default();
        for context in [CallContext::Header, CallContext::Sales, CallContext::QuickView] {
            for clipboard in [Clipboard::Missing, Clipboard::Rejects] {
                let platform = FakePlatform::new(DESKTOP, clipboard);
                let (toasts, notify) = recorder();

                let outcome = place_call(&platform, &config, context, notify);

                assert_eq!(outcome, CallOutcome::CopyRequested);
                assert!(platform.copied.borrow().is_empty());
                assert_eq!(*toasts.borrow(), vec!["Call us at +2348126876435".to_string()]);
            }
        }
    }
}
