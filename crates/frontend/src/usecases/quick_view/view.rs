use super::{close_deferred, QuickView};
use leptos::ev;
use leptos::prelude::*;

pub const QUICK_VIEW_STYLE_ID: &str = "lw-modal-style";

const QUICK_VIEW_CSS: &str = r#"
.lw-modal{position:fixed;inset:0;display:flex;align-items:center;justify-content:center;background:rgba(10,10,10,.55);z-index:300}
.lw-modal-panel{background:#fff;padding:22px;border-radius:12px;max-width:520px;width:90%;box-shadow:0 12px 40px rgba(0,0,0,.3);color:#2b2b2b;position:relative}
.lw-modal-close{position:absolute;right:18px;top:18px;border:0;background:transparent;font-size:20px;cursor:pointer}
.lw-modal-actions{margin-top:14px;display:flex;gap:10px}
"#;

/// True when the click landed on the overlay itself, not inside the panel.
pub(super) fn is_backdrop_click<T: PartialEq>(target: Option<T>, current_target: Option<T>) -> bool {
    match (target, current_target) {
        (Some(t), Some(ct)) => t == ct,
        _ => false,
    }
}

/// Renders the open dialog, or nothing.
///
/// When closed, Leptos keeps one empty placeholder for this slot in `<body>`.
#[component]
pub fn QuickViewHost(current: RwSignal<Option<QuickView>>, on_call: fn()) -> impl IntoView {
    move || {
        current.get().map(|quick_view| {
            view! { <QuickViewDialog quick_view=quick_view current=current on_call=on_call /> }
        })
    }
}

#[component]
fn QuickViewDialog(
    quick_view: QuickView,
    current: RwSignal<Option<QuickView>>,
    on_call: fn(),
) -> impl IntoView {
    let close = move |_: ev::MouseEvent| close_deferred(current);

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        if is_backdrop_click(ev.target(), ev.current_target()) {
            close_deferred(current);
        }
    };

    let call_sales = move |_: ev::MouseEvent| on_call();

    let QuickView {
        model,
        title,
        description,
    } = quick_view;

    view! {
        <style id=QUICK_VIEW_STYLE_ID>{QUICK_VIEW_CSS}</style>
        <div
            class="lw-modal"
            data-model=model
            role="dialog"
            aria-modal="true"
            on:click=handle_overlay_click
        >
            <div class="lw-modal-panel" role="document">
                <button class="lw-modal-close" aria-label="Close" on:click=close>
                    "×"
                </button>
                <h3>{title}</h3>
                <p>{description}</p>
                <div class="lw-modal-actions">
                    <button class="btn btn-primary lw-modal-call" on:click=call_sales>
                        "Call Sales"
                    </button>
                    <button class="btn btn-ghost lw-modal-close-2" on:click=close>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
