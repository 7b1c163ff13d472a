//! Console analytics: every event is written as one JSON line on the
//! `analytics` log target.

use serde::Serialize;
use serde_json::{json, Value};

pub const EVENT_CALL_CTA: &str = "click_call_cta";
pub const EVENT_VIEW_QUICK_VIEW: &str = "view_product_quickview";

/// `source` reported for the hero `#callBtn`.
pub const CALL_CTA_SOURCE: &str = "hero";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    pub event: String,
    /// Empty object when the caller passed no payload.
    pub payload: Value,
}

impl AnalyticsEvent {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.event.clone())
    }
}

/// Record an event with an optional payload mapping.
pub fn log_event(name: &str, payload: Option<Value>) -> AnalyticsEvent {
    let event = AnalyticsEvent {
        event: name.to_string(),
        payload: payload.unwrap_or_else(|| json!({})),
    };
    log::info!(target: "analytics", "TRACK EVENT {}", event.to_json());
    event
}
