//! Analytics events sent by the site
//!
//! Event names and payloads follow the Google Analytics conventions the
//! marketing team reports on. The tracker only shapes events; delivery is up
//! to the [`AnalyticsSink`] it wraps.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Value, json};

use super::ports::AnalyticsSink;

/// Currency attached to lead and conversion events
pub const CURRENCY: &str = "CAD";

/// Nominal value of a demo request lead
pub const LEAD_VALUE: u32 = 1000;

/// Form name reported with submit attempts
pub const DEMO_FORM_NAME: &str = "demo_request";

/// Conversion label for a submitted demo form
pub const DEMO_CONVERSION_LABEL: &str = "demo_form_submission";

#[derive(Serialize)]
struct ConversionParams<'a> {
    send_to: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<f64>,
    currency: &'a str,
}

/// Shapes analytics events and forwards them to a sink
#[derive(Clone)]
pub struct AnalyticsTracker {
    sink: Arc<dyn AnalyticsSink>,
}

impl AnalyticsTracker {
    pub fn new(sink: Arc<dyn AnalyticsSink>) -> Self {
        Self { sink }
    }

    pub fn track_event(&self, name: &str, params: Value) {
        self.sink.emit(name, params);
    }

    pub fn track_page_view(&self, page_path: &str) {
        self.track_event("page_view", json!({ "page_path": page_path }));
    }

    pub fn track_conversion(&self, label: &str, value: Option<f64>) {
        let params = serde_json::to_value(ConversionParams {
            send_to: label,
            value,
            currency: CURRENCY,
        })
        .unwrap_or(Value::Null);
        self.track_event("conversion", params);
    }

    /// Events for a demo form that passed validation, in the order sent
    pub fn track_demo_request(&self) {
        self.track_event("form_submit_attempt", json!({ "form_name": DEMO_FORM_NAME }));
        self.track_event(
            "generate_lead",
            json!({ "currency": CURRENCY, "value": LEAD_VALUE }),
        );
        self.track_conversion(DEMO_CONVERSION_LABEL, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ports::RecordingSink;

    fn tracker() -> (AnalyticsTracker, RecordingSink) {
        let sink = RecordingSink::default();
        (AnalyticsTracker::new(Arc::new(sink.clone())), sink)
    }

    #[test]
    fn test_page_view_payload() {
        let (tracker, sink) = tracker();
        tracker.track_page_view("/en");
        assert_eq!(
            sink.events(),
            vec![("page_view".to_string(), json!({ "page_path": "/en" }))]
        );
    }

    #[test]
    fn test_conversion_payload() {
        let (tracker, sink) = tracker();
        tracker.track_conversion("signup", Some(25.0));
        assert_eq!(
            sink.events()[0].1,
            json!({ "send_to": "signup", "value": 25.0, "currency": "CAD" })
        );
    }

    #[test]
    fn test_demo_request_events() {
        let (tracker, sink) = tracker();
        tracker.track_demo_request();

        let events = sink.events();
        let names: Vec<&str> = events.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["form_submit_attempt", "generate_lead", "conversion"]);
        assert_eq!(events[0].1, json!({ "form_name": "demo_request" }));
        assert_eq!(events[1].1, json!({ "currency": "CAD", "value": 1000 }));
        assert_eq!(
            events[2].1,
            json!({ "send_to": "demo_form_submission", "currency": "CAD" })
        );
    }
}
