use log::info;
use serde_json::{json, Value};

/// Tracked interactions on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    PageLoaded,
    NavLinkClicked,
    ToastShown,
    JobSwiped,
    FaqOpened,
    PricingToggle,
    CtaClicked,
    LeadFormSubmitted,
    LeadCaptured,
}

impl Event {
    pub fn name(self) -> &'static str {
        match self {
            Event::PageLoaded => "page_loaded",
            Event::NavLinkClicked => "nav_link_clicked",
            Event::ToastShown => "toast_shown",
            Event::JobSwiped => "job_swiped",
            Event::FaqOpened => "faq_opened",
            Event::PricingToggle => "pricing_toggle",
            Event::CtaClicked => "cta_clicked",
            Event::LeadFormSubmitted => "lead_form_submitted",
            Event::LeadCaptured => "lead_captured",
        }
    }
}

/// Formats one analytics line. Split out so the sink stays a one-liner.
pub fn format_event(event: Event, payload: &Value) -> String {
    format!("[Analytics] {} {}", event.name(), payload)
}

pub fn track(event: Event, payload: Value) {
    info!("{}", format_event(event, &payload));
}

pub fn track_empty(event: Event) {
    track(event, json!({}));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_names_are_snake_case() {
        assert_eq!(Event::JobSwiped.name(), "job_swiped");
        assert_eq!(Event::PricingToggle.name(), "pricing_toggle");
        assert_eq!(Event::LeadCaptured.name(), "lead_captured");
    }

    #[test]
    fn formats_payload_inline() {
        let line = format_event(Event::CtaClicked, &json!({ "target": "lead_form" }));
        assert_eq!(line, r#"[Analytics] cta_clicked {"target":"lead_form"}"#);
    }
}
