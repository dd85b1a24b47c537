use std::collections::HashMap;
use std::str::FromStr;

use chrono::NaiveDate;
use gloo_timers::future::TimeoutFuture;
use log::{error, info};
use serde::Serialize;
use thiserror::Error;

/// Form field names captured at submit time, in confirmation order.
pub const FIELD_NAMES: [&str; 7] = ["name", "service", "date", "time", "address", "phone", "email"];

pub const SUBMIT_LABEL: &str = "Book Your Cleaning";
pub const PROCESSING_LABEL: &str = "⏳ Processing...";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Residential,
    Commercial,
    Deep,
    MoveInOut,
    Carpet,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 5] = [
        ServiceKind::Residential,
        ServiceKind::Commercial,
        ServiceKind::Deep,
        ServiceKind::MoveInOut,
        ServiceKind::Carpet,
    ];

    pub fn code(self) -> &'static str {
        match self {
            ServiceKind::Residential => "residential",
            ServiceKind::Commercial => "commercial",
            ServiceKind::Deep => "deep",
            ServiceKind::MoveInOut => "moveinout",
            ServiceKind::Carpet => "carpet",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceKind::Residential => "Residential Cleaning",
            ServiceKind::Commercial => "Commercial Cleaning",
            ServiceKind::Deep => "Deep Cleaning",
            ServiceKind::MoveInOut => "Move In/Out Cleaning",
            ServiceKind::Carpet => "Carpet & Window Cleaning",
        }
    }
}

impl FromStr for ServiceKind {
    type Err = SubmissionError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        ServiceKind::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| SubmissionError::UnknownService(code.to_owned()))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("booking form has no `{0}` field")]
    MissingField(&'static str),
    #[error("unknown service code `{0}`")]
    UnknownService(String),
    #[error("booking was rejected: {0}")]
    Rejected(String),
}

/// Snapshot of the booking form taken once, when it is submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    pub name: String,
    pub service: String,
    pub date: String,
    pub time: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl BookingRequest {
    /// Builds a request from raw form values. Every field must be present;
    /// empty values are accepted since the form itself enforces `required`.
    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self, SubmissionError> {
        let field = |name: &'static str| {
            fields
                .get(name)
                .cloned()
                .ok_or(SubmissionError::MissingField(name))
        };

        Ok(Self {
            name: field("name")?,
            service: field("service")?,
            date: field("date")?,
            time: field("time")?,
            address: field("address")?,
            phone: field("phone")?,
            email: field("email")?,
        })
    }

    /// Human label for the chosen service, empty for an unknown code.
    pub fn service_label(&self) -> &'static str {
        self.service
            .parse::<ServiceKind>()
            .map(ServiceKind::label)
            .unwrap_or("")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Confirmation {
    message: String,
}

impl Confirmation {
    pub fn for_request(request: &BookingRequest) -> Self {
        let message = format!(
            "✅ Booking Request Confirmed!\n\n\
             Thank you, {}!\n\n\
             Service: {}\n\
             Date: {}\n\
             Time: {}\n\
             Address: {}\n\n\
             We'll contact you at {} within 2 hours to confirm your appointment!\n\n\
             Check your email at {} for confirmation details.",
            request.name,
            request.service_label(),
            request.date,
            request.time,
            request.address,
            request.phone,
            request.email,
        );
        Self { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The call boundary a booking crosses. A networked implementation would
/// post the request here and map transport failures to `SubmissionError`.
#[allow(async_fn_in_trait)]
pub trait BookingSubmitter {
    async fn submit(&self, request: &BookingRequest) -> Result<Confirmation, SubmissionError>;
}

/// Resolves every booking successfully after a fixed delay.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedSubmitter {
    latency_ms: u32,
}

impl SimulatedSubmitter {
    pub fn new(latency_ms: u32) -> Self {
        Self { latency_ms }
    }
}

impl BookingSubmitter for SimulatedSubmitter {
    async fn submit(&self, request: &BookingRequest) -> Result<Confirmation, SubmissionError> {
        TimeoutFuture::new(self.latency_ms).await;
        Ok(Confirmation::for_request(request))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BookingPhase {
    #[default]
    Idle,
    Submitting,
    Done,
}

impl BookingPhase {
    pub fn can_submit(self) -> bool {
        self == BookingPhase::Idle
    }

    pub fn on_submit(self) -> Self {
        match self {
            BookingPhase::Idle => BookingPhase::Submitting,
            other => other,
        }
    }

    /// A failed submission goes straight back to `Idle` with the fields kept.
    pub fn on_resolved(self, succeeded: bool) -> Self {
        match self {
            BookingPhase::Submitting if succeeded => BookingPhase::Done,
            BookingPhase::Submitting => BookingPhase::Idle,
            other => other,
        }
    }

    /// After the confirmation is shown and the form cleared.
    pub fn on_reset(self) -> Self {
        match self {
            BookingPhase::Done => BookingPhase::Idle,
            other => other,
        }
    }

    pub fn button_disabled(self) -> bool {
        self == BookingPhase::Submitting
    }

    pub fn button_label(self) -> &'static str {
        match self {
            BookingPhase::Submitting => PROCESSING_LABEL,
            BookingPhase::Idle | BookingPhase::Done => SUBMIT_LABEL,
        }
    }
}

/// What the page does once a booking resolves.
pub trait BookingSurface {
    fn set_phase(&self, phase: BookingPhase);
    fn show_message(&self, message: &str);
    /// Clears every field of the form.
    fn reset_fields(&self);
    fn scroll_to_top(&self);
}

/// Drives one submission from `Submitting` to its final phase, which is
/// returned. On success the confirmation is shown, the form cleared and the
/// page scrolled to the top; on failure the fields are kept.
pub async fn run_submission<S, P>(submitter: &S, request: &BookingRequest, surface: &P) -> BookingPhase
where
    S: BookingSubmitter,
    P: BookingSurface,
{
    let outcome = submitter.submit(request).await;
    let resolved = BookingPhase::Submitting.on_resolved(outcome.is_ok());

    match outcome {
        Ok(confirmation) => {
            info!("Booking confirmed for {}", request.name);
            surface.set_phase(resolved);
            surface.show_message(confirmation.message());
            surface.reset_fields();
            let phase = resolved.on_reset();
            surface.set_phase(phase);
            surface.scroll_to_top();
            phase
        }
        Err(err) => {
            error!("Booking failed: {}", err);
            surface.show_message(&format!("⚠️ {}", err));
            surface.set_phase(resolved);
            resolved
        }
    }
}

/// Earliest date a booking may be made for: the day after `today`, as `YYYY-MM-DD`.
pub fn min_booking_date(today: NaiveDate) -> String {
    today
        .succ_opt()
        .unwrap_or(today)
        .format("%Y-%m-%d")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    struct InstantSubmitter;

    impl BookingSubmitter for InstantSubmitter {
        async fn submit(&self, request: &BookingRequest) -> Result<Confirmation, SubmissionError> {
            Ok(Confirmation::for_request(request))
        }
    }

    struct RejectingSubmitter;

    impl BookingSubmitter for RejectingSubmitter {
        async fn submit(&self, _request: &BookingRequest) -> Result<Confirmation, SubmissionError> {
            Err(SubmissionError::Rejected("calendar full".into()))
        }
    }

    /// A form held in memory, recording what the flow did to it.
    struct FormSurface {
        fields: RefCell<HashMap<String, String>>,
        phases: RefCell<Vec<BookingPhase>>,
        messages: RefCell<Vec<String>>,
        scrolled_to_top: Cell<bool>,
    }

    impl FormSurface {
        fn filled(fields: HashMap<String, String>) -> Self {
            Self {
                fields: RefCell::new(fields),
                phases: RefCell::new(Vec::new()),
                messages: RefCell::new(Vec::new()),
                scrolled_to_top: Cell::new(false),
            }
        }
    }

    impl BookingSurface for FormSurface {
        fn set_phase(&self, phase: BookingPhase) {
            self.phases.borrow_mut().push(phase);
        }

        fn show_message(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }

        fn reset_fields(&self) {
            for value in self.fields.borrow_mut().values_mut() {
                value.clear();
            }
        }

        fn scroll_to_top(&self) {
            self.scrolled_to_top.set(true);
        }
    }

    fn jane_fields() -> HashMap<String, String> {
        [
            ("name", "Jane"),
            ("service", "deep"),
            ("date", "2025-01-02"),
            ("time", "10:00"),
            ("address", "1 Main St"),
            ("phone", "5551234567"),
            ("email", "jane@x.com"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_service_codes_and_labels() {
        assert_eq!("deep".parse::<ServiceKind>(), Ok(ServiceKind::Deep));
        assert_eq!(ServiceKind::MoveInOut.label(), "Move In/Out Cleaning");
        assert_eq!(ServiceKind::Carpet.label(), "Carpet & Window Cleaning");
        assert_eq!(
            "windows".parse::<ServiceKind>(),
            Err(SubmissionError::UnknownService("windows".into()))
        );
    }

    #[test]
    fn test_service_codes_match_serde_names() {
        for kind in ServiceKind::ALL {
            let encoded = serde_json::to_string(&kind).unwrap();
            assert_eq!(encoded, format!("\"{}\"", kind.code()));
        }
    }

    #[test]
    fn test_request_from_fields() {
        let request = BookingRequest::from_fields(&jane_fields()).unwrap();
        assert_eq!(request.name, "Jane");
        assert_eq!(request.service_label(), "Deep Cleaning");
    }

    #[test]
    fn test_request_requires_every_field() {
        let mut fields = jane_fields();
        fields.remove("email");
        assert_eq!(
            BookingRequest::from_fields(&fields),
            Err(SubmissionError::MissingField("email"))
        );
    }

    #[test]
    fn test_unknown_service_has_empty_label() {
        let mut fields = jane_fields();
        fields.insert("service".into(), "windows".into());
        let request = BookingRequest::from_fields(&fields).unwrap();
        assert_eq!(request.service_label(), "");
    }

    #[test]
    fn test_confirmation_summarizes_booking() {
        let request = BookingRequest::from_fields(&jane_fields()).unwrap();
        let confirmation = block_on(InstantSubmitter.submit(&request)).unwrap();
        let message = confirmation.message();

        assert!(message.starts_with("✅ Booking Request Confirmed!"));
        assert!(message.contains("Thank you, Jane!"));
        assert!(message.contains("Service: Deep Cleaning"));
        assert!(message.contains("Date: 2025-01-02"));
        assert!(message.contains("Time: 10:00"));
        assert!(message.contains("Address: 1 Main St"));
        assert!(message.contains("We'll contact you at 5551234567 within 2 hours"));
        assert!(message.contains("Check your email at jane@x.com"));
    }

    #[test]
    fn test_successful_flow_restores_button() {
        let request = BookingRequest::from_fields(&jane_fields()).unwrap();

        let phase = BookingPhase::default().on_submit();
        assert!(phase.button_disabled());
        assert_eq!(phase.button_label(), PROCESSING_LABEL);
        assert!(!phase.can_submit());

        let outcome = block_on(InstantSubmitter.submit(&request));
        let phase = phase.on_resolved(outcome.is_ok());
        assert_eq!(phase, BookingPhase::Done);

        let phase = phase.on_reset();
        assert_eq!(phase, BookingPhase::Idle);
        assert!(!phase.button_disabled());
        assert_eq!(phase.button_label(), SUBMIT_LABEL);
    }

    #[test]
    fn test_rejected_flow_returns_to_idle() {
        let request = BookingRequest::default();
        let outcome = block_on(RejectingSubmitter.submit(&request));
        assert_eq!(
            outcome.as_ref().unwrap_err().to_string(),
            "booking was rejected: calendar full"
        );

        let phase = BookingPhase::Submitting.on_resolved(outcome.is_ok());
        assert_eq!(phase, BookingPhase::Idle);
    }

    #[test]
    fn test_submit_while_submitting_is_ignored() {
        assert_eq!(BookingPhase::Submitting.on_submit(), BookingPhase::Submitting);
        assert_eq!(BookingPhase::Idle.on_resolved(true), BookingPhase::Idle);
    }

    #[test]
    fn test_min_booking_date_is_tomorrow() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(min_booking_date(today), "2025-01-02");

        let new_years_eve = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(min_booking_date(new_years_eve), "2025-01-01");

        let leap = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        assert_eq!(min_booking_date(leap), "2024-02-29");
    }

    #[test]
    fn test_submission_confirms_and_clears_form() {
        let surface = FormSurface::filled(jane_fields());
        let request = BookingRequest::from_fields(&surface.fields.borrow()).unwrap();

        let phase = block_on(run_submission(&InstantSubmitter, &request, &surface));

        assert_eq!(phase, BookingPhase::Idle);
        assert_eq!(
            *surface.phases.borrow(),
            vec![BookingPhase::Done, BookingPhase::Idle]
        );
        let messages = surface.messages.borrow();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("Deep Cleaning"));
        assert!(surface.fields.borrow().values().all(String::is_empty));
        assert!(surface.scrolled_to_top.get());
        assert!(!phase.button_disabled());
        assert_eq!(phase.button_label(), SUBMIT_LABEL);
    }

    #[test]
    fn test_rejected_submission_keeps_fields() {
        let surface = FormSurface::filled(jane_fields());
        let request = BookingRequest::from_fields(&surface.fields.borrow()).unwrap();

        let phase = block_on(run_submission(&RejectingSubmitter, &request, &surface));

        assert_eq!(phase, BookingPhase::Idle);
        assert_eq!(*surface.phases.borrow(), vec![BookingPhase::Idle]);
        assert_eq!(
            surface.messages.borrow()[0],
            "⚠️ booking was rejected: calendar full"
        );
        assert_eq!(surface.fields.borrow().get("name").map(String::as_str), Some("Jane"));
        assert!(!surface.scrolled_to_top.get());
    }
}
