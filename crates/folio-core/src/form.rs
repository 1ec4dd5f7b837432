//! Contact form submission flow, independent of the browser.
//!
//! The browser side supplies three capabilities: a [`SubmitView`] over the
//! form and its button, a [`Transport`] that performs the POST, and a
//! [`Timer`] for the restore delay. [`submit_contact`] drives them in order.

use crate::constants::FORM_RESET_DELAY_MS;
use thiserror::Error;

pub const LABEL_PENDING: &str = "Sending...";
pub const LABEL_SENT: &str = "Sent!";
pub const LABEL_FAILED: &str = "Failed";

pub const SUBMIT_BUTTON_SELECTOR: &str = ".form-submit-btn";
pub const ACCEPT_JSON: &str = "application/json";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Success,
    Failure(SubmitError),
}

impl SubmitOutcome {
    /// Classify an HTTP status: any 2xx is success.
    pub fn from_status(status: u16) -> Self {
        if (200..300).contains(&status) {
            SubmitOutcome::Success
        } else {
            SubmitOutcome::Failure(SubmitError::Status(status))
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Success)
    }
}

/// Inline colours applied to the submit button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonStyle {
    pub background: &'static str,
    pub color: &'static str,
}

impl ButtonStyle {
    pub const SENT: ButtonStyle = ButtonStyle {
        background: "#00ff00",
        color: "#000",
    };
    pub const FAILED: ButtonStyle = ButtonStyle {
        background: "#ff0000",
        color: "",
    };
    /// Empty values drop the inline override.
    pub const CLEARED: ButtonStyle = ButtonStyle {
        background: "",
        color: "",
    };
}

/// Where and how the form is posted. The body is the form's own fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactRequest {
    pub endpoint: String,
    pub accept: &'static str,
}

impl ContactRequest {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            accept: ACCEPT_JSON,
        }
    }
}

pub trait SubmitView {
    fn label(&self) -> String;
    fn set_label(&mut self, label: &str);
    fn set_enabled(&mut self, enabled: bool);
    fn apply_style(&mut self, style: ButtonStyle);
    /// Clear every field of the form.
    fn reset_fields(&mut self);
}

#[allow(async_fn_in_trait)]
pub trait Transport {
    /// POST the form and return the HTTP status.
    async fn post(&self, request: &ContactRequest) -> Result<u16, SubmitError>;
}

#[allow(async_fn_in_trait)]
pub trait Timer {
    async fn sleep_ms(&self, ms: i32);
}

/// Run one submission: pending label, POST, result label, then restore the
/// original label and enabled state after [`FORM_RESET_DELAY_MS`].
pub async fn submit_contact<V, T, S>(
    view: &mut V,
    transport: &T,
    timer: &S,
    request: &ContactRequest,
) -> SubmitOutcome
where
    V: SubmitView,
    T: Transport,
    S: Timer,
{
    let original = view.label();
    view.set_label(LABEL_PENDING);
    view.set_enabled(false);

    let outcome = match transport.post(request).await {
        Ok(status) => SubmitOutcome::from_status(status),
        Err(e) => SubmitOutcome::Failure(e),
    };

    match &outcome {
        SubmitOutcome::Success => {
            view.set_label(LABEL_SENT);
            view.apply_style(ButtonStyle::SENT);
            view.reset_fields();
        }
        SubmitOutcome::Failure(e) => {
            log::error!("[contact] submit to {} failed: {}", request.endpoint, e);
            view.set_label(LABEL_FAILED);
            view.apply_style(ButtonStyle::FAILED);
        }
    }

    timer.sleep_ms(FORM_RESET_DELAY_MS).await;
    view.set_label(&original);
    view.apply_style(ButtonStyle::CLEARED);
    view.set_enabled(true);
    outcome
}
