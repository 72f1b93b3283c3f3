//! Submission workflow state machine.
//!
//! ```text
//! Idle --submit--> Submitting --ok--> Success (overlay) --dismiss--> Idle
//!                             --err-> Failed(message)  --submit--> Submitting
//! ```
//!
//! The machine is cyclic: every outcome hands the form back in an
//! editable state, and a user can retry by submitting again.

use crate::{email_domain, Field, FormState, SubmitError, ValidationError, ValidationErrors};

/// Button label while idle.
pub const JOIN_LABEL: &str = "Join Waitlist";
/// Button label while a request is in flight.
pub const SUBMITTING_LABEL: &str = "Submitting...";

/// Where the last submission attempt stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    /// Last attempt failed; holds the message shown under the form.
    Failed(String),
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }
}

/// Events dispatched into [`WaitlistForm::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The email input changed.
    EmailChanged(String),
    /// The user submitted the form.
    SubmitRequested,
    /// The remote call resolved without error.
    SubmitSucceeded,
    /// The remote call failed.
    SubmitFailed(SubmitError),
    /// The in-flight call was aborted before it resolved.
    SubmitAborted,
    /// The user closed the confirmation overlay.
    ModalDismissed,
}

/// Side effects requested by a transition, run by the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send the email to the waitlist service.
    JoinWaitlist { email: String },
    /// Play the confetti burst identified by `burst`.
    Celebrate { burst: u64 },
}

/// State of the waitlist form component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaitlistForm {
    form: FormState,
    errors: ValidationErrors,
    status: SubmissionStatus,
    modal_visible: bool,
    bursts: u64,
}

impl WaitlistForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a message and return the effect it requests, if any.
    pub fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::EmailChanged(value) => {
                let error = crate::validate_email(&value).err();
                self.errors.set(Field::Recipient, error);
                self.form.recipient_email = value;
                None
            }
            Msg::SubmitRequested => self.request_submit(),
            Msg::SubmitSucceeded => {
                if !self.status.is_submitting() {
                    tracing::debug!("ignoring success outside of a submission");
                    return None;
                }
                self.status = SubmissionStatus::Idle;
                self.form = FormState::default();
                self.errors.clear();
                self.modal_visible = true;
                self.bursts += 1;
                tracing::info!(burst = self.bursts, "joined waitlist");
                Some(Effect::Celebrate { burst: self.bursts })
            }
            Msg::SubmitFailed(error) => {
                if !self.status.is_submitting() {
                    tracing::debug!("ignoring failure outside of a submission");
                    return None;
                }
                tracing::warn!(error = %error, "waitlist submission failed");
                self.status = SubmissionStatus::Failed(error.user_message());
                None
            }
            Msg::SubmitAborted => {
                if self.status.is_submitting() {
                    tracing::debug!("waitlist submission aborted");
                    self.status = SubmissionStatus::Idle;
                }
                None
            }
            Msg::ModalDismissed => {
                self.modal_visible = false;
                None
            }
        }
    }

    fn request_submit(&mut self) -> Option<Effect> {
        if self.status.is_submitting() {
            return None;
        }
        // A new attempt starts without the previous failure.
        self.status = SubmissionStatus::Idle;

        let errors = self.form.validate();
        if !errors.is_empty() {
            self.errors = errors;
            return None;
        }

        let email = self.form.recipient_email.clone();
        tracing::debug!(domain = email_domain(&email), "submitting waitlist signup");
        self.status = SubmissionStatus::Submitting;
        Some(Effect::JoinWaitlist { email })
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.errors.is_empty() && !self.form.is_blank() && !self.status.is_submitting()
    }

    pub fn button_label(&self) -> &'static str {
        if self.status.is_submitting() {
            SUBMITTING_LABEL
        } else {
            JOIN_LABEL
        }
    }

    pub fn email(&self) -> &str {
        &self.form.recipient_email
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn field_error(&self, field: Field) -> Option<ValidationError> {
        self.errors.get(field)
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Message of the last failed attempt.
    pub fn failure_message(&self) -> Option<&str> {
        match &self.status {
            SubmissionStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn modal_visible(&self) -> bool {
        self.modal_visible
    }
}
