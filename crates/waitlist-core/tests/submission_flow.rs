//! End-to-end runs of the waitlist workflow against an in-memory service.

use std::cell::RefCell;
use std::collections::HashSet;

use async_trait::async_trait;
use futures::executor::block_on;
use waitlist_core::{
    email_error_message, interpret_response, submission_task, Effect, Field, Msg,
    SubmissionStatus, SubmitError, WaitlistApi, WaitlistForm, FALLBACK_ERROR_MESSAGE,
};

/// Service that answers like the real one: 201 for new emails, 409 with a
/// message for duplicates.
#[derive(Default)]
struct InMemoryWaitlist {
    emails: RefCell<HashSet<String>>,
    calls: RefCell<usize>,
}

#[async_trait(?Send)]
impl WaitlistApi for InMemoryWaitlist {
    async fn join(&self, email: &str) -> Result<(), SubmitError> {
        *self.calls.borrow_mut() += 1;
        if self.emails.borrow_mut().insert(email.to_string()) {
            interpret_response(201, br#"{"email":"echo"}"#)
        } else {
            interpret_response(409, br#"{"message":"Email already registered"}"#)
        }
    }
}

struct Unreachable;

/// Service that never answers.
struct Stalled;

#[async_trait(?Send)]
impl WaitlistApi for Stalled {
    async fn join(&self, _email: &str) -> Result<(), SubmitError> {
        futures::future::pending().await
    }
}

#[async_trait(?Send)]
impl WaitlistApi for Unreachable {
    async fn join(&self, _email: &str) -> Result<(), SubmitError> {
        Err(SubmitError::Transport("connection refused".to_string()))
    }
}

/// Dispatch a submit and, if it asks for the network, run it.
fn submit_form(form: &mut WaitlistForm, api: &dyn WaitlistApi) -> Option<Effect> {
    match form.update(Msg::SubmitRequested) {
        Some(Effect::JoinWaitlist { email }) => {
            assert!(!form.can_submit(), "control must be disabled in flight");
            let (attempt, _handle) = submission_task(api, email);
            let outcome = block_on(attempt);
            form.update(outcome)
        }
        other => other,
    }
}

#[test]
fn test_signup_then_dismiss() {
    let api = InMemoryWaitlist::default();
    let mut form = WaitlistForm::new();

    form.update(Msg::EmailChanged("ada@example.com".to_string()));
    let effect = submit_form(&mut form, &api);

    assert_eq!(effect, Some(Effect::Celebrate { burst: 1 }));
    assert!(form.modal_visible());
    assert_eq!(form.email(), "");
    assert!(form.errors().is_empty());

    form.update(Msg::ModalDismissed);
    assert!(!form.modal_visible());
    assert_eq!(form.status(), &SubmissionStatus::Idle);
    assert_eq!(form.email(), "");
}

#[test]
fn test_duplicate_signup_shows_server_message() {
    let api = InMemoryWaitlist::default();
    let mut form = WaitlistForm::new();

    form.update(Msg::EmailChanged("ada@example.com".to_string()));
    submit_form(&mut form, &api);
    form.update(Msg::ModalDismissed);

    form.update(Msg::EmailChanged("ada@example.com".to_string()));
    let effect = submit_form(&mut form, &api);

    assert_eq!(effect, None);
    assert_eq!(form.failure_message(), Some("Email already registered"));
    assert!(form.can_submit());
    assert_eq!(form.button_label(), "Join Waitlist");
    assert_eq!(*api.calls.borrow(), 2);
}

#[test]
fn test_network_failure_shows_fallback_then_retry() {
    let mut form = WaitlistForm::new();
    form.update(Msg::EmailChanged("ada@example.com".to_string()));

    submit_form(&mut form, &Unreachable);
    assert_eq!(form.failure_message(), Some(FALLBACK_ERROR_MESSAGE));
    assert!(form.can_submit());

    // Manual retry against a working service.
    let api = InMemoryWaitlist::default();
    submit_form(&mut form, &api);
    assert!(form.modal_visible());
    assert_eq!(form.failure_message(), None);
}

#[test]
fn test_aborted_attempt_reenables_form() {
    let mut form = WaitlistForm::new();
    form.update(Msg::EmailChanged("ada@example.com".to_string()));

    let Some(Effect::JoinWaitlist { email }) = form.update(Msg::SubmitRequested) else {
        panic!("valid email should start a submission");
    };
    let (attempt, handle) = submission_task(&Stalled, email);
    assert_eq!(form.button_label(), "Submitting...");

    handle.abort();
    let outcome = block_on(attempt);
    assert_eq!(outcome, Msg::SubmitAborted);

    assert_eq!(form.update(outcome), None);
    assert_eq!(form.status(), &SubmissionStatus::Idle);
    assert_eq!(form.failure_message(), None);
    assert_eq!(form.email(), "ada@example.com");
    assert!(form.can_submit());
}

#[test]
fn test_invalid_email_never_reaches_network() {
    let api = InMemoryWaitlist::default();
    let mut form = WaitlistForm::new();

    for email in ["", "   ", "ada", "ada@", "ada@example"] {
        form.update(Msg::EmailChanged(email.to_string()));
        assert!(!form.can_submit(), "{email:?}");
        assert_eq!(submit_form(&mut form, &api), None);
        assert_eq!(
            form.field_error(Field::Recipient).map(|e| e.to_string()),
            Some(email_error_message(email))
        );
    }
    assert_eq!(*api.calls.borrow(), 0);
}

#[test]
fn test_control_enabled_iff_valid() {
    let form_for = |email: &str| {
        let mut form = WaitlistForm::new();
        form.update(Msg::EmailChanged(email.to_string()));
        form
    };

    for email in ["", " ", "x", "x@y", "@y.z", "x@y.z", "first.last@example.co.uk"] {
        let form = form_for(email);
        let valid = email_error_message(email).is_empty() && !email.trim().is_empty();
        assert_eq!(form.can_submit(), valid, "{email:?}");
    }
}
