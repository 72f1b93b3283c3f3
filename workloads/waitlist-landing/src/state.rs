//! Reactive wrapper around the waitlist workflow.

use std::time::Duration;

use leptos::prelude::*;
use waitlist_core::{submission_task, ConfettiConfig, Effect, Msg, SubmissionHandle, WaitlistForm};

use crate::api::ServerFnApi;

/// Signals shared by the page sections.
///
/// Every state change goes through [`WaitlistHandle::dispatch`], which runs
/// the reducer and then whatever effect it asks for.
#[derive(Debug, Clone, Copy)]
pub struct WaitlistHandle {
    pub state: RwSignal<WaitlistForm>,
    /// Burst currently on screen, if any.
    pub celebration: RwSignal<Option<u64>>,
    /// Abort handle of the request in flight.
    in_flight: StoredValue<Option<SubmissionHandle>>,
}

impl WaitlistHandle {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(WaitlistForm::new()),
            celebration: RwSignal::new(None),
            in_flight: StoredValue::new(None),
        }
    }

    /// Create the handle and make it available to child components.
    ///
    /// A request still in flight when the page goes away is aborted.
    pub fn provide() -> Self {
        let handle = Self::new();
        provide_context(handle);
        on_cleanup(move || handle.abort_in_flight());
        handle
    }

    pub fn dispatch(self, msg: Msg) {
        let mut effect = None;
        self.state.update(|form| effect = form.update(msg));

        match effect {
            Some(Effect::JoinWaitlist { email }) => {
                let (attempt, abort) = submission_task(&ServerFnApi, email);
                self.in_flight.set_value(Some(abort));
                leptos::task::spawn_local(async move {
                    let outcome = attempt.await;
                    self.in_flight.set_value(None);
                    self.dispatch(outcome);
                });
            }
            Some(Effect::Celebrate { burst }) => self.celebrate(burst),
            None => {}
        }
    }

    /// Stop the request in flight, if any. The form goes back to idle
    /// once the aborted attempt reports in.
    pub fn abort_in_flight(self) {
        self.in_flight.update_value(|slot| {
            if let Some(abort) = slot.take() {
                abort.abort();
            }
        });
    }

    fn celebrate(self, burst: u64) {
        self.celebration.set(Some(burst));

        let linger = ConfettiConfig::default().duration_ms as u64 + 250;
        let celebration = self.celebration;
        set_timeout(
            move || {
                // A newer burst owns the layer now.
                if celebration.get_untracked() == Some(burst) {
                    celebration.set(None);
                }
            },
            Duration::from_millis(linger),
        );
    }
}

impl Default for WaitlistHandle {
    fn default() -> Self {
        Self::new()
    }
}
