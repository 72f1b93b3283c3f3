//! Waitlist signup domain.
//!
//! Everything the landing page needs that does not touch the DOM lives
//! here, so it can be exercised natively:
//! - `validate_email` - shallow client-side email guard
//! - `WaitlistForm` - form state plus the submission state machine
//! - `WaitlistApi` - the contract of the remote `joinWaitList` call
//! - `submission_task` - an abortable submission attempt
//! - `burst` - particles for the success celebration
//!
//! # Example
//!
//! ```rust,ignore
//! use waitlist_core::{submit, Effect, Msg, WaitlistForm};
//!
//! let mut form = WaitlistForm::new();
//! form.update(Msg::EmailChanged("ada@example.com".into()));
//!
//! if let Some(Effect::JoinWaitlist { email }) = form.update(Msg::SubmitRequested) {
//!     let outcome = submit(&api, &email).await;
//!     form.update(outcome);
//! }
//! ```

mod api;
mod config;
pub mod confetti;
mod error;
mod form;
mod task;
mod validate;
mod workflow;

pub use api::*;
pub use config::*;
pub use confetti::{burst, ConfettiConfig, Particle};
pub use error::*;
pub use form::*;
pub use task::*;
pub use validate::*;
pub use workflow::*;
