//! Sections of the waitlist landing page.

mod confetti;
mod header;
mod hero;
mod success_modal;
mod waitlist_form;

pub use confetti::*;
pub use header::*;
pub use hero::*;
pub use success_modal::*;
pub use waitlist_form::*;
