//! Waitlist landing page.
//!
//! A single Leptos page served by Spin:
//! - Streaming SSR of the hero section and signup form
//! - Hydrated form driven by the `waitlist-core` state machine
//! - `join_waitlist` server function forwarding signups upstream
//! - Confirmation overlay and confetti on success

pub mod api;
pub mod app;
mod sections;
mod state;

#[cfg(feature = "ssr")]
mod server;

pub use state::WaitlistHandle;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
