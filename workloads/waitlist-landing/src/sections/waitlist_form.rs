//! Waitlist signup form.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use waitlist_core::{Field, Msg};

use crate::state::WaitlistHandle;

/// Email input, submit button, and inline errors.
#[component]
pub fn WaitlistSignup() -> impl IntoView {
    let handle = expect_context::<WaitlistHandle>();
    let state = handle.state;

    let field_error = move || {
        state.with(|s| s.field_error(Field::Recipient).map(|e| e.to_string()))
    };
    let failure = move || state.with(|s| s.failure_message().map(str::to_string));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        handle.dispatch(Msg::SubmitRequested);
    };

    view! {
        <form class="waitlist-form" on:submit=on_submit novalidate=true>
            <div class="waitlist-row">
                <input
                    type="email"
                    name=Field::Recipient.as_str()
                    placeholder="Your email address"
                    autocomplete="email"
                    aria-label="Email address"
                    class="waitlist-input"
                    class:invalid=move || field_error().is_some()
                    aria-invalid=move || field_error().is_some().to_string()
                    prop:value=move || state.with(|s| s.email().to_string())
                    on:input=move |ev| handle.dispatch(Msg::EmailChanged(event_target_value(&ev)))
                />
                <button
                    type="submit"
                    class="waitlist-button"
                    disabled=move || !state.with(|s| s.can_submit())
                >
                    {move || state.with(|s| s.button_label())}
                </button>
            </div>
            {move || field_error().map(|message| view! { <p class="field-error">{message}</p> })}
            {move || failure().map(|message| view! { <p class="backend-error" role="alert">{message}</p> })}
        </form>
    }
}
