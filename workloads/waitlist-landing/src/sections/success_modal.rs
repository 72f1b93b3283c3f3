//! Confirmation overlay shown after a successful signup.

use leptos::prelude::*;
use waitlist_core::Msg;

use crate::state::WaitlistHandle;

#[component]
pub fn SuccessModal() -> impl IntoView {
    let handle = expect_context::<WaitlistHandle>();

    view! {
        <Show when=move || handle.state.with(|s| s.modal_visible())>
            <div class="modal-backdrop">
                <div class="modal" role="dialog" aria-modal="true" aria-labelledby="modal-title">
                    <div class="modal-heading">
                        <span class="modal-emoji">"🎉"</span>
                        <h2 id="modal-title">"Thanks for joining!"</h2>
                    </div>
                    <p class="modal-body">
                        "Woohoo! You're in! 🥳 We're thrilled to have you on board, \
                         watch your inbox for something cool!"
                    </p>
                    <button
                        type="button"
                        class="modal-close"
                        on:click=move |_| handle.dispatch(Msg::ModalDismissed)
                    >
                        "Close Popup"
                    </button>
                </div>
            </div>
        </Show>
    }
}
