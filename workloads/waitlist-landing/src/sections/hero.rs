//! Hero section: pitch copy around the signup form.

use leptos::prelude::*;

use super::WaitlistSignup;

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="hero" data-section="hero">
            <p class="hero-tagline">"🔥 Receive & Send money on your terms."</p>
            <h1 class="hero-headline">"Join The Waitlist for " <br/> "Mimoni Today!"</h1>
            <p class="hero-description">
                "We believe everyone has the right to when and how they want to send or \
                 receive money, so we built Mimoni, a platform that allows you to send or \
                 receive money on your own terms."
            </p>
            <WaitlistSignup/>
        </section>
    }
}
