//! Application shell and page composition.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::sections::{ConfettiLayer, HeroSection, SiteHeader, SuccessModal};
use crate::state::WaitlistHandle;

// ============================================================================
// Shell (SSR entry point)
// ============================================================================

#[cfg(feature = "ssr")]
pub fn shell(options: leptos::config::LeptosOptions) -> impl IntoView {
    use leptos::hydration::{AutoReload, HydrationScripts};

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options=options.clone() root=""/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Stylesheet id="leptos" href="/pkg/waitlist_landing.css"/>
        <Meta name="description" content="Join the Mimoni waitlist. Receive and send money on your terms."/>
        <Title text="Join The Waitlist | Mimoni"/>

        <Router>
            <Routes fallback>
                <Route path=path!("") view=LandingPage/>
            </Routes>
        </Router>
    }
}

/// The one page: hero, form, overlay and celebration.
#[component]
fn LandingPage() -> impl IntoView {
    WaitlistHandle::provide();

    view! {
        <div class="page">
            <SiteHeader/>
            <main>
                <HeroSection/>
            </main>
            <div class="page-glow" aria-hidden="true"></div>
        </div>
        <SuccessModal/>
        <ConfettiLayer/>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_wasi::response::ResponseOptions>() {
            resp.set_status(leptos_wasi::prelude::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Back to the waitlist"</a>
        </div>
    }
}
